// crates/dos2unix-cli/src/io/glob.rs
//
// Wildcard expansion for old-file mode.
//
// Only names containing `*`, `?` or `[` are expanded. `*` never crosses a
// separator, and a pattern ending in `/` matches directories only.
// Unreadable directories are skipped, and a pattern with no matches yields
// an empty list rather than an error.

use std::path::PathBuf;

use glob::MatchOptions;
use thiserror::Error;

const META: &[char] = &['*', '?', '['];

#[derive(Debug, Error)]
pub enum GlobError {
    #[error("bad glob pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

pub fn has_meta(name: &str) -> bool {
    name.contains(META)
}

/// Expand `pattern` into the sorted list of existing paths it names.
///
/// A name with no wildcard is returned as-is, existing or not, so a typo
/// surfaces as an open error later instead of vanishing here.
pub fn expand(pattern: &str) -> Result<Vec<PathBuf>, GlobError> {
    if !has_meta(pattern) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let opts = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let paths = glob::glob_with(pattern, opts).map_err(|source| GlobError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let found = paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!("skip {}: {}", e.path().display(), e.error());
                None
            }
        })
        .collect();
    Ok(found)
}
