// crates/dos2unix-cli/src/cmd/oldfile.rs
//
// In-place conversion. The converted bytes go to a temp file in the target's
// own directory, which is renamed over the original only after everything
// else succeeded. Any earlier failure drops (and deletes) the temp file and
// leaves the original untouched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::io::files::{convert_into, copy_mtime};

pub fn run(files: &[PathBuf], keepdate: bool) -> Result<()> {
    for path in files {
        convert_in_place(path, keepdate)?;
    }
    Ok(())
}

pub fn convert_in_place(path: &Path, keepdate: bool) -> Result<u64> {
    let meta = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    if !meta.is_file() {
        anyhow::bail!("not a regular file: {}", path.display());
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = tempfile::Builder::new()
        .prefix(".dos2unix.")
        .tempfile_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;

    tracing::info!("converting file {} to UNIX format", path.display());
    let (tmp, n) = convert_into(path, tmp)?;

    let file = tmp.as_file();
    file.set_permissions(meta.permissions())
        .with_context(|| format!("copy permissions of {}", path.display()))?;
    if keepdate {
        copy_mtime(file, &meta).with_context(|| format!("keep date of {}", path.display()))?;
    }
    file.sync_all()
        .with_context(|| format!("sync temp file for {}", path.display()))?;

    tmp.persist(path)
        .with_context(|| format!("replace {}", path.display()))?;

    tracing::debug!("{}: wrote {n} bytes", path.display());
    Ok(n)
}
