// crates/dos2unix-cli/src/cmd/newfile.rs

use std::fs::{self, File};

use anyhow::{Context, Result};

use crate::config::FilePair;
use crate::io::files::{convert_into, copy_mtime};

pub fn run(pairs: &[FilePair], keepdate: bool) -> Result<()> {
    for pair in pairs {
        convert_pair(pair, keepdate)?;
    }
    Ok(())
}

pub fn convert_pair(pair: &FilePair, keepdate: bool) -> Result<u64> {
    let FilePair { input, output } = pair;

    let meta = fs::metadata(input).with_context(|| format!("stat {}", input.display()))?;
    if same_file(pair) {
        anyhow::bail!(
            "input and output are the same file: {} (use old file mode)",
            input.display()
        );
    }

    let out = File::create(output).with_context(|| format!("create {}", output.display()))?;

    tracing::info!(
        "converting file {} to file {} in UNIX format",
        input.display(),
        output.display()
    );
    let (out, n) = convert_into(input, out)?;

    if keepdate {
        copy_mtime(&out, &meta).with_context(|| format!("keep date of {}", output.display()))?;
    }

    tracing::debug!("{}: wrote {n} bytes", output.display());
    Ok(n)
}

fn same_file(pair: &FilePair) -> bool {
    match (fs::canonicalize(&pair.input), fs::canonicalize(&pair.output)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
