// crates/dos2unix-cli/src/cmd/stdio.rs

use std::io::{self, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use dos2unix_core::transcode;

use crate::io::BUF_SIZE;

pub fn run() -> Result<()> {
    let mut r = BufReader::with_capacity(BUF_SIZE, io::stdin().lock());
    let mut w = BufWriter::with_capacity(BUF_SIZE, io::stdout().lock());

    let n = transcode(&mut w, &mut r).context("convert stdin")?;
    w.flush().context("flush stdout")?;

    tracing::debug!("stdin: wrote {n} bytes");
    Ok(())
}
