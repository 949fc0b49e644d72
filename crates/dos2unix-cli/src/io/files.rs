// crates/dos2unix-cli/src/io/files.rs

use std::fs::{File, FileTimes, Metadata};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use dos2unix_core::transcode;

use super::BUF_SIZE;

/// Transcode the file at `input` into `sink` through 64 KiB buffers.
///
/// Returns the flushed sink and the number of bytes written to it.
pub fn convert_into<W: Write>(input: &Path, sink: W) -> Result<(W, u64)> {
    let file = File::open(input).with_context(|| format!("open {}", input.display()))?;
    let mut r = BufReader::with_capacity(BUF_SIZE, file);
    let mut w = BufWriter::with_capacity(BUF_SIZE, sink);

    let n = transcode(&mut w, &mut r).with_context(|| format!("convert {}", input.display()))?;
    let sink = w
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("flush output of {}", input.display()))?;
    Ok((sink, n))
}

/// Set both access and modification time of `file` to the mtime in `meta`.
pub fn copy_mtime(file: &File, meta: &Metadata) -> io::Result<()> {
    let mtime = meta.modified()?;
    file.set_times(FileTimes::new().set_accessed(mtime).set_modified(mtime))
}
