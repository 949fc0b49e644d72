// crates/dos2unix-core/src/transcode.rs
//
// Streaming CRLF -> LF transcoder.
//
// Per iteration:
// 1. read into buf[offset..], offset being 1 when a CR was carried over
// 2. if the last filled byte is CR, withhold it and carry it to the next chunk
// 3. let the kernel delete CR-before-LF pairs inside the remaining bytes
// 4. write the rewritten prefix, then re-seed the carried CR at buf[0]
//
// Memory use is one chunk regardless of stream length. The byte count only
// advances once a whole chunk has been accepted by the sink.

use std::io::{self, Read, Write};

use crate::carry::Carry;
use crate::error::{Result, TranscodeError};
use crate::kernel::{Kernel, WideKernel};

pub const DEFAULT_CHUNK: usize = 8;

/// Convert `source` to `sink` with the default 8-byte chunk and the u64 kernel.
///
/// Returns the number of bytes written to `sink`.
pub fn transcode<W, R>(sink: &mut W, source: &mut R) -> Result<u64>
where
    W: Write + ?Sized,
    R: Read + ?Sized,
{
    Transcoder::<DEFAULT_CHUNK, WideKernel>::default().transcode(sink, source)
}

#[derive(Debug)]
pub struct Transcoder<const N: usize = DEFAULT_CHUNK, K: Kernel = WideKernel> {
    buf: [u8; N],
    carry: Carry,
    kernel: K,
}

impl<const N: usize, K: Kernel + Default> Default for Transcoder<N, K> {
    fn default() -> Self {
        Self::with_kernel(K::default())
    }
}

impl<const N: usize, K: Kernel> Transcoder<N, K> {
    const MIN_WIDTH: () = assert!(N >= 2, "chunk width must be at least 2 bytes");

    pub fn with_kernel(kernel: K) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::MIN_WIDTH;
        Self {
            buf: [0u8; N],
            carry: Carry::Clear,
            kernel,
        }
    }

    /// Run one stream to completion. The transcoder may be reused afterwards.
    ///
    /// End-of-stream (`Ok(0)` from `read`) is not an error. Any other read or
    /// write failure aborts at once; the error carries the count of bytes
    /// already accepted by `sink`.
    pub fn transcode<W, R>(&mut self, sink: &mut W, source: &mut R) -> Result<u64>
    where
        W: Write + ?Sized,
        R: Read + ?Sized,
    {
        self.carry = Carry::Clear;
        let mut written: u64 = 0;

        loop {
            let offset = self.carry.offset();
            let n = match source.read(&mut self.buf[offset..]) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(TranscodeError::Read { written, source: e }),
            };

            let mut len = offset + n;
            let carry = Carry::after(&self.buf[..len]);
            len -= carry.offset();

            let len = self.kernel.collapse(&mut self.buf, len);
            if len > 0 {
                sink.write_all(&self.buf[..len])
                    .map_err(|e| TranscodeError::Write { written, source: e })?;
                written += len as u64;
            }

            carry.seed(&mut self.buf);
            self.carry = carry;
        }

        if let Some(cr) = self.carry.take().flush_byte() {
            sink.write_all(&[cr])
                .map_err(|e| TranscodeError::Write { written, source: e })?;
            written += 1;
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::ByteKernel;

    #[test]
    fn reuse_starts_from_clear_state() {
        let mut t = Transcoder::<4, ByteKernel>::default();
        let mut out = Vec::new();
        assert_eq!(t.transcode(&mut out, &mut &b"abc\r"[..]).unwrap(), 4);
        assert_eq!(out, b"abc\r");

        // the trailing CR above must not leak into the next stream
        let mut out = Vec::new();
        assert_eq!(t.transcode(&mut out, &mut &b"\nxy"[..]).unwrap(), 3);
        assert_eq!(out, b"\nxy");
    }
}
