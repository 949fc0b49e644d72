// crates/dos2unix-core/src/kernel/byte.rs

use super::Kernel;
use crate::{CR, LF};

/// Portable byte-at-a-time kernel; works for any chunk width.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByteKernel;

impl Kernel for ByteKernel {
    fn collapse<const N: usize>(&self, chunk: &mut [u8; N], len: usize) -> usize {
        debug_assert!(len <= N);
        chunk[len..].fill(0);
        let orig = *chunk;

        let mut out = 0usize;
        for i in 0..len {
            if orig[i] == CR && i + 1 < len && orig[i + 1] == LF {
                continue;
            }
            chunk[out] = orig[i];
            out += 1;
        }
        out
    }
}
