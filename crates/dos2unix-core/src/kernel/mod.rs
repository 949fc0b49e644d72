// crates/dos2unix-core/src/kernel/mod.rs
//
// Chunk rewriting strategies.
//
// A kernel sees one chunk at a time. Only `chunk[..len]` holds stream bytes;
// everything past `len` is stale from an earlier, larger fill and is zeroed
// before the scan. Pair detection always reads a snapshot taken before any
// rewriting, so a CR that slides into place after an earlier collapse is
// never paired a second time ("\r\r\n" -> "\r\n", not "\n").

mod byte;
mod wide;

pub use byte::ByteKernel;
pub use wide::WideKernel;

pub trait Kernel {
    /// Delete every CR immediately followed by LF within `chunk[..len]`.
    ///
    /// Returns the new number of live bytes at the front of `chunk`.
    fn collapse<const N: usize>(&self, chunk: &mut [u8; N], len: usize) -> usize;
}
