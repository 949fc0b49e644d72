// crates/dos2unix-core/src/carry.rs
//
// Boundary carry between chunks.
//
// A CR in the last filled slot of a chunk may be the first half of a CRLF
// whose LF has not been read yet. It is withheld from the write and re-seeded
// at position 0 of the next chunk, so "CR at the head of a chunk" is handled
// by the same scan as any interior pair.

use crate::CR;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Carry {
    #[default]
    Clear,
    PendingCr,
}

impl Carry {
    /// Bytes already occupying the front of the next chunk.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Carry::Clear => 0,
            Carry::PendingCr => 1,
        }
    }

    /// Consume the state, leaving `Clear` behind.
    #[inline]
    pub fn take(&mut self) -> Carry {
        std::mem::take(self)
    }

    /// Pre-load the withheld CR into the head of `buf`.
    #[inline]
    pub fn seed(self, buf: &mut [u8]) {
        if self == Carry::PendingCr {
            buf[0] = CR;
        }
    }

    /// The byte still owed to the sink when the stream ends.
    #[inline]
    pub fn flush_byte(self) -> Option<u8> {
        match self {
            Carry::Clear => None,
            Carry::PendingCr => Some(CR),
        }
    }

    /// Decide the carry for a chunk whose filled prefix is `filled`.
    #[inline]
    pub fn after(filled: &[u8]) -> Carry {
        match filled.last() {
            Some(&CR) => Carry::PendingCr,
            _ => Carry::Clear,
        }
    }
}
