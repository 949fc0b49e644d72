// crates/dos2unix-core/src/kernel/wide.rs
//
// 8-byte fast path: the chunk is read as one big-endian u64 so each CRLF
// position test is a single AND + compare. Example, "012\r\n567":
//
//    0x3031320d0a353637
//  & 0x000000ffff000000
//  = 0x0000000d0a000000   -> CR at offset 3, LF at offset 4
//
// Collapse keeps the left 3 bytes and shifts the rest up one byte:
//
//    (v & 0xffffff0000000000) | ((v & 0x000000ffffffffff) << 8)
//  = 0x3031320a35363700
//
// Pairs are tested right to left so a collapse never moves a byte that a
// later (leftward) test still depends on.

use super::{ByteKernel, Kernel};

const CRLF_HEAD: u64 = 0x0d0a_0000_0000_0000;
const PAIR_HEAD: u64 = 0xffff_0000_0000_0000;

/// Left-aligned mask covering the first `n` bytes (n in 0..=8).
#[inline]
const fn left(n: usize) -> u64 {
    if n == 0 {
        0
    } else {
        u64::MAX << (8 * (8 - n))
    }
}

/// Uses the u64 path for 8-byte chunks, `ByteKernel` for any other width.
#[derive(Clone, Copy, Debug, Default)]
pub struct WideKernel;

impl Kernel for WideKernel {
    fn collapse<const N: usize>(&self, chunk: &mut [u8; N], len: usize) -> usize {
        if let Ok(word) = <&mut [u8; 8]>::try_from(chunk.as_mut_slice()) {
            return collapse_word(word, len);
        }
        ByteKernel.collapse(chunk, len)
    }
}

fn collapse_word(word: &mut [u8; 8], mut len: usize) -> usize {
    debug_assert!(len <= 8);
    let mut v = u64::from_be_bytes(*word) & left(len);
    let orig = v;

    for i in (0..7usize).rev() {
        let shift = 8 * i as u32;
        if orig & (PAIR_HEAD >> shift) == CRLF_HEAD >> shift {
            v = (v & left(i)) | ((v & (u64::MAX >> (shift + 8))) << 8);
            len -= 1;
        }
    }

    *word = v.to_be_bytes();
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_masks() {
        assert_eq!(left(0), 0);
        assert_eq!(left(1), 0xff00_0000_0000_0000);
        assert_eq!(left(3), 0xffff_ff00_0000_0000);
        assert_eq!(left(8), u64::MAX);
    }

    #[test]
    fn worked_example() {
        let mut w = *b"012\r\n567";
        let n = collapse_word(&mut w, 8);
        assert_eq!(&w[..n], b"012\n567");
    }

    #[test]
    fn pair_at_head_and_tail() {
        let mut w = *b"\r\n34567\r";
        // trailing CR belongs to the carry; transcoder hands us len 7
        let n = collapse_word(&mut w, 7);
        assert_eq!(&w[..n], b"\n34567");

        let mut w = *b"123456\r\n";
        let n = collapse_word(&mut w, 8);
        assert_eq!(&w[..n], b"123456\n");
    }

    #[test]
    fn agrees_with_byte_kernel_on_all_cr_lf_x_words() {
        // every 8-byte word over the alphabet {CR, LF, 'x'}, every fill length
        let alphabet = [b'\r', b'\n', b'x'];
        for code in 0..3usize.pow(8) {
            let mut word = [0u8; 8];
            let mut c = code;
            for slot in word.iter_mut() {
                *slot = alphabet[c % 3];
                c /= 3;
            }
            for len in 0..=8 {
                let mut a = word;
                let mut b = word;
                let na = WideKernel.collapse(&mut a, len);
                let nb = ByteKernel.collapse(&mut b, len);
                assert_eq!(&a[..na], &b[..nb], "word={word:?} len={len}");
            }
        }
    }

    #[test]
    fn other_widths_fall_back() {
        let mut chunk = *b"a\r\nb\r\r\n";
        let n = WideKernel.collapse(&mut chunk, 7);
        assert_eq!(&chunk[..n], b"a\nb\r\n");
    }
}
