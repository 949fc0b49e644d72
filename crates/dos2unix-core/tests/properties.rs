// crates/dos2unix-core/tests/properties.rs
//
// Property tests for the streaming transcoder. The reference is a one-pass,
// left-to-right replace of "\r\n" with "\n".

use std::io::{self, Read};

use proptest::prelude::*;

use dos2unix_core::{transcode, ByteKernel, Kernel, Transcoder, WideKernel};

// ==================== Helpers ====================

fn naive(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    for (i, &b) in input.iter().enumerate() {
        if b == b'\r' && input.get(i + 1) == Some(&b'\n') {
            continue;
        }
        out.push(b);
    }
    out
}

fn pair_count(input: &[u8]) -> usize {
    input.windows(2).filter(|w| w == b"\r\n").count()
}

fn run_with<const N: usize, K: Kernel + Default>(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let n = Transcoder::<N, K>::default()
        .transcode(&mut out, &mut &input[..])
        .unwrap();
    assert_eq!(n as usize, out.len());
    out
}

/// Hands out the data in caller-chosen read sizes, ignoring how much room the
/// buffer has beyond that.
struct Trickle<'a> {
    data: &'a [u8],
    sizes: Vec<usize>,
    turn: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let want = self.sizes[self.turn % self.sizes.len()];
        self.turn += 1;
        let n = want.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

// ==================== Test Data Generators ====================

/// Bytes heavily weighted towards CR and LF so pairs, lone CRs and runs show up.
fn arb_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(b'\r'),
            3 => Just(b'\n'),
            2 => Just(b'a'),
            1 => any::<u8>(),
        ],
        0..=max_len,
    )
}

// ==================== Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_matches_naive_replace(input in arb_text(200)) {
        let mut out = Vec::new();
        transcode(&mut out, &mut &input[..]).unwrap();
        prop_assert_eq!(out, naive(&input));
    }

    #[test]
    fn prop_length_law(input in arb_text(200)) {
        let mut out = Vec::new();
        let n = transcode(&mut out, &mut &input[..]).unwrap();
        prop_assert_eq!(n as usize, input.len() - pair_count(&input));
    }

    #[test]
    fn prop_lf_only_text_is_untouched(input in prop::collection::vec(any::<u8>().prop_filter("no CR", |b| *b != b'\r'), 0..300)) {
        let mut out = Vec::new();
        let n = transcode(&mut out, &mut &input[..]).unwrap();
        prop_assert_eq!(n as usize, input.len());
        prop_assert_eq!(out, input);
    }

    #[test]
    fn prop_chunk_width_does_not_change_output(input in arb_text(300)) {
        let exp = naive(&input);
        prop_assert_eq!(run_with::<2, ByteKernel>(&input), exp.clone());
        prop_assert_eq!(run_with::<3, ByteKernel>(&input), exp.clone());
        prop_assert_eq!(run_with::<5, WideKernel>(&input), exp.clone());
        prop_assert_eq!(run_with::<8, ByteKernel>(&input), exp.clone());
        prop_assert_eq!(run_with::<8, WideKernel>(&input), exp.clone());
        prop_assert_eq!(run_with::<13, ByteKernel>(&input), exp.clone());
        prop_assert_eq!(run_with::<64, WideKernel>(&input), exp);
    }

    #[test]
    fn prop_short_reads_do_not_change_output(
        input in arb_text(300),
        sizes in prop::collection::vec(1usize..=9, 1..8),
    ) {
        let mut src = Trickle { data: &input, sizes, turn: 0 };
        let mut out = Vec::new();
        let n = transcode(&mut out, &mut src).unwrap();
        prop_assert_eq!(n as usize, out.len());
        prop_assert_eq!(out, naive(&input));
    }
}
