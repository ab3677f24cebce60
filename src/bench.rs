//! Benchmarking support for the Kokua Trie.
//!
//! Deterministic lexicon generation shared by the criterion benches. The
//! generators avoid randomness so runs are comparable across machines and
//! across revisions.

/// Builds a lowercase word of exactly `length` letters from an index.
///
/// The index is written out in base 26, least significant letter last, so
/// consecutive indices produce words that fan out across the alphabet the
/// way real lexicons do.
pub fn synthetic_word(mut index: usize, length: usize) -> String {
    let mut letters = vec![b'a'; length];
    for slot in letters.iter_mut().rev() {
        *slot = b'a' + (index % 26) as u8;
        index /= 26;
    }
    String::from_utf8(letters).expect("base-26 letters are ASCII")
}

/// Builds a lexicon of `size` distinct words of the given length.
///
/// `length` must be large enough for `size` distinct base-26 words; eight
/// letters cover every size the benches use.
pub fn synthetic_lexicon(size: usize, length: usize) -> Vec<String> {
    (0..size).map(|index| synthetic_word(index, length)).collect()
}
