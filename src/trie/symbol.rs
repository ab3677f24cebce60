// Copyright (c) 2025 Kokua Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Symbol type for the Kokua Trie alphabet.
//!
//! The trie stores words over a fixed 26-letter lowercase alphabet. `Symbol`
//! is the validated form of one letter: construction checks the range once,
//! and everything downstream addresses child slots through it, so no other
//! code path performs raw character arithmetic or can go out of bounds.

use crate::trie::error::{KokuaTrieError, Result};

/// Number of distinct symbols in the supported alphabet (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

/// A single validated letter of the trie alphabet.
///
/// Stored as a dense index in `0..ALPHABET_SIZE`, which is also the child
/// slot the symbol addresses in a node. Symbols order exactly as the letters
/// they stand for, which is what makes slot-order traversal lexicographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Validates a character as a trie symbol.
    ///
    /// Only ASCII lowercase letters are accepted; anything else yields
    /// `None`. Case folding, when wanted, happens before this point.
    pub fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_lowercase() {
            Some(Symbol(ch as u8 - b'a'))
        } else {
            None
        }
    }

    /// Rebuilds a symbol from a child slot index.
    ///
    /// Callers must pass an index previously obtained from [`Symbol::index`];
    /// slots are bounded by `ALPHABET_SIZE`, so the narrowing cast is exact.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < ALPHABET_SIZE, "slot index out of alphabet range");
        Symbol(index as u8)
    }

    /// Returns the child slot index this symbol addresses.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Returns the letter this symbol stands for.
    pub fn to_char(self) -> char {
        char::from(self.0 + b'a')
    }

    /// Iterates over the whole alphabet in ascending order.
    pub fn alphabet() -> impl Iterator<Item = Symbol> {
        (0..ALPHABET_SIZE as u8).map(Symbol)
    }
}

/// Parses an input string into its symbol sequence.
///
/// With `fold_case` set, ASCII uppercase letters are mapped onto the
/// lowercase alphabet before validation. The first character outside the
/// alphabet aborts the parse with [`KokuaTrieError::InvalidSymbol`] carrying
/// the character and its offset, so validation always completes before any
/// caller mutates the tree.
pub fn parse_symbols(input: &str, fold_case: bool) -> Result<Vec<Symbol>> {
    let mut symbols = Vec::with_capacity(input.len());
    for (position, mut ch) in input.chars().enumerate() {
        if fold_case {
            ch = ch.to_ascii_lowercase();
        }
        match Symbol::new(ch) {
            Some(symbol) => symbols.push(symbol),
            None => return Err(KokuaTrieError::InvalidSymbol { symbol: ch, position }),
        }
    }
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_accepts_whole_alphabet() {
        for (index, ch) in ('a'..='z').enumerate() {
            let symbol = Symbol::new(ch).expect("lowercase letter must be a symbol");
            assert_eq!(symbol.index(), index);
            assert_eq!(symbol.to_char(), ch);
        }
    }

    #[test]
    fn test_symbol_rejects_out_of_range() {
        // Boundary neighbours of the accepted byte range, then a sample of
        // the character classes the alphabet excludes.
        for ch in ['`', '{', 'A', 'Z', '0', '-', ' ', 'é', '字'] {
            assert!(Symbol::new(ch).is_none(), "{ch:?} must not be a symbol");
        }
    }

    #[test]
    fn test_symbol_ordering_matches_letters() {
        let a = Symbol::new('a').unwrap();
        let b = Symbol::new('b').unwrap();
        let z = Symbol::new('z').unwrap();
        assert!(a < b);
        assert!(b < z);
    }

    #[test]
    fn test_alphabet_is_ascending_and_complete() {
        let letters: Vec<char> = Symbol::alphabet().map(Symbol::to_char).collect();
        let expected: Vec<char> = ('a'..='z').collect();
        assert_eq!(letters, expected);
    }

    #[test]
    fn test_parse_symbols_reports_position() {
        let err = parse_symbols("ab-cd", false).unwrap_err();
        assert_eq!(
            err,
            KokuaTrieError::InvalidSymbol {
                symbol: '-',
                position: 2
            }
        );
    }

    #[test]
    fn test_parse_symbols_folds_ascii_case() {
        let folded = parse_symbols("MiXeD", true).unwrap();
        let plain = parse_symbols("mixed", false).unwrap();
        assert_eq!(folded, plain);

        // Folding is ASCII-only; anything else still fails.
        let err = parse_symbols("École", true).unwrap_err();
        assert_eq!(
            err,
            KokuaTrieError::InvalidSymbol {
                symbol: 'É',
                position: 0
            }
        );
    }

    #[test]
    fn test_parse_symbols_rejects_uppercase_without_folding() {
        let err = parse_symbols("Apple", false).unwrap_err();
        assert_eq!(
            err,
            KokuaTrieError::InvalidSymbol {
                symbol: 'A',
                position: 0
            }
        );
    }
}
