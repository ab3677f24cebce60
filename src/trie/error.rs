// Copyright (c) 2025 Kokua Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for the Kokua Trie.

use thiserror::Error;

/// Errors that can occur during trie operations.
///
/// Absence of a match is not an error: a lookup for an unknown prefix
/// returns an empty result. Errors are reserved for input the trie cannot
/// represent, and every failed call leaves the trie exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KokuaTrieError {
    /// A character outside the supported alphabet was supplied.
    #[error("Invalid symbol '{symbol}' at position {position}: only 'a' through 'z' are supported")]
    InvalidSymbol {
        /// The offending character, after any configured case folding.
        symbol: char,
        /// Character offset of the symbol within the input.
        position: usize,
    },

    /// The empty string cannot be stored or looked up as a word.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// A word exceeded the configured maximum length.
    #[error("Word '{word}' exceeds the maximum length of {max_len} symbols")]
    WordTooLong {
        /// The rejected word, as supplied.
        word: String,
        /// The configured length cap.
        max_len: usize,
    },
}

/// Result type alias for trie operations.
pub type Result<T> = std::result::Result<T, KokuaTrieError>;
