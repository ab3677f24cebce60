// Copyright (c) 2025 Kokua Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Configuration for the Kokua Trie.

/// Configuration options for a [`KokuaTrie`](crate::trie::KokuaTrie).
///
/// Defaults are strict: input outside the lowercase alphabet is rejected
/// rather than folded, and words are capped at 64 symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KokuaTrieConfig {
    /// Longest accepted word, in symbols. Inserting a longer word fails
    /// with `WordTooLong`; lookups are not capped, they simply miss.
    pub max_word_len: usize,
    /// Fold ASCII uppercase input onto the lowercase alphabet instead of
    /// rejecting it. Folding never changes what the trie stores, only what
    /// it accepts: stored words are always lowercase.
    pub fold_case: bool,
}

impl KokuaTrieConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self {
            max_word_len: 64,
            fold_case: false,
        }
    }

    /// Sets the maximum accepted word length.
    ///
    /// # Panics
    ///
    /// Panics if `max_word_len` is zero, which would reject every word.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        assert!(max_word_len > 0, "Maximum word length must be greater than 0");
        self.max_word_len = max_word_len;
        self
    }

    /// Enables or disables ASCII case folding on input.
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }
}

impl Default for KokuaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KokuaTrieConfig::default();
        assert_eq!(config.max_word_len, 64);
        assert!(!config.fold_case);
    }

    #[test]
    fn test_builder_methods() {
        let config = KokuaTrieConfig::new()
            .with_max_word_len(12)
            .with_fold_case(true);
        assert_eq!(config.max_word_len, 12);
        assert!(config.fold_case);
    }

    #[test]
    #[should_panic(expected = "Maximum word length must be greater than 0")]
    fn test_zero_max_word_len_panics() {
        let _ = KokuaTrieConfig::new().with_max_word_len(0);
    }
}
