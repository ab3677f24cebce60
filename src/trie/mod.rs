// Copyright (c) 2025 Kokua Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Kokua Trie implementation.
//!
//! A prefix tree over the fixed lowercase alphabet `a` through `z`, built
//! for word autocomplete: insert words, then enumerate every stored word
//! sharing a prefix. Enumeration is lexicographically ascending by
//! construction, because children are visited in symbol order, never by
//! sorting results afterwards.
//!
//! ## Features
//!
//! - Validated alphabet symbols with explicit errors instead of silent
//!   misindexing on out-of-range input
//! - Failed operations leave the trie untouched; validation always runs
//!   before the first mutation
//! - Eager ([`KokuaTrie::autocomplete`]) and lazy
//!   ([`KokuaTrie::completions`]) enumeration over the same traversal
//! - Configurable word length cap and optional ASCII case folding
//!
//! ## Example
//!
//! ```
//! use kokua_trie_lib::trie::KokuaTrie;
//!
//! let mut trie = KokuaTrie::new();
//! for word in ["banana", "band", "bandana", "cat"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! let suggestions = trie.autocomplete("ban").unwrap();
//! assert_eq!(suggestions, vec!["banana", "band", "bandana"]);
//! assert!(trie.autocomplete("x").unwrap().is_empty());
//! ```

mod config;
mod error;
mod node;
mod symbol;

pub use config::KokuaTrieConfig;
pub use error::{KokuaTrieError, Result};
pub use symbol::{Symbol, ALPHABET_SIZE};

use std::iter::FusedIterator;

use node::TrieNode;

#[cfg(test)]
mod tests;

/// A prefix tree storing words over the lowercase alphabet.
///
/// The tree is a strict hierarchy: every node is owned by exactly one
/// parent slot, and a root-to-node path spells one prefix. Lookups never
/// allocate nodes, and a failed insert never leaves a partial path behind.
///
/// ```
/// use kokua_trie_lib::trie::KokuaTrie;
///
/// let mut trie = KokuaTrie::new();
/// trie.insert("kokua")?;
/// assert!(trie.contains("kokua")?);
/// assert!(!trie.contains("koku")?);
/// assert_eq!(trie.len(), 1);
/// # Ok::<(), kokua_trie_lib::trie::KokuaTrieError>(())
/// ```
#[derive(Debug)]
pub struct KokuaTrie {
    /// Root of the tree; its path is the empty prefix.
    root: TrieNode,
    /// Validation and folding policy, fixed at construction.
    config: KokuaTrieConfig,
    /// Number of distinct words stored.
    word_count: usize,
}

impl KokuaTrie {
    /// Creates an empty trie with the default configuration.
    pub fn new() -> Self {
        Self::with_config(KokuaTrieConfig::default())
    }

    /// Creates an empty trie with the given configuration.
    pub fn with_config(config: KokuaTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
            word_count: 0,
        }
    }

    /// Returns the trie's configuration.
    pub fn config(&self) -> &KokuaTrieConfig {
        &self.config
    }

    /// Inserts a word into the trie.
    ///
    /// Inserting a word that is already stored is a no-op. The word is
    /// validated in full before any node is created, so a rejected word
    /// leaves the trie exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`KokuaTrieError::EmptyWord`] for the empty string
    /// - [`KokuaTrieError::InvalidSymbol`] for a character outside the
    ///   alphabet (after any configured case folding)
    /// - [`KokuaTrieError::WordTooLong`] when the word exceeds the
    ///   configured cap
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let symbols = self.parse_word(word)?;
        if symbols.len() > self.config.max_word_len {
            return Err(KokuaTrieError::WordTooLong {
                word: word.to_string(),
                max_len: self.config.max_word_len,
            });
        }

        let mut node = &mut self.root;
        for symbol in symbols {
            node = node.child_or_insert(symbol);
        }
        if !node.is_end_of_word {
            node.is_end_of_word = true;
            self.word_count += 1;
        }
        Ok(())
    }

    /// Returns whether `word` is stored in the trie.
    ///
    /// A stored word's proper prefixes do not count as stored words.
    ///
    /// # Errors
    ///
    /// Rejects the empty string and characters outside the alphabet, the
    /// same as [`KokuaTrie::insert`].
    pub fn contains(&self, word: &str) -> Result<bool> {
        let symbols = self.parse_word(word)?;
        Ok(self
            .locate(&symbols)
            .map_or(false, |node| node.is_end_of_word))
    }

    /// Collects every stored word starting with `prefix`, in ascending
    /// lexicographic order.
    ///
    /// The empty prefix enumerates the whole lexicon. A prefix no stored
    /// word starts with yields an empty vector; absence of matches is not
    /// an error. When the prefix itself is a stored word it is the first
    /// result.
    ///
    /// # Errors
    ///
    /// [`KokuaTrieError::InvalidSymbol`] for a character outside the
    /// alphabet (after any configured case folding).
    pub fn autocomplete(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self.completions(prefix)?.collect())
    }

    /// Returns a lazy iterator over the stored words starting with
    /// `prefix`, in the same order [`KokuaTrie::autocomplete`] collects.
    ///
    /// The iterator borrows the trie, so the borrow checker keeps
    /// insertions out while it is alive. Validation of the prefix happens
    /// here, not during iteration.
    ///
    /// # Errors
    ///
    /// [`KokuaTrieError::InvalidSymbol`] for a character outside the
    /// alphabet (after any configured case folding).
    pub fn completions(&self, prefix: &str) -> Result<Completions<'_>> {
        let symbols = symbol::parse_symbols(prefix, self.config.fold_case)?;
        Ok(Completions::new(self.locate(&symbols), &symbols))
    }

    /// Returns the number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns whether the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Removes every stored word, keeping the configuration.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.word_count = 0;
    }

    /// Walks the path spelled by `symbols`, if every edge exists.
    fn locate(&self, symbols: &[Symbol]) -> Option<&TrieNode> {
        let mut node = &self.root;
        for &symbol in symbols {
            node = node.child(symbol)?;
        }
        Some(node)
    }

    /// Validates a word argument. Length capping is insert-only; lookups
    /// for over-long words simply miss.
    fn parse_word(&self, word: &str) -> Result<Vec<Symbol>> {
        if word.is_empty() {
            return Err(KokuaTrieError::EmptyWord);
        }
        symbol::parse_symbols(word, self.config.fold_case)
    }
}

impl Default for KokuaTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// One node on the traversal path of a [`Completions`] iterator.
#[derive(Debug)]
struct Frame<'a> {
    node: &'a TrieNode,
    /// Next child slot to scan; advances through `0..=ALPHABET_SIZE`.
    next_child: usize,
    /// Whether this node's own word has been considered.
    visited: bool,
}

impl<'a> Frame<'a> {
    fn new(node: &'a TrieNode) -> Self {
        Self {
            node,
            next_child: 0,
            visited: false,
        }
    }
}

/// Lazy, ordered enumeration of the stored words under one prefix.
///
/// Yields words in ascending lexicographic order. The traversal keeps an
/// explicit stack of the current path instead of recursing, so deep tries
/// cannot overflow the call stack, and words are rendered only when the
/// iterator is advanced.
#[derive(Debug)]
pub struct Completions<'a> {
    /// Current root-to-node path; the bottom frame is the prefix node.
    stack: Vec<Frame<'a>>,
    /// Letters spelled by the current path, prefix included.
    word: String,
}

impl<'a> Completions<'a> {
    /// Starts a traversal at the node reached by `prefix`, or an empty
    /// one when no stored word has that prefix.
    fn new(start: Option<&'a TrieNode>, prefix: &[Symbol]) -> Self {
        Self {
            stack: start.map(|node| vec![Frame::new(node)]).unwrap_or_default(),
            word: prefix.iter().map(|symbol| symbol.to_char()).collect(),
        }
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;

            // A node's own word precedes everything in its subtree.
            if !frame.visited {
                frame.visited = true;
                if frame.node.is_end_of_word {
                    return Some(self.word.clone());
                }
            }

            let node = frame.node;
            match node.next_child_from(frame.next_child) {
                Some((symbol, child)) => {
                    frame.next_child = symbol.index() + 1;
                    self.word.push(symbol.to_char());
                    self.stack.push(Frame::new(child));
                }
                None => {
                    self.stack.pop();
                    // The bottom frame spells the prefix, which stays.
                    if !self.stack.is_empty() {
                        self.word.pop();
                    }
                }
            }
        }
    }
}

impl FusedIterator for Completions<'_> {}
