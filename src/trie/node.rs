// Copyright (c) 2025 Kokua Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the Kokua Trie.

use crate::trie::symbol::{Symbol, ALPHABET_SIZE};

/// A single node in the trie.
///
/// Holds one owned child slot per alphabet symbol plus the flag marking
/// whether the path from the root to this node spells a stored word. Nodes
/// carry no payload and no symbol of their own; a node's meaning is entirely
/// the edge path leading to it.
#[derive(Debug)]
pub struct TrieNode {
    /// Child slots, addressed by [`Symbol::index`]. A `None` slot means no
    /// stored word continues with that symbol.
    pub children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    /// Whether this node terminates a stored word.
    pub is_end_of_word: bool,
}

impl TrieNode {
    /// Creates an empty node with no children and no word ending here.
    pub fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            is_end_of_word: false,
        }
    }

    /// Returns the child reached by `symbol`, if present.
    pub fn child(&self, symbol: Symbol) -> Option<&TrieNode> {
        self.children[symbol.index()].as_deref()
    }

    /// Returns the child reached by `symbol`, creating it first if absent.
    pub fn child_or_insert(&mut self, symbol: Symbol) -> &mut TrieNode {
        self.children[symbol.index()].get_or_insert_with(|| Box::new(TrieNode::new()))
    }

    /// Finds the first present child in slot `start` or later.
    ///
    /// Scanning slots in ascending order is what gives every traversal its
    /// lexicographic guarantee, so all child visitation funnels through here.
    pub fn next_child_from(&self, start: usize) -> Option<(Symbol, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .skip(start)
            .find_map(|(slot, child)| {
                child.as_deref().map(|node| (Symbol::from_index(slot), node))
            })
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
