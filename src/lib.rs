//! Kokua Trie Library
//!
//! Prefix-tree word storage with ordered autocomplete. The core is
//! [`trie::KokuaTrie`]: insert words over the fixed lowercase alphabet,
//! then enumerate every stored word sharing a prefix, in ascending
//! lexicographic order. The [`shell`] module is the thin interactive layer
//! the binary wraps around it.
//!
//! # Architecture
//!
//! The crate follows a few firm rules:
//! - The trie is a strict tree: every node is owned by exactly one parent
//!   slot, and the child edge is the ownership edge.
//! - Input is validated in full before any mutation, so a failed call
//!   leaves the structure untouched.
//! - The core never logs and never swallows an error; rendering and
//!   reporting happen at the shell boundary.
//! - Suggestion order falls out of the structure, children being visited
//!   in symbol order, never out of a post-hoc sort.

pub mod shell;
pub mod trie;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the Kokua Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
