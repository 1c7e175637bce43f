//! Provides a compressed prefix trie (radix or Patricia-style trie) for
//! storing strings and checking whether they exist.
//!
//! Chains of single-child nodes are collapsed into a single edge holding
//! a multi-character substring. Each node keeps its children in a pair of
//! parallel vectors (discriminating `char` and owned child), which only
//! ever hold as many slots as the node has branches.
//!
//! The interface is deliberately small: [`crate::trie::Trie::insert`]
//! reports whether a key was [`crate::trie::Insertion::Inserted`] or
//! [`crate::trie::Insertion::AlreadyExists`], and
//! [`crate::trie::Trie::exists`] answers membership. Keys may be
//! validated at the boundary through a [`crate::config::TrieConfig`];
//! rejected keys are reported as a [`crate::error::TrieError`].
//!
//! Examples:
//! * trie : [`crate::trie`]
//!
//! Typical usages for this data structure:
//!  - Interning
//!  - Storing large numbers of keys with significant amounts of
//!    prefix duplication
//!  - Prefix matching keys

pub mod config;

pub mod error;

mod node;

pub mod trie;

#[cfg(test)]
mod proptests;
