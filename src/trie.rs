//! Provides a compressed prefix trie for storing strings.
//!
//! Chains of single-child nodes are collapsed into one edge holding a
//! multi-character substring, so a trie holding `"hello"`, `"hell"` and
//! `"hello world"` needs only four nodes and three child slots.
//!
//! Example 1
//! ```
//! use compressed_trie::trie::{Insertion, Trie};
//!
//! let mut trie = Trie::new();
//! assert_eq!(trie.insert("hello"), Ok(Insertion::Inserted));
//! assert_eq!(trie.insert("hello"), Ok(Insertion::AlreadyExists));
//! assert_eq!(trie.insert("hell"), Ok(Insertion::Inserted));
//! assert_eq!(trie.insert("hello world"), Ok(Insertion::Inserted));
//!
//! assert!(trie.exists("hello"));
//! assert!(trie.exists("hell"));
//! assert!(trie.exists("hello world"));
//! assert!(!trie.exists("hell no"));
//! assert!(trie.starts_with("hello w"));
//! ```
//!
//! Example 2
//! ```
//! use compressed_trie::config::TrieConfig;
//! use compressed_trie::error::TrieError;
//! use compressed_trie::trie::Trie;
//!
//! let mut trie = Trie::with_config(TrieConfig::default().with_max_key_len(8));
//! assert_eq!(trie.insert(""), Err(TrieError::EmptyKey));
//! assert!(matches!(trie.insert("far too long"), Err(TrieError::KeyTooLong { .. })));
//! assert!(trie.is_empty());
//! ```
//!
//! Keys are compared `char` by `char`, so any UTF-8 string may be stored.

use crate::config::TrieConfig;
use crate::error::TrieResult;
use crate::node::Node;

/// Outcome of a successful [`Trie::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The key was not present and has been stored.
    Inserted,
    /// The key was already present; the trie is unchanged.
    AlreadyExists,
}

/// Shape of a trie, as reported by [`Trie::stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Live nodes, including the root.
    pub nodes: usize,
    /// Nodes holding a stored string.
    pub terminals: usize,
    /// Nodes with two or more children.
    pub branch_points: usize,
    /// Child slots allocated across all nodes.
    pub child_slots: usize,
    /// Deepest node, counted in edges from the root.
    pub max_depth: usize,
}

/// Stores strings in a compressed (radix) trie.
#[derive(Debug, PartialEq)]
pub struct Trie {
    pub(crate) root: Node,
    config: TrieConfig,
    count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create a new Trie with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Create a new Trie with the supplied configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: Node::new(String::new()),
            config,
            count: 0,
        }
    }

    /// The configuration this Trie was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Insert the key into the Trie.
    ///
    /// Returns [`Insertion::AlreadyExists`] without touching the Trie if the
    /// key is already present. Keys rejected by the [`TrieConfig`] are
    /// reported as errors before any node is modified.
    pub fn insert(&mut self, key: &str) -> TrieResult<Insertion> {
        if let Err(e) = self.config.validate(key) {
            tracing::debug!(error = %e, "rejecting key");
            return Err(e);
        }

        let (node, rest) = self.root.locate_mut(key);
        if node.value.as_deref() == Some(key) {
            return Ok(Insertion::AlreadyExists);
        }
        node.split(rest).value = Some(key.to_owned());
        self.count += 1;
        Ok(Insertion::Inserted)
    }

    /// Does the Trie contain the supplied key?
    pub fn exists(&self, key: &str) -> bool {
        if self.config.validate(key).is_err() {
            return false;
        }
        let (node, rest) = self.root.locate(key);
        node.covers(rest) && node.value.as_deref() == Some(key)
    }

    /// Does the Trie contain any key starting with the supplied prefix?
    pub fn starts_with(&self, prefix: &str) -> bool {
        let (node, rest) = self.root.locate(prefix);
        node.covers(rest) && (node.value.is_some() || !node.children.is_empty())
    }

    /// Allocated child slots of every live node, in pre-order.
    pub fn child_slots(&self) -> Vec<usize> {
        let mut slots = vec![];
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            slots.push(node.children.capacity());
            stack.extend(node.children.iter().rev());
        }
        slots
    }

    /// Walk the Trie and summarise its shape.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            stats.nodes += 1;
            stats.child_slots += node.children.capacity();
            stats.max_depth = stats.max_depth.max(depth);
            if node.value.is_some() {
                stats.terminals += 1;
            }
            if node.children.len() > 1 {
                stats.branch_points += 1;
            }
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        stats
    }
}
