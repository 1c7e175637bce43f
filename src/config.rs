//! Configuration for a [`crate::trie::Trie`].

use crate::error::{TrieError, TrieResult};

/// Controls which keys a trie accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieConfig {
    /// Whether the empty string may be stored.
    pub allow_empty: bool,

    /// Maximum key length in bytes. `None` means unbounded.
    pub max_key_len: Option<usize>,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            allow_empty: false,
            max_key_len: None,
        }
    }
}

impl TrieConfig {
    /// Allow (or forbid) the empty key.
    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Bound key length, in bytes.
    pub fn with_max_key_len(mut self, max: usize) -> Self {
        self.max_key_len = Some(max);
        self
    }

    /// Check a key against this configuration.
    pub(crate) fn validate(&self, key: &str) -> TrieResult<()> {
        if key.is_empty() && !self.allow_empty {
            return Err(TrieError::EmptyKey);
        }
        match self.max_key_len {
            Some(max) if key.len() > max => Err(TrieError::KeyTooLong {
                len: key.len(),
                max,
            }),
            _ => Ok(()),
        }
    }
}
