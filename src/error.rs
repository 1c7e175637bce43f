//! Error types for trie operations.
//!
//! Only boundary validation can fail. Inserting a key that is already
//! present is reported through [`crate::trie::Insertion::AlreadyExists`],
//! not as an error.

/// Errors that can occur when a key is handed to the trie.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// An empty key was supplied and the trie is configured to reject them.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// The key is longer than the configured maximum.
    #[error("Key of {len} bytes exceeds maximum key length of {max}")]
    KeyTooLong {
        /// Length of the rejected key, in bytes.
        len: usize,
        /// The configured maximum, in bytes.
        max: usize,
    },
}

/// Result type for trie operations.
pub type TrieResult<T> = Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_displays_errors() {
        assert_eq!(TrieError::EmptyKey.to_string(), "Empty key not allowed");
        assert_eq!(
            TrieError::KeyTooLong { len: 12, max: 8 }.to_string(),
            "Key of 12 bytes exceeds maximum key length of 8"
        );
    }
}
