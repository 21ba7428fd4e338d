//! Error types for Huffman code construction.

use thiserror::Error;

/// Error variants for deriving input text and building codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name contains fewer than two vowels.
    #[error("name {name:?} contains {found} vowel(s), 2 required")]
    InsufficientVowels {
        /// The (trimmed) name that was scanned.
        name: String,
        /// Number of vowels found before the scan ended.
        found: usize,
    },

    /// The name is empty or whitespace only.
    #[error("name is empty")]
    EmptyName,

    /// The text to encode is empty.
    #[error("cannot build a code for empty input")]
    EmptyInput,

    /// A placement string is neither `high` nor `low`.
    #[error("unknown placement {0:?}, expected \"high\" or \"low\"")]
    UnknownPlacement(String),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
