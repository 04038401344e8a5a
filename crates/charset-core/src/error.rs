//! Error types shared across the charset family.

use thiserror::Error;

/// Errors from loading charset data or constructing translators.
///
/// The variants are clonable and comparable so a cached load result can be
/// handed out to every caller, failures included. For the same reason the
/// I/O detail is carried as text rather than as an `std::io::Error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharsetError {
    /// The charset data file could not be read.
    #[error("cannot read charset data {name:?}: {detail}")]
    ResourceUnavailable {
        /// Resolved path of the data file.
        name: String,
        /// Operating system error text.
        detail: String,
    },

    /// The charset data file exists but does not have the required shape.
    #[error("corrupt charset data {name:?}: expected {expected} bytes, found {found}")]
    CorruptTable {
        /// Resolved path of the data file.
        name: String,
        /// Byte length the format requires.
        expected: usize,
        /// Byte length actually read.
        found: usize,
    },

    /// No translator is registered under the requested name.
    #[error("unsupported charset {0:?}")]
    UnsupportedCharset(String),
}
