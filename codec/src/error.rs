//! Error types for codec operations

use thiserror::Error;

/// Error type for decoding (hearing) operations.
///
/// [Error::HeaderMismatch] is a routing signal rather than a failure: the text belongs to some
/// other message type. Every other variant marks the text as malformed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("header mismatch: expected {expected:?}, found {found:?}")]
    HeaderMismatch {
        expected: Option<char>,
        found: Option<char>,
    },
    #[error("unexpected end of text: needed {needed}, remaining {remaining}")]
    EndOfText { needed: usize, remaining: usize },
    #[error("invalid character: {0:?}")]
    InvalidChar(char),
    #[error("invalid data in {0}: {1}")]
    InvalidData(&'static str, String), // context, message
}

impl Error {
    /// Returns `true` if the text could not be decoded by the message type that claimed it.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Error::HeaderMismatch { .. })
    }
}

/// Error type for encoding (saying) operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("value out of range in {field}: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("integer overflow: {value} does not fit in {width} digits")]
    Overflow { value: u64, width: usize },
    #[error("invalid character: {0:?}")]
    InvalidChar(char),
}
