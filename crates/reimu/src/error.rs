//! Error types for lexicon operations.

use std::fmt;
use std::io;

/// Error type for lexicon operations.
#[derive(Debug)]
pub enum Error {
    // Build errors
    /// Key passed to the builder is empty.
    EmptyKey,
    /// Key passed to the builder contains a NUL byte at the given index.
    /// NUL is reserved as the tail terminator and the value-slot byte.
    NulByteInKey { index: usize },

    // File errors
    /// Underlying I/O failure while saving or loading a lexicon file.
    Io(io::Error),
    /// File header mismatch or section lengths that are inconsistent with
    /// the file size.
    Corrupted { reason: &'static str },

    // JSON errors
    /// Failed to parse JSON input.
    JsonParse(String),
    /// JSON value for the given key is not an integer that fits in i32.
    ValueOutOfRange { key: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyKey => write!(f, "empty key"),
            Error::NulByteInKey { index } => {
                write!(f, "NUL byte in key at index {index}")
            }
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Corrupted { reason } => write!(f, "corrupted lexicon file: {reason}"),
            Error::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            Error::ValueOutOfRange { key } => {
                write!(f, "value for key {key:?} is not an i32")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for lexicon operations.
pub type Result<T> = std::result::Result<T, Error>;
