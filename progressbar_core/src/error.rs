//! Error types for the progress bar library
//!
//! Construction is the only fallible operation: once a bar exists, every
//! render is best-effort and never surfaces an error to the caller.

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the progress bar library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Format string was not exactly three characters (begin, fill, end)
    #[error("invalid format string: expected exactly 3 characters, got {length}")]
    InvalidFormat { length: usize },
}

impl Error {
    /// Create an invalid format error for a string of the given length
    pub fn invalid_format(length: usize) -> Self {
        Self::InvalidFormat { length }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_error_message() {
        let error = Error::invalid_format(5);
        assert!(error.to_string().contains("invalid format string"));
        assert!(error.to_string().contains('5'));
    }
}
