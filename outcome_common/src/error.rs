//! Error types shared by the library and the inspector binary.
//!
//! `OutcomeError` covers misuse of an `Outcome` (asking a success for its
//! error), failures absorbed by the future bridges, malformed serialized
//! outcomes, and the I/O and JSON failures met while reading them.
use std::io;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum OutcomeError {
    /// `unwrap_err` was called on an `Ok` outcome; carries the rendered success value.
    #[error("Result value is not an error: {0}")]
    NotAnError(String),

    /// A future bridged with `catch_future` panicked before producing a value.
    #[error("Future panicked: {0}")]
    Panicked(String),

    /// A serialized outcome is missing its markers or carries inconsistent ones.
    #[error("Malformed outcome: {0}")]
    Malformed(String),

    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_an_error_message_names_the_value() {
        let e = OutcomeError::NotAnError("10".to_string());
        assert_eq!(e.to_string(), "Result value is not an error: 10");
    }

    #[test]
    fn io_errors_convert() {
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: OutcomeError = io.into();
        assert!(matches!(e, OutcomeError::Io(_)));
        assert_eq!(e.to_string(), "I/O error: gone");
    }
}
