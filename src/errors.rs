//! Error types for the untyped argument boundary, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - E001: `NotAString` (a word argument was not a string)
//! - E002: `NotAnArray` (the word-list argument was not an array of strings)
//!
//! There is deliberately no broader taxonomy: the typed API is infallible, and
//! every failure the dynamic API can produce is an invalid-argument-type
//! error, raised synchronously and propagated straight to the caller. Falsy
//! or mismatched inputs are answered with defined `false`/`null` results, not
//! errors — callers must treat those as two different signals.

/// Invalid-argument errors raised by [`crate::dynamic`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("argument must be a string (got {found})")]
    NotAString { found: &'static str },

    #[error("argument must be an array of strings (got {found})")]
    NotAnArray { found: &'static str },
}

impl ArgumentError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ArgumentError::NotAString { .. } => "E001",
            ArgumentError::NotAnArray { .. } => "E002",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ArgumentError::NotAString { .. } => {
                Some("Word arguments must be JSON strings (e.g., \"listen\", not 123)")
            }
            ArgumentError::NotAnArray { .. } => {
                Some("The word list must be a JSON array whose elements are all strings (e.g., [\"eat\", \"tea\"])")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self.help() {
            Some(help_text) => format!("{self} ({})\n{help_text}", self.code()),
            None => format!("{self} ({})", self.code()),
        }
    }
}
