//! errors.rs - Custom error types for the regex-filter-core library.
//!
//! A single enum covers every failure the library can report. Pattern
//! compilation failures carry the offending pattern and the underlying
//! `regex::Error` so callers can show the full syntax diagnostic.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// All errors produced by `regex-filter-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream `match` expressions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RegexFilterError {
    /// A pattern could not be compiled by the regex engine.
    ///
    /// This is the configuration error reported to option-parsing layers.
    #[error("Failed to build valid regular expression: {source}")]
    PatternSyntax {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to decode regex filter: {0}")]
    Decode(String),

    #[error("Failed to encode regex filter: {0}")]
    Encode(String),
}

impl RegexFilterError {
    /// Returns the pattern that failed to compile, if this is a syntax error.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            RegexFilterError::PatternSyntax { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}

impl From<bincode::error::DecodeError> for RegexFilterError {
    fn from(err: bincode::error::DecodeError) -> Self {
        RegexFilterError::Decode(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for RegexFilterError {
    fn from(err: bincode::error::EncodeError) -> Self {
        RegexFilterError::Encode(err.to_string())
    }
}
