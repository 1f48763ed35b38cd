//! Parse errors
//!
//! Every failure is returned to the caller as a value. Nothing here logs
//! or panics.

use std::num::ParseFloatError;
use thiserror::Error;

/// Error returned when a quantity string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Parse error: expected a number and a unit, got {0:?}")]
    Malformed(String),

    #[error("Parse error: invalid number {token:?}: {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Unknown unit: {0:?}")]
    UnknownUnit(String),
}

/// The two failure kinds a caller needs to tell apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was not a number followed by a unit
    Parse,
    /// The unit abbreviation is not recognized
    UnknownUnit,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Malformed(_) | ParseError::InvalidNumber { .. } => ErrorKind::Parse,
            ParseError::UnknownUnit(_) => ErrorKind::UnknownUnit,
        }
    }
}
