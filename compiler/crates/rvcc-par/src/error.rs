//! Parse errors.
//!
//! Every failure in this phase is fatal and carries the offending token's
//! line — spec.md §4.2's "Error reporting" contract:
//! `Parser Error (Line N): <detail>` on standard error, then abnormal
//! termination.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parser Error (Line {line}): expected {expected}, found {found}")]
    UnexpectedToken {
        line: u32,
        expected: String,
        found: String,
    },

    #[error("Parser Error (Line {line}): expected {expected}, found end of input")]
    UnexpectedEndOfInput { line: u32, expected: String },

    #[error("Parser Error (Line {line}): '{word}' is not a valid expression factor")]
    InvalidFactor { line: u32, word: String },
}

pub type ParseResult<T> = Result<T, ParseError>;
