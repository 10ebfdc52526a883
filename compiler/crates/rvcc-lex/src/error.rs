//! Fatal lexer conditions.
//!
//! The lexer has exactly one fatal condition — an unterminated string
//! literal — everything else (a stray unrecognized byte) is a recoverable
//! warning reported through `rvcc_util::DiagnosticHandler` instead of an
//! `Err`. This mirrors how `rvcc-par::ParseError` and `rvcc-gen::CodeGenError`
//! are each scoped to the one phase that raises them.

use thiserror::Error;

/// Errors that abort lexing outright.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A `"` was opened but the input ended before a closing `"` was found.
    #[error("Lexer Error (Line {line}): unterminated string literal")]
    UnterminatedString { line: u32 },
}

/// Convenience alias for lexer results.
pub type LexResult<T> = Result<T, LexError>;
