//! rvcc-lex — converts a byte stream into a linear token sequence with
//! line-number attribution.
//!
//! [`Lexer::tokenize`] is the single entry point: it runs to completion
//! over the whole input and returns every token, including the trailing
//! `EndOfInput` sentinel, or a [`LexError`] if a string literal is left
//! unterminated. Unrecognized bytes are not fatal — they're reported
//! through the caller's [`rvcc_util::DiagnosticHandler`] and skipped.

mod cursor;
mod edge_cases;
mod error;
mod lexer;
mod token;

pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
