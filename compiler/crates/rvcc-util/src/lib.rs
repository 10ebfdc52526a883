//! rvcc-util — shared foundation for the rvcc compiler crates.
//!
//! This crate holds the small amount of infrastructure every phase needs:
//! diagnostic severity levels and the warning sink (`diagnostic`). Phase
//! errors (lex/parse/codegen) live in their own crates next to the code
//! that raises them, each as a `thiserror`-derived enum — see
//! `rvcc-lex::LexError`, `rvcc-par::ParseError`, `rvcc-gen::CodeGenError`.

mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticHandler, Level};

/// Fast, non-cryptographic hash map re-exported for convenience where
/// iteration order doesn't matter (e.g. lexer keyword lookup tables).
/// Ordered maps that do need deterministic iteration (the symbol table)
/// use `indexmap` directly in `rvcc-gen` instead.
pub use rustc_hash::FxHashMap;
