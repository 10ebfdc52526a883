//! Fatal code-generation conditions.
//!
//! Every variant here is one of spec.md §7's "Semantic error at codegen
//! time" cases: undefined identifier on read, assignment to an undeclared
//! target, or duplicate declaration. There is no recovery — the first one
//! raised aborts code generation, matching `rvcc-lex::LexError` and
//! `rvcc-par::ParseError`'s propagation policy for their own phases.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeGenError {
    /// An `Identifier` expression referred to a name the symbol table has
    /// no binding for.
    #[error("CodeGen Error: undefined identifier '{name}'")]
    UndefinedIdentifier { name: String },

    /// An `Assign` statement's target was never declared with `int`.
    #[error("CodeGen Error: assignment to undeclared identifier '{name}'")]
    UndeclaredAssignTarget { name: String },

    /// `int` declared the same identifier twice in one compilation.
    #[error("CodeGen Error: '{name}' is already declared")]
    DuplicateDeclaration { name: String },
}

pub type Result<T> = std::result::Result<T, CodeGenError>;
