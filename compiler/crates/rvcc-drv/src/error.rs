//! The top-level error type `main` matches on.
//!
//! Wraps each phase's own error enum unchanged (spec.md's "Diagnostics and
//! error handling (ambient)" section) plus an I/O variant for the two
//! filesystem operations the driver itself performs: reading the source
//! file and writing its output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lex(#[from] rvcc_lex::LexError),

    #[error(transparent)]
    Parse(#[from] rvcc_par::ParseError),

    #[error(transparent)]
    CodeGen(#[from] rvcc_gen::CodeGenError),
}
