//! Diagnostic severity levels and the shared warning sink.
//!
//! Every phase of the compiler (lexer, parser, code generator) reports
//! through the same small surface: fatal conditions are returned as
//! `Result` errors (see the phase-specific error enums in each crate) and
//! non-fatal conditions are pushed through a [`DiagnosticHandler`] owned by
//! the caller for the duration of one compilation. There is no global
//! handler — two compilations running in the same process never share
//! state.

use std::fmt;

/// Diagnostic severity level.
///
/// # Examples
///
/// ```
/// use rvcc_util::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// assert!(Level::Error.is_error());
/// assert!(!Level::Warning.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A fatal condition; compilation cannot continue.
    Error,
    /// A non-fatal condition; compilation continues and still exits `0`.
    Warning,
}

impl Level {
    /// Returns true if this level represents a fatal condition.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns true if this level represents a non-fatal condition.
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single non-fatal diagnostic: a 1-based source line and a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: u32,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning (Line {}): {}", self.line, self.message)
    }
}

/// Collects and reports warnings for one compilation run.
///
/// A fresh `DiagnosticHandler` is created per compilation (never shared
/// process-wide) so that warning counts from one run never leak into
/// another — the same discipline `spec.md` §9 asks for with the symbol
/// table, label counter, and stack-offset cursor.
#[derive(Default)]
pub struct DiagnosticHandler {
    warnings: Vec<Diagnostic>,
}

impl DiagnosticHandler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Records a warning and immediately prints it to standard error as
    /// `Warning (Line N): <message>`, matching the tagged single-line
    /// diagnostic format the external interface specifies.
    pub fn warn(&mut self, line: u32, message: impl Into<String>) {
        let diag = Diagnostic {
            line,
            message: message.into(),
        };
        eprintln!("{diag}");
        self.warnings.push(diag);
    }

    /// All warnings recorded so far, in emission order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// True if at least one warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
