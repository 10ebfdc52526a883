//! Per-compilation code-generation state.
//!
//! spec.md §3 describes the symbol table, label counter, and stack-offset
//! cursor as "program-wide" but §9's "Global mutable state" redesign flag
//! asks for them to be encapsulated in a context value threaded through
//! code generation instead of living as process-wide globals, so that two
//! compilations in one process (spec.md §5) never share state. `CodeGenContext`
//! is that value: every [`crate::Generator`] owns exactly one, created
//! fresh at the start of a compilation and dropped at the end.

use indexmap::IndexMap;

use crate::error::{CodeGenError, Result};

/// Bytes per stack-allocated integer local (RV32 word size).
pub const WORD_SIZE: i32 = 4;

/// The fixed local stack area the prologue reserves, per spec.md §4.3.
pub const LOCAL_AREA_BYTES: i32 = 128;

/// The symbol table, label counter, and stack-offset cursor for one
/// compilation. `IndexMap` keeps declaration order, which is worth
/// preserving for diagnostics even though `spec.md`'s only mandated
/// operation is lookup by name.
#[derive(Default)]
pub struct CodeGenContext {
    symbols: IndexMap<String, i32>,
    next_offset: i32,
    next_label: u32,
}

impl CodeGenContext {
    /// Creates a fresh context: empty symbol table, label counter at zero,
    /// offset cursor at zero — spec.md §3's "Invariants" for a compilation
    /// start.
    pub fn new() -> Self {
        Self {
            symbols: IndexMap::new(),
            next_offset: 0,
            next_label: 0,
        }
    }

    /// Binds `name` to a fresh frame offset (the post-decrement value of
    /// the stack-offset cursor, per spec.md §3) and returns it. Fails if
    /// `name` is already bound — the symbol table has program-wide
    /// lifetime and no nested scopes, so redeclaration is always an error.
    pub fn declare(&mut self, name: &str) -> Result<i32> {
        if self.symbols.contains_key(name) {
            return Err(CodeGenError::DuplicateDeclaration {
                name: name.to_string(),
            });
        }
        self.next_offset -= WORD_SIZE;
        let offset = self.next_offset;
        self.symbols.insert(name.to_string(), offset);
        Ok(offset)
    }

    /// Looks up `name`'s frame offset. Used both for reading an
    /// `Identifier` and for resolving an `Assign` target, but the two
    /// callers report distinct errors on failure (spec.md §7 item 4).
    pub fn offset_of(&self, name: &str) -> Option<i32> {
        self.symbols.get(name).copied()
    }

    /// Mints a fresh, unique label of the form `L<n>` (spec.md §3's
    /// "Label counter").
    pub fn fresh_label(&mut self) -> String {
        let label = format!("L{}", self.next_label);
        self.next_label += 1;
        label
    }
}
