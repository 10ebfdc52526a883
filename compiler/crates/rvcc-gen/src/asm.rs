//! The assembly generator: owns the output buffer and the per-compilation
//! [`CodeGenContext`], and provides the small set of emission primitives
//! `expr.rs`/`stmt.rs` build the RV32 lowering on top of.
//!
//! Register conventions (spec.md §4.3): `a0` always carries an expression's
//! result; `t0`/`t1` are scratch for the general (register-register) form;
//! `s0` is the frame pointer locals are addressed relative to; `sp` is the
//! machine stack pointer; `ra` is the return address.

use rvcc_par::Program;

use crate::context::{CodeGenContext, LOCAL_AREA_BYTES};
use crate::error::Result;

/// Walks one parsed program once and emits RV32IM assembly text.
pub struct Generator {
    ctx: CodeGenContext,
    out: String,
}

impl Generator {
    /// Creates a generator with a fresh [`CodeGenContext`] — empty symbol
    /// table, label counter and offset cursor both zero.
    pub fn new() -> Self {
        Self {
            ctx: CodeGenContext::new(),
            out: String::new(),
        }
    }

    /// Lowers `program` to a complete assembly file, per spec.md §6's
    /// output structure: a `.data` section with the `printf` format
    /// string, a `.text` section with the `main` prologue, the lowered
    /// body, and the epilogue.
    pub fn generate(mut self, program: &Program) -> Result<String> {
        self.header();
        self.prologue();
        for stmt in &program.statements {
            self.gen_stmt(stmt)?;
        }
        self.epilogue();
        Ok(self.out)
    }

    fn header(&mut self) {
        self.line(".data");
        self.line("fmt: .asciz \"%d\\n\"");
        self.blank();
        self.line(".text");
        self.line(".extern printf");
        self.line(".globl main");
        self.blank();
        self.label("main");
    }

    /// Reserves `ra` and `s0` on the machine stack, establishes `s0` as
    /// the frame pointer, and carves out the fixed local area every
    /// `DeclareInt` offset is addressed within.
    fn prologue(&mut self) {
        self.instr("addi sp, sp, -4");
        self.instr("sw ra, 0(sp)");
        self.instr("addi sp, sp, -4");
        self.instr("sw s0, 0(sp)");
        self.instr("mv s0, sp");
        self.instr(&format!("addi sp, sp, -{LOCAL_AREA_BYTES}"));
    }

    /// The symbolic inverse of [`Self::prologue`]: restores `sp` to its
    /// entry value, pops `s0` then `ra`, and returns.
    fn epilogue(&mut self) {
        self.instr("mv sp, s0");
        self.instr("lw s0, 0(sp)");
        self.instr("addi sp, sp, 4");
        self.instr("lw ra, 0(sp)");
        self.instr("addi sp, sp, 4");
        self.instr("ret");
    }

    pub(crate) fn ctx(&mut self) -> &mut CodeGenContext {
        &mut self.ctx
    }

    /// Emits one indented instruction line.
    pub(crate) fn instr(&mut self, text: &str) {
        self.out.push_str("  ");
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Emits a label definition (`name:`), unindented.
    pub(crate) fn label(&mut self, name: &str) {
        self.out.push_str(name);
        self.out.push_str(":\n");
    }

    /// Emits a raw, unindented line (directives, section headers).
    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
