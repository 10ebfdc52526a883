//! Expression lowering.
//!
//! Contract (spec.md §4.3): after [`Generator::gen_expr`] runs, the
//! integer result occupies `a0`. Two forms are distinguished for binary
//! operators to pick the cheaper encoding: an *immediate form* when the
//! right operand is a literal (folds the constant into the instruction
//! word) and a *general form* otherwise (both operands computed into
//! registers).

use rvcc_par::{BinOp, Expr};

use crate::asm::Generator;
use crate::error::{CodeGenError, Result};

impl Generator {
    /// Lowers `expr`, leaving its value in `a0`.
    pub(crate) fn gen_expr(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::IntLit(value) => {
                self.instr(&format!("li a0, {value}"));
                Ok(())
            }
            Expr::Ident(name) => {
                let offset = self.ctx().offset_of(name).ok_or_else(|| {
                    CodeGenError::UndefinedIdentifier {
                        name: name.to_string(),
                    }
                })?;
                self.instr(&format!("lw a0, {offset}(s0)"));
                Ok(())
            }
            // String literals are lexed but never reach code generation
            // (spec.md §9). Accepted silently: `a0` still gets a defined
            // value so callers that landed here via anything other than
            // `write`'s first argument see a well-formed (if meaningless)
            // result rather than undefined register state.
            Expr::StringLit(_) => {
                self.instr("li a0, 0");
                Ok(())
            }
            Expr::Binary { op, left, right } => self.gen_binary(*op, left, right),
        }
    }

    fn gen_binary(&mut self, op: BinOp, left: &Expr, right: &Expr) -> Result<()> {
        if let Expr::IntLit(imm) = right {
            self.gen_immediate_binary(op, left, *imm)
        } else {
            self.gen_general_binary(op, left, right)
        }
    }

    /// The right operand is a literal: lower the left operand into `a0`,
    /// then fold `imm` directly into the instruction word where the ISA
    /// allows it (`addi`/`slti`), or load it into `a1` first when it
    /// doesn't (`mul`/`div`/`rem`, and the comparator forms that need a
    /// second register).
    fn gen_immediate_binary(&mut self, op: BinOp, left: &Expr, imm: i64) -> Result<()> {
        self.gen_expr(left)?;
        match op {
            BinOp::Add => self.instr(&format!("addi a0, a0, {imm}")),
            BinOp::Sub => self.instr(&format!("addi a0, a0, {}", -imm)),
            BinOp::Mul => {
                self.instr(&format!("li a1, {imm}"));
                self.instr("mul a0, a0, a1");
            }
            BinOp::Div => {
                self.instr(&format!("li a1, {imm}"));
                self.instr("div a0, a0, a1");
            }
            BinOp::Rem => {
                self.instr(&format!("li a1, {imm}"));
                self.instr("rem a0, a0, a1");
            }
            BinOp::Eq => {
                self.instr(&format!("li a1, {imm}"));
                self.instr("sub a0, a0, a1");
                self.instr("seqz a0, a0");
            }
            BinOp::Neq => {
                self.instr(&format!("li a1, {imm}"));
                self.instr("sub a0, a0, a1");
                self.instr("snez a0, a0");
            }
            BinOp::Less => self.instr(&format!("slti a0, a0, {imm}")),
            BinOp::Greater => {
                self.instr(&format!("li a1, {imm}"));
                self.instr("slt a0, a1, a0");
            }
            // `<=` folds the constant arithmetically (`imm + 1`) so a
            // single `slti` still does the work of `< (imm + 1)`.
            BinOp::LessEq => self.instr(&format!("slti a0, a0, {}", imm + 1)),
            BinOp::GreaterEq => {
                self.instr(&format!("slti a0, a0, {imm}"));
                self.instr("xori a0, a0, 1");
            }
        }
        Ok(())
    }

    /// Neither operand is a literal: compute the left operand into `a0`
    /// and stash it in `t0`, compute the right operand into `a0` and
    /// stash it in `t1`, then apply the two-register form. Comparisons
    /// missing a direct RV32I instruction (`>`, `<=`, `>=`) are synthesized
    /// with `sgt`/`slt`/`sgt` plus `xori`; results are always 0 or 1 in
    /// `a0`.
    fn gen_general_binary(&mut self, op: BinOp, left: &Expr, right: &Expr) -> Result<()> {
        self.gen_expr(left)?;
        self.instr("mv t0, a0");
        self.gen_expr(right)?;
        self.instr("mv t1, a0");
        match op {
            BinOp::Add => self.instr("add a0, t0, t1"),
            BinOp::Sub => self.instr("sub a0, t0, t1"),
            BinOp::Mul => self.instr("mul a0, t0, t1"),
            BinOp::Div => self.instr("div a0, t0, t1"),
            BinOp::Rem => self.instr("rem a0, t0, t1"),
            BinOp::Eq => {
                self.instr("sub a0, t0, t1");
                self.instr("seqz a0, a0");
            }
            BinOp::Neq => {
                self.instr("sub a0, t0, t1");
                self.instr("snez a0, a0");
            }
            BinOp::Less => self.instr("slt a0, t0, t1"),
            BinOp::Greater => self.instr("sgt a0, t0, t1"),
            BinOp::LessEq => {
                self.instr("sgt a0, t0, t1");
                self.instr("xori a0, a0, 1");
            }
            BinOp::GreaterEq => {
                self.instr("slt a0, t0, t1");
                self.instr("xori a0, a0, 1");
            }
        }
        Ok(())
    }

    /// Conditional lowering for `if`/`while` (spec.md §4.3): emits a
    /// branch to `target` taken when `cond` is *false*, so the
    /// fall-through path is the "true" branch. When `cond` is a direct
    /// comparator `Binary`, the compare fuses with the branch using the
    /// negated predicate (immediate or general form, matching
    /// `gen_binary`'s two forms); any other expression is lowered
    /// normally (0/1 result in `a0`) and tested with `beqz`.
    pub(crate) fn gen_condition_branch(&mut self, cond: &Expr, target: &str) -> Result<()> {
        if let Expr::Binary { op, left, right } = cond {
            if let Some(branch) = negated_branch(*op) {
                if let Expr::IntLit(imm) = right.as_ref() {
                    self.gen_expr(left)?;
                    self.instr(&format!("li a1, {imm}"));
                    self.instr(&format!("{branch} a0, a1, {target}"));
                    return Ok(());
                }
                self.gen_expr(left)?;
                self.instr("mv t0, a0");
                self.gen_expr(right)?;
                self.instr("mv t1, a0");
                self.instr(&format!("{branch} t0, t1, {target}"));
                return Ok(());
            }
        }

        self.gen_expr(cond)?;
        self.instr(&format!("beqz a0, {target}"));
        Ok(())
    }
}

/// The branch mnemonic that fires when `op`'s comparison is *false* — the
/// negated predicate spec.md §4.3's conditional lowering fuses into a
/// single branch rather than computing a 0/1 value first. `None` for the
/// arithmetic operators, which never get the fused treatment: a condition
/// like `if (a + b)` falls back to normal lowering plus `beqz`.
fn negated_branch(op: BinOp) -> Option<&'static str> {
    match op {
        BinOp::Eq => Some("bne"),
        BinOp::Neq => Some("beq"),
        BinOp::Less => Some("bge"),
        BinOp::Greater => Some("ble"),
        BinOp::LessEq => Some("bgt"),
        BinOp::GreaterEq => Some("blt"),
        BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Rem => None,
    }
}
