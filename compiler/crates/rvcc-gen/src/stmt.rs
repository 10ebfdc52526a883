//! Statement lowering.
//!
//! Each variant here implements exactly the generation rule spec.md §4.3
//! assigns it; `Block`s and the bodies of `If`/`While` don't introduce a
//! new symbol-table scope, so a bare `Vec<Stmt>` is walked in source
//! order with no save/restore around it.

use rvcc_par::{Expr, Stmt};

use crate::asm::Generator;
use crate::error::{CodeGenError, Result};

impl Generator {
    pub(crate) fn gen_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::Decl { name, init, .. } => self.gen_decl(name, init),
            Stmt::Assign { name, value, .. } => self.gen_assign(name, value),
            Stmt::If {
                cond,
                then_body,
                else_body,
                ..
            } => self.gen_if(cond, then_body, else_body.as_deref()),
            Stmt::While { cond, body, .. } => self.gen_while(cond, body),
            Stmt::Exit { value, .. } => self.gen_exit(value),
            Stmt::Write { value, .. } => self.gen_write(value),
            Stmt::Block(body) => self.gen_block(body),
        }
    }

    fn gen_block(&mut self, body: &[Stmt]) -> Result<()> {
        for stmt in body {
            self.gen_stmt(stmt)?;
        }
        Ok(())
    }

    /// `int IDENT = expression ;` — binds a fresh frame offset *before*
    /// lowering the initializer, per spec.md §4.3's "decrement the
    /// cursor, insert the binding, lower the initializer, then store"
    /// order. A self-referential initializer like `int x = x;` is
    /// therefore well-formed: it reads `x`'s own (uninitialized) slot.
    fn gen_decl(&mut self, name: &str, init: &Expr) -> Result<()> {
        let offset = self.ctx().declare(name)?;
        self.gen_expr(init)?;
        self.instr(&format!("sw a0, {offset}(s0)"));
        Ok(())
    }

    /// `IDENT = expression ;` — the target must already be declared.
    fn gen_assign(&mut self, name: &str, value: &Expr) -> Result<()> {
        let offset =
            self.ctx()
                .offset_of(name)
                .ok_or_else(|| CodeGenError::UndeclaredAssignTarget {
                    name: name.to_string(),
                })?;
        self.gen_expr(value)?;
        self.instr(&format!("sw a0, {offset}(s0)"));
        Ok(())
    }

    /// `if ( expression ) then_body [ else_body ]`, per spec.md §4.3:
    /// a fused conditional branch past `then_body` to `L_else`; if an
    /// `else_body` is present, `then_body` jumps past it to `L_end`.
    fn gen_if(
        &mut self,
        cond: &Expr,
        then_body: &[Stmt],
        else_body: Option<&[Stmt]>,
    ) -> Result<()> {
        let else_label = self.ctx().fresh_label();

        self.gen_condition_branch(cond, &else_label)?;
        self.gen_block(then_body)?;

        match else_body {
            Some(else_stmts) => {
                let end_label = self.ctx().fresh_label();
                self.instr(&format!("j {end_label}"));
                self.label(&else_label);
                self.gen_block(else_stmts)?;
                self.label(&end_label);
            }
            None => self.label(&else_label),
        }
        Ok(())
    }

    /// `while ( expression ) body`, per spec.md §4.3: `L_top:`, a fused
    /// conditional branch to `L_end`, the body, an unconditional jump
    /// back to `L_top`, then `L_end:`.
    fn gen_while(&mut self, cond: &Expr, body: &[Stmt]) -> Result<()> {
        let top_label = self.ctx().fresh_label();
        let end_label = self.ctx().fresh_label();

        self.label(&top_label);
        self.gen_condition_branch(cond, &end_label)?;
        self.gen_block(body)?;
        self.instr(&format!("j {top_label}"));
        self.label(&end_label);
        Ok(())
    }

    /// `exit ( expression ) ;` — lowers the argument into `a0`, then the
    /// Linux RV32 `exit` syscall (number 93 in `a7`).
    fn gen_exit(&mut self, value: &Expr) -> Result<()> {
        self.gen_expr(value)?;
        self.instr("li a7, 93");
        self.instr("ecall");
        Ok(())
    }

    /// `write ( expression , expression ) ;` — only the second argument
    /// is lowered; the first is accepted by the grammar and ignored here
    /// (spec.md §3, §9).
    fn gen_write(&mut self, value: &Expr) -> Result<()> {
        self.gen_expr(value)?;
        self.instr("mv a1, a0");
        self.instr("la a0, fmt");
        self.instr("call printf");
        Ok(())
    }
}
