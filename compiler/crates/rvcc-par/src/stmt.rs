//! Statement parsing.
//!
//! `program := statement*` and `block := "{" statement* "}"` both reduce
//! to running [`Parser::parse_statement`] until a terminator; empty
//! statements (`;`) are consumed and produce no node, matching spec.md
//! §4.2's "AST construction" contract.

use rvcc_lex::TokenKind;

use crate::ast::Stmt;
use crate::error::ParseResult;
use crate::Parser;

impl<'a> Parser<'a> {
    /// `program := statement*`, consumed until `EndOfInput`.
    pub(crate) fn parse_program_statements(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while self.current_kind() != Some(TokenKind::EndOfInput) {
            if let Some(stmt) = self.parse_statement()? {
                statements.push(stmt);
            }
        }
        Ok(statements)
    }

    /// `block := "{" statement* "}"`. The opening `{` must already be the
    /// current token.
    pub(crate) fn parse_block(&mut self) -> ParseResult<Vec<Stmt>> {
        self.expect_separator("{")?;
        let mut statements = Vec::new();
        while !self.is_separator("}") {
            if self.current_kind() == Some(TokenKind::EndOfInput) {
                return Err(self.unexpected_end_of_input("'}'"));
            }
            if let Some(stmt) = self.parse_statement()? {
                statements.push(stmt);
            }
        }
        self.expect_separator("}")?;
        Ok(statements)
    }

    /// `(block | statement)` — the body form `if`/`while` accept: either a
    /// braced block or a single bare statement (spec.md's "Nested `if`
    /// without braces" boundary behavior).
    pub(crate) fn parse_body(&mut self) -> ParseResult<Vec<Stmt>> {
        if self.current_kind() == Some(TokenKind::Separator) && self.current_value() == "{" {
            self.parse_block()
        } else {
            match self.parse_statement()? {
                Some(stmt) => Ok(vec![stmt]),
                None => Ok(Vec::new()),
            }
        }
    }

    /// `statement := exit_stmt | write_stmt | decl | assign | if_stmt
    ///             | while_stmt | block | ";"`
    ///
    /// Returns `Ok(None)` for a bare `;`, which produces no AST node.
    fn parse_statement(&mut self) -> ParseResult<Option<Stmt>> {
        let line = self.current_line();

        if self.current_kind() == Some(TokenKind::Separator) {
            match self.current_value() {
                ";" => {
                    self.advance();
                    return Ok(None);
                }
                "{" => return Ok(Some(Stmt::Block(self.parse_block()?))),
                _ => {}
            }
        }

        if self.current_kind() == Some(TokenKind::Keyword) {
            return match self.current_value() {
                "EXIT" => self.parse_exit(line).map(Some),
                "WRITE" => self.parse_write(line).map(Some),
                "INT" => self.parse_decl(line).map(Some),
                "IF" => self.parse_if(line).map(Some),
                "WHILE" => self.parse_while(line).map(Some),
                _ => Err(self.unexpected_token("a statement")),
            };
        }

        if self.current_kind() == Some(TokenKind::Identifier) {
            return self.parse_assign(line).map(Some);
        }

        Err(self.unexpected_token("a statement"))
    }

    /// `exit_stmt := "EXIT" "(" expression ")" ";"`
    fn parse_exit(&mut self, line: u32) -> ParseResult<Stmt> {
        self.expect_keyword("EXIT")?;
        self.expect_separator("(")?;
        let value = self.parse_expression()?;
        self.expect_separator(")")?;
        self.expect_separator(";")?;
        Ok(Stmt::Exit { value, line })
    }

    /// `write_stmt := "WRITE" "(" expression "," expression ")" ";"`
    fn parse_write(&mut self, line: u32) -> ParseResult<Stmt> {
        self.expect_keyword("WRITE")?;
        self.expect_separator("(")?;
        let ignored = self.parse_expression()?;
        self.expect_separator(",")?;
        let value = self.parse_expression()?;
        self.expect_separator(")")?;
        self.expect_separator(";")?;
        Ok(Stmt::Write {
            ignored,
            value,
            line,
        })
    }

    /// `decl := "INT" IDENT "=" expression ";"`
    fn parse_decl(&mut self, line: u32) -> ParseResult<Stmt> {
        self.expect_keyword("INT")?;
        let name = self.expect_identifier()?;
        self.expect_operator("=")?;
        let init = self.parse_expression()?;
        self.expect_separator(";")?;
        Ok(Stmt::Decl { name, init, line })
    }

    /// `assign := IDENT "=" expression ";"`
    fn parse_assign(&mut self, line: u32) -> ParseResult<Stmt> {
        let name = self.expect_identifier()?;
        self.expect_operator("=")?;
        let value = self.parse_expression()?;
        self.expect_separator(";")?;
        Ok(Stmt::Assign { name, value, line })
    }

    /// `if_stmt := "IF" "(" expression ")" (block | statement)`
    fn parse_if(&mut self, line: u32) -> ParseResult<Stmt> {
        self.expect_keyword("IF")?;
        self.expect_separator("(")?;
        let cond = self.parse_expression()?;
        self.expect_separator(")")?;
        let then_body = self.parse_body()?;
        // `else` is not in the grammar above; `child3`/`else_body` stays
        // `None` unless this implementation is extended (spec.md §4.2's
        // "Dangling else" note).
        Ok(Stmt::If {
            cond,
            then_body,
            else_body: None,
            line,
        })
    }

    /// `while_stmt := "WHILE" "(" expression ")" (block | statement)`
    fn parse_while(&mut self, line: u32) -> ParseResult<Stmt> {
        self.expect_keyword("WHILE")?;
        self.expect_separator("(")?;
        let cond = self.parse_expression()?;
        self.expect_separator(")")?;
        let body = self.parse_body()?;
        Ok(Stmt::While { cond, body, line })
    }
}
