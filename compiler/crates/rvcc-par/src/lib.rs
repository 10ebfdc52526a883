//! rvcc-par — turns a token sequence into an abstract syntax tree by
//! recursive descent, detecting and reporting syntactic errors.
//!
//! [`Parser::parse`] is the single entry point: it consumes the whole
//! token slice once, from a single forward cursor, and returns a
//! [`Program`] or the first [`ParseError`] encountered. There is no error
//! recovery — spec.md §7's propagation policy is that the first error in
//! any phase terminates compilation.

pub mod ast;
mod edge_cases;
mod error;
mod expr;
mod stmt;

pub use ast::{BinOp, Expr, Program, Stmt};
pub use error::{ParseError, ParseResult};

use rvcc_lex::{Token, TokenKind};

/// A single forward cursor over a token slice produced by `rvcc-lex`.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`. `tokens` is expected to end with an
    /// `EndOfInput` sentinel, as `rvcc_lex::Lexer::tokenize` always
    /// produces.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parses the whole token sequence into a [`Program`].
    pub fn parse(mut self) -> ParseResult<Program> {
        let statements = self.parse_program_statements()?;
        Ok(Program { statements })
    }

    fn current(&self) -> &Token {
        // The sentinel guarantees there is always a token at or before the
        // last valid index; a parser that walks past EndOfInput is a bug
        // in this crate, not a reachable user-input condition.
        self.tokens
            .get(self.position)
            .unwrap_or_else(|| self.tokens.last().expect("token stream is never empty"))
    }

    fn current_kind(&self) -> Option<TokenKind> {
        Some(self.current().kind)
    }

    fn current_value(&self) -> &str {
        &self.current().value
    }

    fn current_line(&self) -> u32 {
        self.current().line
    }

    fn advance(&mut self) {
        if self.current().kind != TokenKind::EndOfInput {
            self.position += 1;
        }
    }

    fn is_separator(&self, value: &str) -> bool {
        self.current_kind() == Some(TokenKind::Separator) && self.current_value() == value
    }

    /// `consume(kind, value?)` from spec.md §4.2: checks the cursor's
    /// current token against an expected kind and, if supplied, an
    /// expected value text; on match, returns it and advances.
    fn consume(&mut self, kind: TokenKind, expected_value: Option<&str>) -> ParseResult<Token> {
        if self.current().kind == TokenKind::EndOfInput && kind != TokenKind::EndOfInput {
            return Err(self.unexpected_end_of_input(&describe(kind, expected_value)));
        }
        let matches_kind = self.current().kind == kind;
        let matches_value = expected_value.map_or(true, |v| self.current_value() == v);
        if matches_kind && matches_value {
            let tok = self.current().clone();
            self.advance();
            Ok(tok)
        } else {
            Err(self.unexpected_token(&describe(kind, expected_value)))
        }
    }

    fn expect_keyword(&mut self, value: &str) -> ParseResult<Token> {
        self.consume(TokenKind::Keyword, Some(value))
    }

    fn expect_separator(&mut self, value: &str) -> ParseResult<Token> {
        self.consume(TokenKind::Separator, Some(value))
    }

    fn expect_operator(&mut self, value: &str) -> ParseResult<Token> {
        self.consume(TokenKind::Operator, Some(value))
    }

    fn expect_identifier(&mut self) -> ParseResult<String> {
        self.consume(TokenKind::Identifier, None).map(|t| t.value)
    }

    fn unexpected_token(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            line: self.current_line(),
            expected: expected.to_string(),
            found: self.current_value().to_string(),
        }
    }

    fn unexpected_end_of_input(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedEndOfInput {
            line: self.current_line(),
            expected: expected.to_string(),
        }
    }
}

fn describe(kind: TokenKind, value: Option<&str>) -> String {
    match value {
        Some(v) => format!("'{}'", v),
        None => kind.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rvcc_util::DiagnosticHandler;

    fn parse(src: &str) -> ParseResult<Program> {
        let mut diagnostics = DiagnosticHandler::new();
        let tokens = rvcc_lex::Lexer::new(src.as_bytes())
            .tokenize(&mut diagnostics)
            .unwrap();
        Parser::new(&tokens).parse()
    }

    #[test]
    fn empty_program_has_no_statements() {
        let program = parse("").unwrap();
        assert!(program.statements.is_empty());
    }

    #[test]
    fn exit_constant() {
        let program = parse("exit(42);").unwrap();
        assert_eq!(
            program.statements,
            vec![Stmt::Exit {
                value: Expr::IntLit(42),
                line: 1,
            }]
        );
    }

    #[test]
    fn declaration_then_exit() {
        let program = parse("int x = 7; exit(x);").unwrap();
        assert_eq!(
            program.statements,
            vec![
                Stmt::Decl {
                    name: "x".to_string(),
                    init: Expr::IntLit(7),
                    line: 1,
                },
                Stmt::Exit {
                    value: Expr::Ident("x".to_string()),
                    line: 1,
                },
            ]
        );
    }

    #[test]
    fn addition_produces_binary_node_with_no_precedence_nesting() {
        let program = parse("int y = 1 + 2; exit(y);").unwrap();
        match &program.statements[0] {
            Stmt::Decl { init, .. } => assert_eq!(
                *init,
                Expr::Binary {
                    op: BinOp::Add,
                    left: Box::new(Expr::IntLit(1)),
                    right: Box::new(Expr::IntLit(2)),
                }
            ),
            other => panic!("expected Decl, got {other:?}"),
        }
    }

    #[test]
    fn if_without_braces_accepts_a_single_statement_body() {
        let program = parse("if (a less 5) exit(1);").unwrap();
        match &program.statements[0] {
            Stmt::If {
                then_body,
                else_body,
                ..
            } => {
                assert_eq!(then_body.len(), 1);
                assert!(else_body.is_none());
            }
            other => panic!("expected If, got {other:?}"),
        }
    }

    #[test]
    fn while_loop_body_block() {
        let program = parse("while (i less 3) { i = i + 1; }").unwrap();
        match &program.statements[0] {
            Stmt::While { body, .. } => assert_eq!(body.len(), 1),
            other => panic!("expected While, got {other:?}"),
        }
    }

    #[test]
    fn write_keeps_both_arguments() {
        let program = parse(r#"write("ignored", z);"#).unwrap();
        match &program.statements[0] {
            Stmt::Write { ignored, value, .. } => {
                assert_eq!(*ignored, Expr::StringLit("ignored".to_string()));
                assert_eq!(*value, Expr::Ident("z".to_string()));
            }
            other => panic!("expected Write, got {other:?}"),
        }
    }

    #[test]
    fn missing_semicolon_is_a_parse_error_with_line_number() {
        let err = parse("int x = 1").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedEndOfInput { line: 1, .. }
        ));
    }

    #[test]
    fn unexpected_token_reports_its_line() {
        let err = parse("int x = 1;\nexit 2);").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { line: 2, .. }));
    }
}
