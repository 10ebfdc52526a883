//! Expression parsing.
//!
//! spec.md §4.2/§9: expressions have no precedence. `expression := factor
//! [ (OPERATOR | COMP) factor ]` — a single factor, optionally followed by
//! exactly one operator and one more factor. There is no recursive descent
//! into further binary expressions on either side.

use rvcc_lex::TokenKind;

use crate::ast::{BinOp, Expr};
use crate::error::{ParseError, ParseResult};
use crate::Parser;

impl<'a> Parser<'a> {
    /// `expression := factor [ (OPERATOR | COMP) factor ]`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let left = self.parse_factor()?;

        let op = match self.current_kind() {
            Some(TokenKind::Operator) | Some(TokenKind::Comparator) => {
                let value = self.current_value().to_string();
                BinOp::from_token_value(&value)
            }
            _ => None,
        };

        let Some(op) = op else {
            return Ok(left);
        };

        self.advance();
        let right = self.parse_factor()?;
        Ok(Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// `factor := INT | IDENT | STRING`
    fn parse_factor(&mut self) -> ParseResult<Expr> {
        let line = self.current_line();
        match self.current_kind() {
            Some(TokenKind::Int) => {
                let text = self.current_value().to_string();
                self.advance();
                let value = text.parse::<i64>().map_err(|_| ParseError::InvalidFactor {
                    line,
                    word: text.clone(),
                })?;
                Ok(Expr::IntLit(value))
            }
            Some(TokenKind::Identifier) => {
                let name = self.current_value().to_string();
                self.advance();
                Ok(Expr::Ident(name))
            }
            Some(TokenKind::String) => {
                let value = self.current_value().to_string();
                self.advance();
                Ok(Expr::StringLit(value))
            }
            Some(_) => Err(ParseError::UnexpectedToken {
                line,
                expected: "INT, IDENT, or STRING".to_string(),
                found: self.current_value().to_string(),
            }),
            None => Err(ParseError::UnexpectedEndOfInput {
                line,
                expected: "INT, IDENT, or STRING".to_string(),
            }),
        }
    }
}
