//! The lexer driver: dispatches each position after whitespace to the
//! classification rule that applies, per spec.md §4.1.

mod identifier;
mod number;
mod operator;
mod string;

use rvcc_util::DiagnosticHandler;

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// Converts a byte buffer into a finite token sequence terminated by a
/// single `EndOfInput` sentinel.
///
/// Unrecognized bytes are reported through `diagnostics` as warnings and
/// skipped; only an unterminated string literal aborts lexing outright.
pub struct Lexer<'source> {
    cursor: Cursor<'source>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over `source`.
    pub fn new(source: &'source [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Runs the lexer to completion, producing every token including the
    /// trailing `EndOfInput` sentinel.
    pub fn tokenize(mut self, diagnostics: &mut DiagnosticHandler) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            let line = self.cursor.line();
            let Some(b) = self.cursor.current() else {
                tokens.push(Token::end_of_input(line));
                break;
            };

            if b == b'"' {
                self.cursor.bump();
                let value = string::scan_string(&mut self.cursor, line)?;
                tokens.push(Token::new(TokenKind::String, value, line));
                continue;
            }

            if let Some(kind) = operator::classify(b) {
                self.cursor.bump();
                tokens.push(Token::new(kind, (b as char).to_string(), line));
                continue;
            }

            if b.is_ascii_digit() {
                let value = number::scan_int(&mut self.cursor);
                tokens.push(Token::new(TokenKind::Int, value, line));
                continue;
            }

            if b.is_ascii_alphabetic() {
                let (kind, value) = identifier::scan_identifier(&mut self.cursor);
                tokens.push(Token::new(kind, value, line));
                continue;
            }

            diagnostics.warn(line, format!("unrecognized character '{}'", b as char));
            self.cursor.bump();
        }

        Ok(tokens)
    }

    /// Skips spaces, tabs, carriage returns, and newlines, letting
    /// [`Cursor::bump`] increment the line counter on `\n`. A bare `\r`
    /// (as in CRLF) is whitespace too and does not itself advance the
    /// line counter.
    fn skip_whitespace(&mut self) {
        self.cursor
            .eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &[u8]) -> Vec<Token> {
        let mut diagnostics = DiagnosticHandler::new();
        Lexer::new(src).tokenize(&mut diagnostics).unwrap()
    }

    #[test]
    fn empty_input_yields_only_end_of_input() {
        let tokens = lex(b"");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn exit_constant_program() {
        let tokens = lex(b"exit(42);");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword,
                TokenKind::Separator,
                TokenKind::Int,
                TokenKind::Separator,
                TokenKind::Separator,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(tokens[0].value, "EXIT");
        assert_eq!(tokens[2].value, "42");
    }

    #[test]
    fn newline_increments_line_counter() {
        let tokens = lex(b"int x = 1;\nexit(x);");
        let exit_tok = tokens.iter().find(|t| t.value == "EXIT").unwrap();
        assert_eq!(exit_tok.line, 2);
    }

    #[test]
    fn crlf_is_treated_as_whitespace_only_lf_counts_lines() {
        let tokens = lex(b"int x = 1;\r\nexit(x);");
        let exit_tok = tokens.iter().find(|t| t.value == "EXIT").unwrap();
        assert_eq!(exit_tok.line, 2);
    }

    #[test]
    fn unterminated_string_is_fatal_with_starting_line() {
        let mut diagnostics = DiagnosticHandler::new();
        let err = Lexer::new(b"write(\"oops, 1);")
            .tokenize(&mut diagnostics)
            .unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { line: 1 });
    }

    #[test]
    fn unrecognized_byte_is_a_warning_and_is_skipped() {
        let mut diagnostics = DiagnosticHandler::new();
        let tokens = Lexer::new(b"int x = 1 @ 2;")
            .tokenize(&mut diagnostics)
            .unwrap();
        assert!(diagnostics.has_warnings());
        assert!(tokens.iter().all(|t| t.value != "@"));
    }

    #[test]
    fn comparators_are_recognized_as_keyword_comparators() {
        let tokens = lex(b"if (a less 5) { exit(1); }");
        let less_tok = tokens.iter().find(|t| t.value == "LESS").unwrap();
        assert_eq!(less_tok.kind, TokenKind::Comparator);
    }
}
