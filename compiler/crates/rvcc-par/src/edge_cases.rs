//! Boundary behaviors from spec.md §8 exercised end-to-end through the
//! lexer, since the parser's input is always a real token stream.

#[cfg(test)]
mod tests {
    use rvcc_util::DiagnosticHandler;

    use crate::ast::{Expr, Stmt};
    use crate::{ParseError, Parser};

    fn parse(src: &str) -> Result<crate::Program, ParseError> {
        let mut diagnostics = DiagnosticHandler::new();
        let tokens = rvcc_lex::Lexer::new(src.as_bytes())
            .tokenize(&mut diagnostics)
            .unwrap();
        Parser::new(&tokens).parse()
    }

    #[test]
    fn empty_statement_produces_no_node() {
        let program = parse(";;;").unwrap();
        assert!(program.statements.is_empty());
    }

    #[test]
    fn nested_if_without_braces_at_every_level() {
        let program = parse("if (a less 5) if (a less 3) exit(1);").unwrap();
        let Stmt::If { then_body, .. } = &program.statements[0] else {
            panic!("expected outer If");
        };
        assert_eq!(then_body.len(), 1);
        assert!(matches!(then_body[0], Stmt::If { .. }));
    }

    #[test]
    fn bare_block_statement_is_accepted_at_top_level() {
        let program = parse("{ int x = 1; exit(x); }").unwrap();
        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Stmt::Block(inner) => assert_eq!(inner.len(), 2),
            other => panic!("expected Block, got {other:?}"),
        }
    }

    #[test]
    fn comparator_binary_node_uses_canonical_operator() {
        let program = parse("int a = 3; if (a less 5) { exit(1); }").unwrap();
        let Stmt::If { cond, .. } = &program.statements[1] else {
            panic!("expected If");
        };
        assert!(matches!(cond, Expr::Binary { .. }));
    }

    #[test]
    fn unterminated_block_is_a_parse_error() {
        let err = parse("{ exit(1); ").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { .. }));
    }
}
