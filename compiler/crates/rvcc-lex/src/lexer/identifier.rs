//! Identifier scanning and the reserved-word table.

use rvcc_util::FxHashMap;
use std::sync::OnceLock;

use crate::cursor::Cursor;
use crate::token::TokenKind;

/// Maps a source word to its canonical token kind and canonical spelling,
/// e.g. `"less"` → `(Comparator, "LESS")`. Built once per process and
/// shared by every `Lexer`; it holds no per-compilation state so reusing it
/// across compilations is safe.
fn keywords() -> &'static FxHashMap<&'static str, (TokenKind, &'static str)> {
    static TABLE: OnceLock<FxHashMap<&'static str, (TokenKind, &'static str)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut map = FxHashMap::default();
        map.insert("exit", (TokenKind::Keyword, "EXIT"));
        map.insert("int", (TokenKind::Keyword, "INT"));
        map.insert("if", (TokenKind::Keyword, "IF"));
        map.insert("while", (TokenKind::Keyword, "WHILE"));
        map.insert("write", (TokenKind::Keyword, "WRITE"));
        map.insert("eq", (TokenKind::Comparator, "EQ"));
        map.insert("neq", (TokenKind::Comparator, "NEQ"));
        map.insert("less", (TokenKind::Comparator, "LESS"));
        map.insert("greater", (TokenKind::Comparator, "GREATER"));
        map
    })
}

/// Scans the maximal run of ASCII letters starting at the cursor and
/// classifies it as a keyword, comparator, or identifier. The cursor must
/// be positioned on an ASCII letter.
///
/// Returns `(kind, value)` where `value` is the canonical keyword spelling
/// for reserved words or the lexeme as written for identifiers.
pub fn scan_identifier(cursor: &mut Cursor<'_>) -> (TokenKind, String) {
    let word = cursor.eat_while(|b| b.is_ascii_alphabetic());
    let word = std::str::from_utf8(word).expect("ASCII letters are valid UTF-8");

    match keywords().get(word) {
        Some((kind, canonical)) => (*kind, canonical.to_string()),
        None => (TokenKind::Identifier, word.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &[u8]) -> (TokenKind, String) {
        let mut cursor = Cursor::new(src);
        scan_identifier(&mut cursor)
    }

    #[test]
    fn recognizes_every_keyword() {
        assert_eq!(scan(b"exit"), (TokenKind::Keyword, "EXIT".to_string()));
        assert_eq!(scan(b"int"), (TokenKind::Keyword, "INT".to_string()));
        assert_eq!(scan(b"if"), (TokenKind::Keyword, "IF".to_string()));
        assert_eq!(scan(b"while"), (TokenKind::Keyword, "WHILE".to_string()));
        assert_eq!(scan(b"write"), (TokenKind::Keyword, "WRITE".to_string()));
    }

    #[test]
    fn recognizes_every_comparator() {
        assert_eq!(scan(b"eq"), (TokenKind::Comparator, "EQ".to_string()));
        assert_eq!(scan(b"neq"), (TokenKind::Comparator, "NEQ".to_string()));
        assert_eq!(scan(b"less"), (TokenKind::Comparator, "LESS".to_string()));
        assert_eq!(
            scan(b"greater"),
            (TokenKind::Comparator, "GREATER".to_string())
        );
    }

    #[test]
    fn anything_else_is_an_identifier_as_written() {
        assert_eq!(
            scan(b"counter"),
            (TokenKind::Identifier, "counter".to_string())
        );
        // digits are not part of an identifier's run: only the leading
        // letters are consumed here, matching spec.md §4.1 rule 5.
        assert_eq!(scan(b"x1"), (TokenKind::Identifier, "x".to_string()));
    }
}
