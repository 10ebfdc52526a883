//! String literal scanning.
//!
//! String values are lexed (spec.md §3: `String` is "reserved for future
//! use") but never reach code generation — `rvcc-gen` only ever sees one
//! inside the first, ignored argument of `write`.

use crate::cursor::Cursor;
use crate::error::LexError;

/// Scans a string literal body. The cursor must be positioned just past
/// the opening `"`. Consumes bytes up to and including the matching
/// closing `"`, tracking embedded newlines via [`Cursor::bump`]. Returns
/// the content between the quotes, or [`LexError::UnterminatedString`] if
/// the input ends first.
///
/// `start_line` is the line the opening `"` was on, used in the error.
pub fn scan_string(cursor: &mut Cursor<'_>, start_line: u32) -> Result<String, LexError> {
    let mut content = Vec::new();
    loop {
        match cursor.current() {
            None => return Err(LexError::UnterminatedString { line: start_line }),
            Some(b'"') => {
                cursor.bump();
                break;
            }
            Some(b) => {
                content.push(b);
                cursor.bump();
            }
        }
    }
    // String bodies aren't guaranteed ASCII; fall back to a lossy
    // conversion rather than failing the whole compilation over a
    // value that's never examined by later phases.
    Ok(String::from_utf8(content).unwrap_or_else(|e| {
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_simple_string() {
        let mut cursor = Cursor::new(b"hello\" rest");
        let value = scan_string(&mut cursor, 1).unwrap();
        assert_eq!(value, "hello");
        assert_eq!(cursor.current(), Some(b' '));
    }

    #[test]
    fn tracks_embedded_newlines() {
        let mut cursor = Cursor::new(b"a\nb\"");
        let value = scan_string(&mut cursor, 1).unwrap();
        assert_eq!(value, "a\nb");
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn unterminated_string_reports_starting_line() {
        let mut cursor = Cursor::new(b"abc");
        let err = scan_string(&mut cursor, 4).unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { line: 4 });
    }
}
