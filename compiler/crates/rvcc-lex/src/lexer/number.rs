//! Integer literal scanning.

use crate::cursor::Cursor;

/// Scans the maximal run of ASCII digits starting at the cursor. The
/// cursor must be positioned on an ASCII digit. No sign, base prefix, or
/// floating point is recognized — the lexeme is exactly the decimal text.
pub fn scan_int(cursor: &mut Cursor<'_>) -> String {
    let digits = cursor.eat_while(|b| b.is_ascii_digit());
    std::str::from_utf8(digits)
        .expect("ASCII digits are valid UTF-8")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_maximal_digit_run() {
        let mut cursor = Cursor::new(b"1234abc");
        assert_eq!(scan_int(&mut cursor), "1234");
        assert_eq!(cursor.current(), Some(b'a'));
    }

    #[test]
    fn single_digit() {
        let mut cursor = Cursor::new(b"0;");
        assert_eq!(scan_int(&mut cursor), "0");
    }
}
