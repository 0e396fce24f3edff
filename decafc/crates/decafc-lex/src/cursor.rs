//! Character cursor for traversing source code.
//!
//! The cursor keeps the byte position, line and column of the next
//! character while the lexer walks the source. It is created fresh for every
//! lexing pass, so line tracking never leaks between calls.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use decafc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int a;");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current one.
    ///
    /// Returns `'\0'` past the end.
    ///
    /// ```
    /// use decafc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_char(1), 'b');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character.
    ///
    /// A `'\n'` moves to column 1 of the next line. Does nothing at the end.
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Consumes `expected` if the remaining source starts with it.
    ///
    /// ```
    /// use decafc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<= 1");
    /// assert!(!cursor.match_str("<<"));
    /// assert!(cursor.match_str("<="));
    /// assert_eq!(cursor.current_char(), ' ');
    /// ```
    pub fn match_str(&mut self, expected: &str) -> bool {
        if !self.remaining().starts_with(expected) {
            return false;
        }
        for _ in expected.chars() {
            self.advance();
        }
        true
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from byte `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("int a;");
        assert_eq!(cursor.current_char(), 'i');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
        assert!(cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβ");
        assert_eq!(cursor.current_char(), 'α');
        assert_eq!(cursor.peek_char(1), 'β');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_peek_past_multibyte() {
        let cursor = Cursor::new("aé;");
        assert_eq!(cursor.peek_char(1), 'é');
        assert_eq!(cursor.peek_char(2), ';');
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.column(), 3);
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_while() {
        let mut cursor = Cursor::new("12345abc");
        cursor.advance_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.slice_from(0), "12345");
        assert_eq!(cursor.remaining(), "abc");
    }

    #[test]
    fn test_match_str_tracks_lines() {
        let mut cursor = Cursor::new("a\nb");
        assert!(cursor.match_str("a\n"));
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.current_char(), 'b');
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.line(), 1);
    }
}
