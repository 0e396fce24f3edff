//! Comment lexing.
//!
//! This module handles skipping whitespace and `//` line comments. Decaf
//! has no block comments.

use crate::chars::is_whitespace;

use super::Tokens;

impl<'a> Tokens<'a> {
    /// Skips whitespace and comments.
    ///
    /// This is called before lexing each token. A byte order mark at the
    /// very start of the source is skipped as well.
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.remaining().starts_with('\u{FEFF}') {
                self.cursor.advance();
            }
        }

        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                c if is_whitespace(c) => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => self.skip_line_comment(),
                _ => return,
            }
        }
    }

    /// Skips a line comment (from // to end of line).
    ///
    /// The newline itself is left for the whitespace loop so line counting
    /// stays in one place.
    fn skip_line_comment(&mut self) {
        self.cursor.advance_while(|c| c != '\n');
    }
}
