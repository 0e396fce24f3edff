//! String literal lexing.
//!
//! A string literal runs from `"` to the next unescaped `"` on the same
//! line. The token text keeps both quotes and every escape sequence exactly
//! as written; nothing is unescaped here.

use crate::error::{InvalidReason, LexError, LexResult};
use crate::token::TokenKind;

use super::Tokens;

/// Characters allowed after a backslash inside a string literal.
const ESCAPES: [char; 4] = ['n', 't', '\\', '"'];

impl<'a> Tokens<'a> {
    /// Lexes a string literal.
    ///
    /// Fails with an invalid token when the literal is not closed before a
    /// newline or the end of input, or contains an unknown escape.
    pub(super) fn lex_string(&mut self) -> LexResult<TokenKind> {
        let (open_line, open_column) = (self.cursor.line(), self.cursor.column());
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.unterminated(open_line, open_column));
            }

            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return Ok(TokenKind::Str);
                },
                '\n' => return Err(self.unterminated(open_line, open_column)),
                '\\' => {
                    let (line, column, offset) = (
                        self.cursor.line(),
                        self.cursor.column(),
                        self.cursor.position(),
                    );
                    self.cursor.advance();

                    let escaped = self.cursor.current_char();
                    if self.cursor.is_at_end() || escaped == '\n' {
                        return Err(self.unterminated(open_line, open_column));
                    }
                    if !ESCAPES.contains(&escaped) {
                        return Err(self.invalid_at(
                            escaped,
                            InvalidReason::UnknownEscape,
                            line,
                            column,
                            offset,
                        ));
                    }
                    self.cursor.advance();
                },
                _ => self.cursor.advance(),
            }
        }
    }

    /// Error for a string literal left open; reported at its opening quote.
    fn unterminated(&self, line: u32, column: u32) -> LexError {
        self.invalid_at(
            '"',
            InvalidReason::UnterminatedString,
            line,
            column,
            self.token_start,
        )
    }
}
