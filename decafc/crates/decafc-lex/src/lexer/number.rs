//! Number literal lexing.
//!
//! Decaf integer literals are plain decimal digit runs. There is no sign,
//! radix prefix, separator or fractional part.

use crate::chars::is_dec_digit;
use crate::token::TokenKind;

use super::Tokens;

impl<'a> Tokens<'a> {
    /// Lexes a decimal integer literal.
    pub(super) fn lex_number(&mut self) -> TokenKind {
        self.cursor.advance_while(is_dec_digit);
        TokenKind::Dec
    }
}
