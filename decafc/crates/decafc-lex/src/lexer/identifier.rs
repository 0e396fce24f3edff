//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::TokenKind;

use super::Tokens;

impl<'a> Tokens<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the whole `[A-Za-z0-9_]` run first and only then checks the
    /// keyword table, so `int3` is one identifier rather than `int` and `3`.
    pub(super) fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.advance_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        if self.grammar.is_keyword(text) {
            TokenKind::Key
        } else {
            TokenKind::Id
        }
    }
}
