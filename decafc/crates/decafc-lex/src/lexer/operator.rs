//! Operator and punctuation lexing.
//!
//! Symbols come from the grammar table rather than a hand-written match, so
//! the longest listed symbol that prefixes the remaining input wins.

use crate::error::{InvalidReason, LexResult};
use crate::token::TokenKind;

use super::Tokens;

impl<'a> Tokens<'a> {
    /// Lexes the longest symbol at the cursor.
    ///
    /// This is the last rule tried, so a character that starts no symbol
    /// starts no token at all and is rejected.
    pub(super) fn lex_symbol(&mut self) -> LexResult<TokenKind> {
        let grammar = self.grammar;
        let Some(symbol) = grammar.match_symbol(self.cursor.remaining()) else {
            return Err(self.invalid_here(InvalidReason::UnexpectedChar));
        };

        self.cursor.match_str(symbol);
        Ok(TokenKind::Sym)
    }
}
