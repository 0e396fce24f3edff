//! Token definitions for Decaf.
//!
//! A [`Token`] is a classified, located piece of source text. Decaf has five
//! token categories (see [`TokenKind`]); the lexer never produces tokens for
//! whitespace or comments.

use std::fmt;

use decafc_util::SourceInfo;

/// Category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Reserved keyword (`def`, `int`, `return`, ...)
    Key,
    /// Identifier
    Id,
    /// Decimal integer literal
    Dec,
    /// String literal, quotes included
    Str,
    /// Operator or punctuation symbol
    Sym,
}

impl TokenKind {
    /// All token kinds, in declaration order.
    pub const ALL: [TokenKind; 5] = [
        TokenKind::Key,
        TokenKind::Id,
        TokenKind::Dec,
        TokenKind::Str,
        TokenKind::Sym,
    ];

    /// Returns the fixed-width, three character code used in token dumps.
    ///
    /// `Id` is padded with a trailing space so every code lines up.
    pub fn code(self) -> &'static str {
        match self {
            TokenKind::Key => "KEY",
            TokenKind::Id => "ID ",
            TokenKind::Dec => "DEC",
            TokenKind::Str => "STR",
            TokenKind::Sym => "SYM",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single lexed token.
///
/// Tokens own their text and location; they hold no reference back to the
/// lexer or the source buffer.
///
/// # Example
///
/// ```
/// use decafc_lex::{Token, TokenKind};
/// use decafc_util::SourceInfo;
///
/// let token = Token::new(TokenKind::Id, "main", SourceInfo::new("pa02-sample.decaf", 1));
/// assert_eq!(token.to_string(), "ID \t\"main\"\t[pa02-sample.decaf:1]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// Exact source text matched
    pub text: String,
    /// Source name and line where the token starts
    pub source: SourceInfo,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, source: SourceInfo) -> Self {
        Self {
            kind,
            text: text.into(),
            source,
        }
    }

    /// Returns the line where the token starts (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.source.line()
    }

    /// Returns true if this token has the given kind and text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// Returns true if this is the keyword `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.is(TokenKind::Key, word)
    }

    /// Returns true if this is the symbol `symbol`.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.is(TokenKind::Sym, symbol)
    }
}

/// Renders `TYPE\t"text"\t[file:line]`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t\"{}\"\t{}", self.kind.code(), self.text, self.source)
    }
}
