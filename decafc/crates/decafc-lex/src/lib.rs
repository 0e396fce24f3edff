//! decafc-lex - Lexical Analyzer for the Decaf Programming Language
//!
//! This crate turns Decaf source text into a queue of classified tokens
//! that a parser can consume.
//!
//! # Example Usage
//!
//! ```
//! use decafc_lex::{lex, TokenKind};
//!
//! let mut tokens = lex("def int main() { return 0; }").unwrap();
//!
//! let first = tokens.pop_front().unwrap();
//! assert_eq!(first.kind, TokenKind::Key);
//! assert_eq!(first.text, "def");
//! assert_eq!(tokens.len(), 9);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`grammar`] - Keyword and symbol tables
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`error`] - Error types
//!
//! # Token Categories
//!
//! | Code  | Kind                     | Examples                     |
//! |-------|--------------------------|------------------------------|
//! | `KEY` | reserved keyword         | `def`, `int`, `return`       |
//! | `ID ` | identifier               | `main`, `a`, `int3`          |
//! | `DEC` | decimal integer literal  | `0`, `42`                    |
//! | `STR` | string literal           | `"hi"`, `"a\n"`              |
//! | `SYM` | operator or punctuation  | `(`, `;`, `<=`, `&&`         |
//!
//! Whitespace and `//` line comments are skipped. Any other text is an
//! [`LexError::InvalidToken`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

use std::collections::VecDeque;
use std::path::Path;
use std::sync::OnceLock;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{GrammarError, GrammarResult, InvalidReason, LexError, LexResult};
pub use grammar::Grammar;
pub use lexer::{Lexer, Tokens};
pub use token::{Token, TokenKind};

fn default_lexer() -> &'static Lexer {
    static LEXER: OnceLock<Lexer> = OnceLock::new();
    LEXER.get_or_init(Lexer::default)
}

/// Lexes a source string with the Decaf grammar.
///
/// See [`Lexer::lex`].
pub fn lex(source: &str) -> LexResult<VecDeque<Token>> {
    default_lexer().lex(source)
}

/// Reads and lexes a file with the Decaf grammar.
///
/// See [`Lexer::lex_file`].
pub fn lex_file(path: impl AsRef<Path>) -> LexResult<VecDeque<Token>> {
    default_lexer().lex_file(path)
}
