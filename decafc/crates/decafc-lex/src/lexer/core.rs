//! Core lexer implementation.
//!
//! [`Lexer`] owns the grammar tables and is immutable; every call builds a
//! fresh [`Tokens`] scanner holding the cursor, so the line counter and
//! output queue never outlive a single pass.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;

use decafc_util::span::ANONYMOUS_SOURCE;
use decafc_util::SourceInfo;

use crate::chars::{is_dec_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::error::{InvalidReason, LexError, LexResult};
use crate::grammar::Grammar;
use crate::token::Token;

/// Lexer for the Decaf programming language.
///
/// # Example
///
/// ```
/// use decafc_lex::{Lexer, TokenKind};
///
/// let lexer = Lexer::default();
/// let mut tokens = lexer.lex("def foo").unwrap();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens.pop_front().unwrap().kind, TokenKind::Key);
/// assert_eq!(tokens.pop_front().unwrap().kind, TokenKind::Id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    /// Keyword and symbol tables.
    grammar: Grammar,
}

impl Lexer {
    /// Creates a lexer for the given grammar.
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// Returns the grammar this lexer classifies with.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Lexes a source string.
    ///
    /// Tokens are located in the anonymous source `<string>`. Fails with
    /// [`LexError::InvalidToken`] on the first piece of text that matches no
    /// token rule; no partial sequence is returned.
    pub fn lex(&self, source: &str) -> LexResult<VecDeque<Token>> {
        self.lex_named(ANONYMOUS_SOURCE, source)
    }

    /// Lexes a source string whose tokens are located in `name`.
    pub fn lex_named(&self, name: impl Into<Arc<str>>, source: &str) -> LexResult<VecDeque<Token>> {
        let mut tokens = self.tokens(name, source);
        let mut queue = VecDeque::new();
        for token in &mut tokens {
            queue.push_back(token?);
        }
        tracing::debug!(file = %tokens.file, count = queue.len(), "lexed source");
        Ok(queue)
    }

    /// Reads a whole file and lexes it.
    ///
    /// Tokens are located in the file's base name. A read failure is
    /// reported as [`LexError::Io`] before any scanning happens.
    ///
    /// Bytes that are not valid UTF-8 decode to U+FFFD. Inside a comment or
    /// string literal they are accepted; anywhere else they are an invalid
    /// token.
    pub fn lex_file(&self, path: impl AsRef<Path>) -> LexResult<VecDeque<Token>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read source file");
        let source = String::from_utf8_lossy(&bytes);

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.lex_named(name, &source)
    }

    /// Returns a streaming scanner over `source`.
    ///
    /// The scanner yields tokens one at a time and stops after the first
    /// error.
    pub fn tokens<'a>(&'a self, name: impl Into<Arc<str>>, source: &'a str) -> Tokens<'a> {
        Tokens::new(&self.grammar, name.into(), source)
    }
}

/// Scanner state for a single lexing pass.
///
/// Created by [`Lexer::tokens`]. Implements [`Iterator`] over
/// `LexResult<Token>`; once an error has been yielded it returns `None`.
pub struct Tokens<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Keyword and symbol tables.
    pub(super) grammar: &'a Grammar,

    /// Source name stamped on every token.
    file: Arc<str>,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Whether the BOM (Byte Order Mark) has been checked.
    pub(super) bom_checked: bool,

    /// Set once an error has been returned.
    failed: bool,
}

impl<'a> Tokens<'a> {
    fn new(grammar: &'a Grammar, file: Arc<str>, source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            grammar,
            file,
            token_start: 0,
            token_start_line: 1,
            bom_checked: false,
            failed: false,
        }
    }

    /// Returns the next token, or `None` at the end of the source.
    ///
    /// Skips whitespace and comments, then dispatches on the first
    /// character of the token.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();

        if self.cursor.is_at_end() {
            return Ok(None);
        }

        let kind = match self.cursor.current_char() {
            c if is_ident_start(c) => self.lex_identifier(),
            c if is_dec_digit(c) => self.lex_number(),
            '"' => self.lex_string()?,
            _ => self.lex_symbol()?,
        };

        let token = Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            SourceInfo::new(Arc::clone(&self.file), self.token_start_line),
        );
        tracing::trace!(kind = ?token.kind, text = %token.text, line = token.line(), "token");
        Ok(Some(token))
    }

    /// Builds an [`LexError::InvalidToken`] for the character under the cursor.
    pub(super) fn invalid_here(&self, reason: InvalidReason) -> LexError {
        self.invalid_at(
            self.cursor.current_char(),
            reason,
            self.cursor.line(),
            self.cursor.column(),
            self.cursor.position(),
        )
    }

    /// Builds an [`LexError::InvalidToken`] at an explicit position.
    pub(super) fn invalid_at(
        &self,
        ch: char,
        reason: InvalidReason,
        line: u32,
        column: u32,
        offset: usize,
    ) -> LexError {
        tracing::debug!(file = %self.file, line, column, %reason, "rejected source text");
        LexError::InvalidToken {
            ch,
            reason,
            location: SourceInfo::new(Arc::clone(&self.file), line),
            column,
            offset,
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the source name stamped on tokens.
    pub fn file(&self) -> &str {
        &self.file
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            },
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
