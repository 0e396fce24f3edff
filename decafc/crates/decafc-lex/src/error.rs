//! Error types for decafc-lex.
//!
//! Lexing has exactly two failure modes: source text that matches no token
//! rule ([`LexError::InvalidToken`]) and a source file that cannot be read
//! ([`LexError::Io`]). Grammar tables loaded from configuration fail with
//! [`GrammarError`].

use std::fmt;
use std::path::PathBuf;

use decafc_util::{Diagnostic, DiagnosticBuilder, SourceInfo};
use thiserror::Error;

/// Why a piece of source text was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// The character starts no token.
    UnexpectedChar,
    /// A string literal hit a newline or the end of input before its
    /// closing quote.
    UnterminatedString,
    /// A backslash inside a string literal was followed by something other
    /// than `n`, `t`, `\` or `"`.
    UnknownEscape,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::UnexpectedChar => write!(f, "unexpected character"),
            InvalidReason::UnterminatedString => write!(f, "unterminated string literal"),
            InvalidReason::UnknownEscape => write!(f, "unknown escape sequence"),
        }
    }
}

/// Error type for lexing operations
#[derive(Debug, Error)]
pub enum LexError {
    /// Source text that matches no token rule
    #[error("invalid token '{}' at {location}: {reason}", .ch.escape_default())]
    InvalidToken {
        /// The offending character
        ch: char,
        /// What went wrong
        reason: InvalidReason,
        /// Source name and line of the offending character
        location: SourceInfo,
        /// Column of the offending character (1-based)
        column: u32,
        /// Byte offset of the offending character
        offset: usize,
    },

    /// The source file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}

impl LexError {
    /// Returns true for [`LexError::InvalidToken`].
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, LexError::InvalidToken { .. })
    }

    /// Returns true for [`LexError::Io`].
    pub fn is_io(&self) -> bool {
        matches!(self, LexError::Io { .. })
    }

    /// Returns the source location of an invalid token.
    pub fn location(&self) -> Option<&SourceInfo> {
        match self {
            LexError::InvalidToken { location, .. } => Some(location),
            LexError::Io { .. } => None,
        }
    }

    /// Converts the error into a user-facing diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::InvalidToken {
                ch,
                reason,
                location,
                column,
                ..
            } => DiagnosticBuilder::error(format!("{} '{}'", reason, ch.escape_default()))
                .location(location.clone())
                .note(format!("at column {}", column))
                .build(),
            LexError::Io { path, source } => {
                DiagnosticBuilder::error(format!("couldn't read {}: {}", path.display(), source))
                    .build()
            },
        }
    }
}

/// Error type for loading or validating a [`Grammar`](crate::Grammar)
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The grammar file could not be read
    #[error("failed to read grammar {}: {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The grammar file is not valid TOML for a grammar
    #[error("failed to parse grammar: {0}")]
    Parse(#[from] toml::de::Error),

    /// A keyword or symbol cannot be lexed as written
    #[error("invalid grammar: {0}")]
    Invalid(String),
}

/// Result type alias for lexing operations
pub type LexResult<T> = std::result::Result<T, LexError>;

/// Result type alias for grammar operations
pub type GrammarResult<T> = std::result::Result<T, GrammarError>;
