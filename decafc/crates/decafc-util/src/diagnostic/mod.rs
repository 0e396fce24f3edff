//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides the types used to present compiler problems to
//! end users: a severity [`Level`], the [`Diagnostic`] itself, and the
//! fluent [`DiagnosticBuilder`].
//!
//! # Examples
//!
//! ```
//! use decafc_util::diagnostic::{DiagnosticBuilder, Level};
//! use decafc_util::span::SourceInfo;
//!
//! let diag = DiagnosticBuilder::error("unterminated string literal")
//!     .location(SourceInfo::new("hello.decaf", 2))
//!     .note("string literals may not span lines")
//!     .build();
//!
//! assert_eq!(diag.level, Level::Error);
//! assert_eq!(diag.notes.len(), 1);
//! ```

mod builder;

pub use builder::DiagnosticBuilder;

use crate::span::SourceInfo;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use decafc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error that stops compilation
    Error,
    /// A warning that doesn't stop compilation
    Warning,
}

impl Level {
    /// Returns true for [`Level::Error`]
    pub fn is_error(self) -> bool {
        self == Level::Error
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and optional location
///
/// The rendered form is:
///
/// ```text
/// error: <message>
///  --> file:line
///   = note: <note>
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Where the problem was found, if known
    pub location: Option<SourceInfo>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic without a location
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            location: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Returns true if this diagnostic is an error
    pub fn is_error(&self) -> bool {
        self.level.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;
        if let Some(location) = &self.location {
            write!(f, "\n --> {}:{}", location.file(), location.line())?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        Ok(())
    }
}
