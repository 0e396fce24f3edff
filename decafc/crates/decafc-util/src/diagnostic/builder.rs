//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, Level};
use crate::span::SourceInfo;

/// Fluent builder for [`Diagnostic`]
///
/// # Examples
///
/// ```
/// use decafc_util::diagnostic::DiagnosticBuilder;
/// use decafc_util::span::SourceInfo;
///
/// let diag = DiagnosticBuilder::error("invalid token '@'")
///     .location(SourceInfo::new("main.decaf", 1))
///     .build();
/// assert!(diag.is_error());
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start building a diagnostic with the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, message),
        }
    }

    /// Start building an error
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start building a warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Attach a source location
    pub fn location(mut self, location: SourceInfo) -> Self {
        self.diagnostic.location = Some(location);
        self
    }

    /// Append a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}

impl From<DiagnosticBuilder> for Diagnostic {
    fn from(builder: DiagnosticBuilder) -> Self {
        builder.build()
    }
}
