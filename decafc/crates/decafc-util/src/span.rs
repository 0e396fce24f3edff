//! Span module - Source location tracking.
//!
//! Decaf tokens and diagnostics only ever report *where* something starts:
//! the name of the source and a 1-based line number. [`SourceInfo`] carries
//! exactly that and renders in the bracketed `[file:line]` form used by
//! token dumps.
//!
//! # Examples
//!
//! ```
//! use decafc_util::span::SourceInfo;
//!
//! let info = SourceInfo::new("pa02-sample.decaf", 4);
//! assert_eq!(info.to_string(), "[pa02-sample.decaf:4]");
//! ```

use std::fmt;
use std::sync::Arc;

/// Name given to sources that did not come from a file.
pub const ANONYMOUS_SOURCE: &str = "<string>";

/// Location of a token or diagnostic in a source.
///
/// The file name is shared behind an [`Arc`] so every token from one
/// lexing pass points at the same allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceInfo {
    /// Name of the source (usually a file's base name)
    file: Arc<str>,
    /// Line number (1-based)
    line: u32,
}

impl SourceInfo {
    /// Create a new source location
    ///
    /// # Examples
    ///
    /// ```
    /// use decafc_util::span::SourceInfo;
    ///
    /// let info = SourceInfo::new("main.decaf", 1);
    /// assert_eq!(info.file(), "main.decaf");
    /// assert_eq!(info.line(), 1);
    /// ```
    pub fn new(file: impl Into<Arc<str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Create a location in a source that has no file name
    ///
    /// # Examples
    ///
    /// ```
    /// use decafc_util::span::SourceInfo;
    ///
    /// assert_eq!(SourceInfo::anonymous(2).to_string(), "[<string>:2]");
    /// ```
    pub fn anonymous(line: u32) -> Self {
        Self::new(ANONYMOUS_SOURCE, line)
    }

    /// Returns the source name
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the shared handle to the source name
    #[inline]
    pub fn file_handle(&self) -> &Arc<str> {
        &self.file
    }

    /// Returns the line number (1-based)
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns a copy of this location moved to another line of the same source
    ///
    /// # Examples
    ///
    /// ```
    /// use decafc_util::span::SourceInfo;
    ///
    /// let first = SourceInfo::new("a.decaf", 1);
    /// let later = first.at_line(7);
    /// assert_eq!(later.file(), "a.decaf");
    /// assert_eq!(later.line(), 7);
    /// ```
    pub fn at_line(&self, line: u32) -> Self {
        Self {
            file: Arc::clone(&self.file),
            line,
        }
    }

    /// Returns true if this location has no file name
    pub fn is_anonymous(&self) -> bool {
        &*self.file == ANONYMOUS_SOURCE
    }
}

impl fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.file, self.line)
    }
}
