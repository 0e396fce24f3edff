//! decafc-util - Shared foundation types for the Decaf compiler.
//!
//! This crate holds the small pieces every compiler phase needs:
//!
//! - [`span`] - Source locations attached to tokens and errors
//! - [`diagnostic`] - User-facing error and warning messages
//!
//! # Example
//!
//! ```
//! use decafc_util::{DiagnosticBuilder, SourceInfo};
//!
//! let location = SourceInfo::new("main.decaf", 3);
//! let diag = DiagnosticBuilder::error("unexpected character '@'")
//!     .location(location)
//!     .build();
//!
//! assert_eq!(diag.to_string(), "error: unexpected character '@'\n --> main.decaf:3");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

#[cfg(test)]
mod edge_cases;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Level};
pub use span::SourceInfo;

// Re-export commonly used types
pub use rustc_hash::FxHashSet;
