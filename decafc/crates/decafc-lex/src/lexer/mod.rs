//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - `Lexer` entry points and the per-pass `Tokens` scanner
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Decimal literal lexing
//! - `string` - String literal lexing
//! - `operator` - Symbol lexing
//! - `comment` - Whitespace and comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{Lexer, Tokens};
