//! Character classes for Decaf source text.
//!
//! Decaf identifiers, numbers and whitespace are ASCII only. Anything outside
//! these classes must be part of a string literal, a comment or a symbol,
//! otherwise the lexer rejects it.

/// Checks if a character can start an identifier or keyword.
///
/// # Example
///
/// ```
/// use decafc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use decafc_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('3'));
/// assert!(!is_ident_continue('+'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Checks if a character starts a decimal literal.
#[inline]
pub fn is_dec_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is whitespace between tokens.
///
/// Spaces, tabs, carriage returns, form feeds and newlines.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C')
}

/// Checks if `text` is a whole identifier: one start character followed by
/// continue characters.
///
/// # Example
///
/// ```
/// use decafc_lex::chars::is_identifier;
///
/// assert!(is_identifier("int3"));
/// assert!(!is_identifier("3int"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_continue),
        _ => false,
    }
}
