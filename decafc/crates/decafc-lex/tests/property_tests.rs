//! Property-based tests over arbitrary Decaf-shaped input.

use decafc_lex::{lex, Grammar, TokenKind};
use proptest::prelude::*;

/// Source built only from tokens, separators and comments the lexer accepts.
fn valid_source() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        "[0-9]{1,10}",
        "\"[a-zA-Z0-9 +;(){}]{0,10}\"",
        prop::sample::select(vec![
            "(", ")", "[", "]", "{", "}", ",", ";", "=", "+", "-", "*", "/", "%", "<", ">",
            "<=", ">=", "==", "!=", "&&", "||", "!",
        ])
        .prop_map(str::to_string),
    ];
    let separator = prop_oneof![
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("\t".to_string()),
        Just(" // note\n".to_string()),
    ];
    prop::collection::vec((piece, separator), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(piece, separator)| piece + &separator)
            .collect()
    })
}

#[test]
fn test_property_whitespace_and_comments_yield_nothing() {
    proptest!(|(input in "([ \t\n]|// [a-z@#$ ]{0,10}\n){0,20}")| {
        let tokens = lex(&input).unwrap();
        prop_assert!(tokens.is_empty());
    });
}

#[test]
fn test_property_arbitrary_identifier_strings() {
    let grammar = Grammar::decaf();

    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
        let tokens = lex(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        let expected = if grammar.is_keyword(&input) { TokenKind::Key } else { TokenKind::Id };
        prop_assert_eq!(tokens[0].kind, expected);
        prop_assert_eq!(&tokens[0].text, &input);
    });
}

#[test]
fn test_property_arbitrary_decimal_number_strings() {
    proptest!(|(input in "[0-9]{1,40}")| {
        let tokens = lex(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Dec);
        prop_assert_eq!(&tokens[0].text, &input);
    });
}

#[test]
fn test_property_arbitrary_string_literals() {
    proptest!(|(input in "[^\"\\\\\\n]{0,100}")| {
        let source = format!("\"{}\"", input);
        let tokens = lex(&source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Str);
        prop_assert_eq!(&tokens[0].text, &source);
    });
}

#[test]
fn test_property_relex_is_identical() {
    proptest!(|(source in valid_source())| {
        prop_assert_eq!(lex(&source).unwrap(), lex(&source).unwrap());
    });
}

#[test]
fn test_property_tokens_are_ordered_substrings() {
    proptest!(|(source in valid_source())| {
        let tokens = lex(&source).unwrap();
        let mut search_from = 0;
        let mut last_line = 1;
        for token in &tokens {
            prop_assert!(!token.text.is_empty());
            let found = source[search_from..].find(token.text.as_str());
            prop_assert!(found.is_some(), "{:?} not found after {}", token.text, search_from);
            search_from += found.unwrap() + token.text.len();
            prop_assert!(token.line() >= last_line);
            last_line = token.line();
        }
    });
}

#[test]
fn test_property_line_matches_newlines_before_token() {
    proptest!(|(lines in prop::collection::vec("[a-z]{1,5}", 1..20))| {
        let source = lines.join("\n");
        let tokens = lex(&source).unwrap();
        prop_assert_eq!(tokens.len(), lines.len());
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.line() as usize, i + 1);
        }
    });
}

#[test]
fn test_property_unknown_character_always_fails() {
    proptest!(|(prefix in "[a-z ]{0,10}", bad in "[@#$~^?:.`']")| {
        let source = format!("{}{}", prefix, bad);
        let err = lex(&source).unwrap_err();
        prop_assert!(err.is_invalid_token());
    });
}
