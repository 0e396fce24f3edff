//! Edge case tests for decafc-lex

#[cfg(test)]
mod tests {
    use crate::{lex, InvalidReason, LexError, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        lex(source).unwrap().into_iter().collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_only_newlines() {
        assert!(lex_all("\n\n\n\n").is_empty());
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb\r\nc");
        let lines: Vec<u32> = t.iter().map(Token::line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("int {} = 1;", name));
        assert!(t[1].is(TokenKind::Id, &name));
    }

    #[test]
    fn test_edge_no_spaces() {
        let t = lex_all("a=4+5;");
        let texts: Vec<&str> = t.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "=", "4", "+", "5", ";"]);
    }

    #[test]
    fn test_edge_keyword_glued_to_symbol() {
        let t = lex_all("return(a);");
        assert!(t[0].is_keyword("return"));
        assert!(t[1].is_symbol("("));
    }

    #[test]
    fn test_edge_comment_inside_string_is_text() {
        let t = lex_all("\"http://example\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Str);
    }

    #[test]
    fn test_edge_string_line_is_opening_line() {
        let t = lex_all("\n\n\"x\"");
        assert_eq!(t[0].line(), 3);
    }

    #[test]
    fn test_edge_comment_lines_counted() {
        let t = lex_all("// one\n// two\n// three\nx");
        assert_eq!(t[0].line(), 4);
    }

    #[test]
    fn test_edge_error_after_many_lines() {
        match lex("a\nb\nc\n  @").unwrap_err() {
            LexError::InvalidToken {
                location,
                column,
                reason,
                ..
            } => {
                assert_eq!(location.line(), 4);
                assert_eq!(column, 3);
                assert_eq!(reason, InvalidReason::UnexpectedChar);
            },
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_edge_nul_character_rejected() {
        let err = lex("a\0b").unwrap_err();
        assert!(matches!(err, LexError::InvalidToken { ch: '\0', .. }));
    }

    #[test]
    fn test_edge_tabs_between_tokens() {
        assert_eq!(lex_all("int\ta\t;").len(), 3);
    }

    #[test]
    fn test_edge_bom_only() {
        assert!(lex_all("\u{FEFF}").is_empty());
    }

    #[test]
    fn test_edge_bom_not_at_start_rejected() {
        assert!(lex("a \u{FEFF}").is_err());
    }
}
