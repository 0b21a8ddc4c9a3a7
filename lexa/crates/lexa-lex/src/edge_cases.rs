//! Edge case tests for lexa-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).expect("source should tokenize").into_vec()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_variations() {
        assert!(lex_all(" \t\r\n ").is_empty());
        let t = lex_all("x\t=\n1");
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![Token::new(TokenKind::Identifier, "x")]);
    }

    #[test]
    fn test_edge_single_digit() {
        assert_eq!(lex_all("0"), vec![Token::new(TokenKind::Number, "0")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} = 1;", name));
        assert_eq!(t[0].lexeme(), name);
    }

    #[test]
    fn test_edge_huge_number_kept_as_text() {
        let digits = "9".repeat(400);
        let t = lex_all(&digits);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme(), digits);
    }

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(lex_all("007")[0].lexeme(), "007");
    }

    #[test]
    fn test_edge_nested_parens() {
        let t = lex_all("((()))");
        assert_eq!(t.len(), 6);
        assert!(t.iter().all(|x| x.kind() == TokenKind::Parenthesis));
    }

    #[test]
    fn test_edge_consecutive_operators() {
        assert_eq!(kinds("+-*/"), vec![TokenKind::Operator; 4]);
    }

    #[test]
    fn test_edge_number_letter_number() {
        // numbers never absorb letters; identifiers always absorb digits
        let t = lex_all("1a2");
        assert_eq!(
            t,
            vec![
                Token::new(TokenKind::Number, "1"),
                Token::new(TokenKind::Identifier, "a2"),
            ]
        );
    }

    #[test]
    fn test_edge_unicode_identifier() {
        let t = lex_all("größe = 3");
        assert_eq!(t[0], Token::new(TokenKind::Identifier, "größe"));
    }

    #[test]
    fn test_edge_non_ascii_decimal_digits() {
        // Arabic-Indic three
        assert_eq!(lex_all("٣"), vec![Token::new(TokenKind::Number, "٣")]);
        assert_eq!(lex_all("1٣"), vec![Token::new(TokenKind::Number, "1٣")]);
        assert_eq!(lex_all("x٣"), vec![Token::new(TokenKind::Identifier, "x٣")]);
        assert_eq!(
            lex_all("٣x = ٤٢;"),
            vec![
                Token::new(TokenKind::Number, "٣"),
                Token::new(TokenKind::Identifier, "x"),
                Token::new(TokenKind::Assignment, "="),
                Token::new(TokenKind::Number, "٤٢"),
                Token::new(TokenKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn test_edge_other_numerics_are_rejected() {
        let err = tokenize("x = 2²").unwrap_err();
        assert_eq!(err, LexError::InvalidCharacter { ch: '²', position: 5 });
    }

    #[test]
    fn test_edge_signed_number_is_operator_then_number() {
        assert_eq!(kinds("-5"), vec![TokenKind::Operator, TokenKind::Number]);
    }

    #[test]
    fn test_edge_float_is_rejected() {
        let err = tokenize("3.14").unwrap_err();
        assert_eq!(err, LexError::InvalidCharacter { ch: '.', position: 1 });
    }

    #[test]
    fn test_edge_buffer_closed_by_whitespace() {
        assert_eq!(
            kinds("ab 12"),
            vec![TokenKind::Identifier, TokenKind::Number]
        );
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_invalid_first_char() {
        let err = tokenize("@").unwrap_err();
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_err_reports_first_of_many() {
        let err = tokenize("a # $ %").unwrap_err();
        assert_eq!(err.character(), '#');
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn test_err_underscore() {
        assert_eq!(tokenize("my_var").unwrap_err().character(), '_');
    }

    #[test]
    fn test_err_position_counts_characters() {
        let err = tokenize("é!").unwrap_err();
        assert_eq!(err, LexError::InvalidCharacter { ch: '!', position: 1 });
    }

    #[test]
    fn test_err_string_literal() {
        assert_eq!(tokenize("\"hi\"").unwrap_err().character(), '"');
    }

    #[test]
    fn test_err_comment() {
        // '/' is an operator; the comment body is scanned like code
        let err = tokenize("x // note!").unwrap_err();
        assert_eq!(err.character(), '!');
    }

    #[test]
    fn test_err_control_character() {
        assert_eq!(tokenize("a\u{0}b").unwrap_err().character(), '\u{0}');
    }
}
