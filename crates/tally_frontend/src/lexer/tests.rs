use tally_diagnostic::span::Span;

use super::{Lexer, TokenList, TokenStream};
use crate::token::{Token, TokenKind};
use crate::tokenize;

fn kinds_and_text(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source)
        .into_iter()
        .map(|token| (token.kind, token.text))
        .collect()
}

#[test]
fn arithmetic() {
    let mut lexer = Lexer::new("-1 + 2 * 3");

    let expected = [
        (TokenKind::Minus, "-"),
        (TokenKind::Integer, "1"),
        (TokenKind::Plus, "+"),
        (TokenKind::Integer, "2"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Integer, "3"),
    ];

    for (i, (kind, text)) in expected.into_iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind, "token {i}");
        assert_eq!(token.text, text, "token {i}");
    }

    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token, Token::end_of_input(Span::empty(10)));
    }
}

#[test]
fn all_punctuation() {
    assert_eq!(
        kinds_and_text("+-*/;"),
        vec![
            (TokenKind::Plus, "+"),
            (TokenKind::Minus, "-"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Slash, "/"),
            (TokenKind::Semicolon, ";"),
        ]
    );
}

#[test]
fn spaces_are_insignificant() {
    assert_eq!(kinds_and_text("1+2"), kinds_and_text("1 + 2"));
    assert_eq!(kinds_and_text("1+2"), kinds_and_text("   1   +2 "));
}

#[test]
fn unknown_chars_are_skipped() {
    assert_eq!(
        kinds_and_text("1 @ 2"),
        vec![(TokenKind::Integer, "1"), (TokenKind::Integer, "2")]
    );

    // tabs, newlines and non-ascii text are not whitespace, just unknown
    assert_eq!(
        kinds_and_text("\t7\n×x;é"),
        vec![(TokenKind::Integer, "7"), (TokenKind::Semicolon, ";")]
    );

    let mut lexer = Lexer::new("1 @ 2");
    lexer.next_token();
    lexer.next_token();
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
}

#[test]
fn only_unknown_chars() {
    let mut lexer = Lexer::new("@#$ ");
    assert_eq!(lexer.next_token(), Token::end_of_input(Span::empty(4)));
    assert_eq!(lexer.next_token(), Token::end_of_input(Span::empty(4)));
}

#[test]
fn empty_input() {
    assert!(tokenize("").is_empty());
    assert_eq!(
        Lexer::new("").next_token(),
        Token::end_of_input(Span::empty(0))
    );
}

#[test]
fn integers_are_maximal_digit_runs() {
    assert_eq!(
        kinds_and_text("0123 45.6 7e8"),
        vec![
            (TokenKind::Integer, "0123"),
            (TokenKind::Integer, "45"),
            (TokenKind::Integer, "6"),
            (TokenKind::Integer, "7"),
            (TokenKind::Integer, "8"),
        ]
    );
}

#[test]
fn sign_is_not_part_of_integer() {
    assert_eq!(
        kinds_and_text("-12"),
        vec![(TokenKind::Minus, "-"), (TokenKind::Integer, "12")]
    );
}

#[test]
fn oversized_integers_still_lex() {
    assert_eq!(
        kinds_and_text("99999999999999999999"),
        vec![(TokenKind::Integer, "99999999999999999999")]
    );
}

#[test]
fn spans() {
    let spans: Vec<Span> = tokenize(" 12 *é3").into_iter().map(|t| t.span).collect();

    // `é` is two bytes wide
    assert_eq!(
        spans,
        vec![Span::new(1, 3), Span::new(4, 5), Span::new(7, 8)]
    );
}

#[test]
fn token_display() {
    let tokens: Vec<String> = tokenize("-1;").iter().map(ToString::to_string).collect();
    assert_eq!(tokens, vec![r#"Minus("-")"#, r#"Integer("1")"#, r#"Semicolon(";")"#]);

    assert_eq!(
        Token::end_of_input(Span::empty(0)).to_string(),
        r#"EndOfInput("")"#
    );
}

#[test]
fn token_list_ends_with_end_of_input() {
    let mut tokens: TokenList = tokenize("1 +").into_iter().collect();

    assert_eq!(tokens.next_token().kind, TokenKind::Integer);
    assert_eq!(tokens.next_token().kind, TokenKind::Plus);
    assert_eq!(tokens.next_token(), Token::end_of_input(Span::empty(3)));
    assert_eq!(tokens.next_token(), Token::end_of_input(Span::empty(3)));

    let mut empty = TokenList::new(vec![]);
    assert_eq!(empty.next_token(), Token::end_of_input(Span::empty(0)));
}
