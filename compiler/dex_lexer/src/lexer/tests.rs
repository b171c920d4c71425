use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds_and_text(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source)
        .into_iter()
        .map(|tok| (tok.kind, tok.text))
        .collect()
}

// === Token sequences ===

#[test]
fn literal_then_stream() {
    let tokens = tokenize("set{1 2 3} > test");
    let expected = vec![
        Token::new(TokenKind::Ident, "set", Span::new(0, 3)),
        Token::new(TokenKind::LBrace, "{", Span::new(3, 4)),
        Token::new(TokenKind::Ident, "1", Span::new(4, 5)),
        Token::new(TokenKind::Ident, "2", Span::new(6, 7)),
        Token::new(TokenKind::Ident, "3", Span::new(8, 9)),
        Token::new(TokenKind::RBrace, "}", Span::new(9, 10)),
        Token::new(TokenKind::Stream, ">", Span::new(11, 12)),
        Token::new(TokenKind::Ident, "test", Span::new(13, 17)),
        Token::new(TokenKind::Eof, "", Span::new(17, 17)),
    ];
    assert_eq!(tokens, expected);
}

#[test]
fn function_map() {
    let tokens = tokenize("set(fn{test} fn2{test})");
    let expected = vec![
        Token::new(TokenKind::Ident, "set", Span::new(0, 3)),
        Token::new(TokenKind::LParen, "(", Span::new(3, 4)),
        Token::new(TokenKind::Ident, "fn", Span::new(4, 6)),
        Token::new(TokenKind::LBrace, "{", Span::new(6, 7)),
        Token::new(TokenKind::Ident, "test", Span::new(7, 11)),
        Token::new(TokenKind::RBrace, "}", Span::new(11, 12)),
        Token::new(TokenKind::Ident, "fn2", Span::new(13, 16)),
        Token::new(TokenKind::LBrace, "{", Span::new(16, 17)),
        Token::new(TokenKind::Ident, "test", Span::new(17, 21)),
        Token::new(TokenKind::RBrace, "}", Span::new(21, 22)),
        Token::new(TokenKind::RParen, ")", Span::new(22, 23)),
        Token::new(TokenKind::Eof, "", Span::new(23, 23)),
    ];
    assert_eq!(tokens, expected);
}

#[test]
fn apply_operator() {
    assert_eq!(
        kinds_and_text("count4 < count count"),
        vec![
            (TokenKind::Ident, "count4"),
            (TokenKind::Apply, "<"),
            (TokenKind::Ident, "count"),
            (TokenKind::Ident, "count"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn delimiters_split_identifiers() {
    assert_eq!(
        kinds_and_text("a<b>c"),
        vec![
            (TokenKind::Ident, "a"),
            (TokenKind::Apply, "<"),
            (TokenKind::Ident, "b"),
            (TokenKind::Stream, ">"),
            (TokenKind::Ident, "c"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn identifiers_are_opaque() {
    assert_eq!(
        kinds_and_text("3.14 /doOnce a-b ünï"),
        vec![
            (TokenKind::Ident, "3.14"),
            (TokenKind::Ident, "/doOnce"),
            (TokenKind::Ident, "a-b"),
            (TokenKind::Ident, "ünï"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn non_ascii_spaces_belong_to_identifiers() {
    assert_eq!(
        kinds_and_text("set{a\u{a0}b c\u{3000}d}"),
        vec![
            (TokenKind::Ident, "set"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Ident, "a\u{a0}b"),
            (TokenKind::Ident, "c\u{3000}d"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Eof, ""),
        ]
    );
}

// === Whitespace ===

#[test]
fn whitespace_and_newlines_are_skipped() {
    assert_eq!(
        kinds_and_text("  a\t\nb\r\n  c  "),
        vec![
            (TokenKind::Ident, "a"),
            (TokenKind::Ident, "b"),
            (TokenKind::Ident, "c"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn empty_source_is_eof() {
    let tokens = tokenize("");
    assert_eq!(tokens, vec![Token::new(TokenKind::Eof, "", Span::new(0, 0))]);
}

#[test]
fn eof_repeats() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn control_character_is_illegal() {
    let tokens = tokenize("a\u{7}b");
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].span.start, 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

// === Peek ===

#[test]
fn peek_does_not_consume() {
    let mut lexer = Lexer::new("set{");
    assert_eq!(lexer.peek().text, "set");
    assert_eq!(lexer.peek_kind(), TokenKind::Ident);
    assert_eq!(lexer.next_token().text, "set");
    assert_eq!(lexer.peek_kind(), TokenKind::LBrace);
    assert_eq!(lexer.next_token().kind, TokenKind::LBrace);
    assert_eq!(lexer.peek_kind(), TokenKind::Eof);
}

#[test]
fn offset_tracks_last_token() {
    let mut lexer = Lexer::new("ab  {");
    assert_eq!(lexer.offset(), 0);
    lexer.next_token();
    assert_eq!(lexer.offset(), 2);
    lexer.next_token();
    assert_eq!(lexer.offset(), 5);
}

// === Base offset ===

#[test]
fn base_offset_shifts_spans() {
    let source = "set(a{count count})";
    let body = &source[6..17];
    let mut lexer = Lexer::with_base(body, 6);
    assert_eq!(lexer.base(), 6);
    assert_eq!(lexer.source(), "count count");

    let first = lexer.next_token();
    assert_eq!(first.span, Span::new(6, 11));
    assert_eq!(&source[first.span.to_range()], "count");

    let second = lexer.next_token();
    assert_eq!(second.span, Span::new(12, 17));
    assert_eq!(lexer.next_token().span, Span::point(17));
}

// === Properties ===

proptest! {
    #[test]
    fn never_panics_and_ends_with_eof(source in "\\PC{0,64}") {
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn identifiers_never_contain_delimiters(source in "[a-z{}()<> \\t\\n]{0,64}") {
        for tok in tokenize(&source) {
            if tok.kind == TokenKind::Ident {
                prop_assert!(!tok.text.contains(['{', '}', '(', ')', '<', '>', ' ', '\t', '\n']), "token text contains a delimiter");
            }
        }
    }

    #[test]
    fn token_text_reconstructs_source(source in "[ -~\\t\\n]{0,64}") {
        let joined: String = tokenize(&source).iter().map(|t| t.text).collect();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn spans_index_their_text(source in "[ -~\\t\\n]{0,64}") {
        for tok in tokenize(&source) {
            prop_assert_eq!(&source[tok.span.to_range()], tok.text);
        }
    }
}
