#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unexpected_token_message_and_code() {
    let token = Token::new(TokenKind::RBrace, "}", Span::new(4, 5));
    let err = ParseError::unexpected(token, "at top level");

    assert_eq!(err.to_string(), "unexpected `}` at top level");
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.span, Span::new(4, 5));
}

#[test]
fn illegal_character_label_shows_the_byte() {
    let token = Token::new(TokenKind::Illegal, "\u{1}", Span::new(0, 1));
    let diag = ParseError::unexpected(token, "at top level").to_diagnostic();

    assert_eq!(diag.labels[0].message, "illegal character \"\\u{1}\"");
    assert_eq!(diag.primary_span(), Some(Span::new(0, 1)));
}

#[test]
fn every_kind_has_a_parse_code() {
    let kinds = [
        ParseErrorKind::EmptyLiteral {
            name: "s".into(),
            open: Span::new(1, 2),
        },
        ParseErrorKind::UnterminatedMapEntry { key: "k".into() },
        ParseErrorKind::UndefinedStreamTarget { name: "foo".into() },
        ParseErrorKind::Rebinding(MutationError::new("x")),
    ];
    for kind in kinds {
        let err = ParseError::new(kind, Span::DUMMY);
        assert!(err.code().is_parse_error(), "{err}");
        assert_eq!(err.to_diagnostic().code, err.code());
    }
}

#[test]
fn empty_literal_points_at_its_brace() {
    let err = ParseError::new(
        ParseErrorKind::EmptyLiteral {
            name: "set".into(),
            open: Span::new(3, 4),
        },
        Span::new(0, 5),
    );
    let diag = err.to_diagnostic();

    assert_eq!(diag.primary_span(), Some(Span::new(0, 5)));
    assert_eq!(diag.labels.len(), 2);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.labels[1].span, Span::new(3, 4));
    assert_eq!(diag.labels[1].message, "opened here");
}

#[test]
fn rebinding_message_comes_from_mutation_error() {
    let err = ParseError::new(
        ParseErrorKind::Rebinding(MutationError::new("x")),
        Span::new(0, 1),
    );
    assert_eq!(
        err.to_string(),
        "attempt to mutate a value: `x` is already bound"
    );
    assert_eq!(err.code(), ErrorCode::E1005);
}

#[test]
fn dex_error_forwards_codes_and_diagnostics() {
    let parse: DexError = ParseError::new(
        ParseErrorKind::UndefinedStreamTarget { name: "foo".into() },
        Span::new(0, 5),
    )
    .into();
    let eval: DexError = EvalError::MissingDispatchArgument { map: "set".into() }.into();

    assert_eq!(parse.code(), ErrorCode::E1004);
    assert_eq!(parse.to_string(), "stream to undefined function `foo`");
    assert_eq!(eval.code(), ErrorCode::E6001);
    assert_eq!(eval.to_diagnostic().code, ErrorCode::E6001);
}
