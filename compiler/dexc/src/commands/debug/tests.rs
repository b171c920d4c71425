use super::*;
use pretty_assertions::assert_eq;

#[test]
fn tokens_are_listed_with_spans() {
    let out = format_tokens("t.dex", "set{1}");
    assert_eq!(
        out,
        "Tokens for 't.dex' (5 tokens):\n  \
         IDENT \"set\" @ 0..3\n  \
         { @ 3..4\n  \
         IDENT \"1\" @ 4..5\n  \
         } @ 5..6\n  \
         EOF @ 6..6\n"
    );
}

#[test]
fn empty_source_has_only_eof() {
    assert_eq!(format_tokens("e", ""), "Tokens for 'e' (1 tokens):\n  EOF @ 0..0\n");
}
