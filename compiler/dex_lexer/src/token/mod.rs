//! Token kinds and tokens.

use logos::Logos;
use std::fmt;

use crate::Span;

/// Kind of a lexed token.
///
/// Single characters `{ } ( ) < >` are delimiters/operators. Any other
/// maximal run of characters that are not space, tab, newline or control
/// characters is an identifier, so a delimiter is never merged into an
/// identifier. Non-ASCII spaces (NBSP, U+3000) are identifier characters.
#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// Opaque identifier (`set`, `1`, `doOnce`, `a.b/c`).
    #[regex(r"[^{}()<> \t\r\n\x00-\x1F\x7F]+")]
    Ident,

    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// `>`: hands the rest of the program to a consumer.
    #[token(">")]
    Stream,
    /// `<`: binds the rest of the program to a name.
    #[token("<")]
    Apply,

    /// Control character the language has no use for.
    Illegal,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns the display text of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Ident => "IDENT",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Stream => ">",
            TokenKind::Apply => "<",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        }
    }

    /// `true` for `{ } ( ) < >`.
    #[inline]
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::Stream
                | TokenKind::Apply
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token borrowed from the source text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// The exact source text of the token (empty for `Eof`).
    pub text: &'src str,
    /// Absolute byte span of the token.
    pub span: Span,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Token { kind, text, span }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Illegal => {
                write!(f, "{} {:?} @ {}", self.kind, self.text, self.span)
            }
            _ => write!(f, "{} @ {}", self.kind, self.span),
        }
    }
}
