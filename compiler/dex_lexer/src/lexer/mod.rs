//! Restartable scanner with one-token lookahead.
//!
//! The scanner holds no global state: it is an immutable source slice plus a
//! cursor. `peek()` snapshots the cursor by cloning the scanner, scans one
//! token and throws the copy away, so lookahead never buffers.

use crate::{Span, Token, TokenKind};
use logos::Logos;

/// Scanner over a source slice.
///
/// A lexer built with [`Lexer::with_base`] scans a slice cut out of a larger
/// source and reports spans relative to the larger source, which keeps
/// diagnostics for nested programs pointing at the right bytes.
#[derive(Clone)]
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    /// Absolute offset of the first byte of the slice.
    base: u32,
}

impl<'src> Lexer<'src> {
    /// Create a lexer over a whole source.
    pub fn new(source: &'src str) -> Self {
        Self::with_base(source, 0)
    }

    /// Create a lexer over a slice that starts at absolute offset `base`.
    pub fn with_base(source: &'src str, base: u32) -> Self {
        Lexer {
            inner: TokenKind::lexer(source),
            base,
        }
    }

    /// The slice this lexer scans.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }

    /// Absolute offset of the slice start.
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Absolute offset just past the most recently scanned token.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.absolute(self.inner.span()).end
    }

    /// Scan the next token.
    ///
    /// Returns `Eof` once the source is exhausted, and keeps returning it.
    pub fn next_token(&mut self) -> Token<'src> {
        match self.inner.next() {
            Some(Ok(kind)) => Token::new(kind, self.inner.slice(), self.absolute(self.inner.span())),
            Some(Err(())) => Token::new(
                TokenKind::Illegal,
                self.inner.slice(),
                self.absolute(self.inner.span()),
            ),
            None => {
                let end = self.source().len();
                Token::new(TokenKind::Eof, "", self.absolute(end..end))
            }
        }
    }

    /// Look at the next token without consuming it.
    #[inline]
    pub fn peek(&self) -> Token<'src> {
        self.clone().next_token()
    }

    /// Kind of the next token, without consuming it.
    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn absolute(&self, range: std::ops::Range<usize>) -> Span {
        Span::saturating_from_range(range).shifted(self.base)
    }
}

/// Tokenize a whole source. The last token is always `Eof`.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_eof() {
            return tokens;
        }
    }
}

#[cfg(test)]
mod tests;
