//! Function maps.

use dex_eval::{DispatchMap, NodeRef};
use dex_lexer::{Token, TokenKind};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{ParseError, ParseErrorKind, Parser};

impl<'src> Parser<'src> {
    /// `fnMapBody`: entries up to `)` (or end of input), the `(` already
    /// consumed. Anything between entries that is not `key{` is skipped.
    pub(crate) fn parse_function_map(&mut self, name: &str) -> Result<NodeRef, ParseError> {
        let mut entries = FxHashMap::default();
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::RParen | TokenKind::Eof => break,
                TokenKind::Ident if self.lexer.peek_kind() == TokenKind::LBrace => {
                    let open = self.lexer.next_token();
                    let entry = self.parse_map_entry(token, open)?;
                    entries.insert(token.text.to_owned(), entry);
                }
                _ => debug!(map = name, %token, "skipping token between entries"),
            }
        }
        debug!(map = name, entries = entries.len(), "function map");
        Ok(DispatchMap::new(name, entries).into())
    }

    /// The program between `open` and its matching `}`.
    ///
    /// The entry body is cut out of the source and parsed by a nested
    /// parser sharing this parser's scope, so it may reference anything
    /// bound so far.
    fn parse_map_entry(&mut self, key: Token<'src>, open: Token<'src>) -> Result<NodeRef, ParseError> {
        let mut depth = 0usize;
        let close = loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace if depth == 0 => break token,
                TokenKind::RBrace => depth -= 1,
                TokenKind::Eof => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnterminatedMapEntry {
                            key: key.text.to_owned(),
                        },
                        key.span.merge(open.span),
                    ));
                }
                _ => {}
            }
        };

        let base = self.lexer.base();
        let start = (open.span.end - base) as usize;
        let end = (close.span.start - base) as usize;
        let body = self.lexer.source().get(start..end).unwrap_or_default();
        debug!(key = key.text, body, "parsing map entry");
        Parser::nested(self.scope.clone(), body, open.span.end).parse()
    }
}
