//! Value set literals.

use dex_eval::{NodeRef, ValueSet};
use dex_lexer::{Token, TokenKind};
use dex_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::{ParseError, ParseErrorKind, Parser};

impl<'src> Parser<'src> {
    /// `IDENT '{' literalBody`, with the identifier already consumed.
    pub(crate) fn parse_literal(&mut self, name: Token<'src>) -> Result<NodeRef, ParseError> {
        let open = self.lexer.next_token();
        let set = self.parse_literal_body(name, open)?;
        Ok(set.into())
    }

    /// Children up to the closing `}` (or end of input).
    ///
    /// `key{...}` nests, a lone `key` is a childless set named `key`. A
    /// repeated key replaces the earlier child.
    fn parse_literal_body(
        &mut self,
        name: Token<'src>,
        open: Token<'src>,
    ) -> Result<ValueSet, ParseError> {
        let mut children = FxHashMap::default();
        let close = loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::RBrace | TokenKind::Eof => break token,
                TokenKind::Ident if self.lexer.peek_kind() == TokenKind::LBrace => {
                    let open = self.lexer.next_token();
                    let child = ensure_sufficient_stack(|| self.parse_literal_body(token, open))?;
                    children.insert(token.text.to_owned(), child.into());
                }
                TokenKind::Ident => {
                    children.insert(token.text.to_owned(), NodeRef::leaf(token.text));
                }
                _ => return Err(ParseError::unexpected(token, "in literal")),
            }
        };
        if children.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyLiteral {
                    name: name.text.to_owned(),
                    open: open.span,
                },
                name.span.merge(close.span),
            ));
        }
        Ok(ValueSet::new(name.text, children))
    }
}
