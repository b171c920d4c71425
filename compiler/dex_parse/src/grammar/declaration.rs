//! Declarations: `name < program` and `name > program`.

use dex_eval::{Chain, MutationError, NodeRef, StreamBinding};
use dex_lexer::Token;
use tracing::debug;

use crate::{ParseError, ParseErrorKind, Parser};

impl<'src> Parser<'src> {
    /// `IDENT '<' program`.
    ///
    /// The rest of the source becomes the head of a new chain whose tail is
    /// whatever was parsed before the declaration. The chain is bound to
    /// `name` and starts out deferred, so evaluating the declaration does
    /// not run it.
    pub(crate) fn parse_apply(
        &mut self,
        name: Token<'src>,
        preceding: Vec<NodeRef>,
    ) -> Result<NodeRef, ParseError> {
        let op = self.lexer.next_token();
        let span = name.span.merge(op.span);
        if self.scope.contains(name.text) {
            return Err(rebinding(MutationError::new(name.text), span));
        }

        let expr = self.parse_program()?;
        let mut nodes = Vec::with_capacity(preceding.len() + 1);
        nodes.push(expr);
        nodes.extend(preceding);

        let applied: NodeRef = Chain::deferred(nodes).into();
        self.scope
            .set(name.text, applied.clone())
            .map_err(|err| rebinding(err, span))?;
        debug!(name = name.text, "declared");
        Ok(applied)
    }

    /// `IDENT '>' program`: the identifier names the consumer.
    pub(crate) fn parse_stream(&mut self, name: Token<'src>) -> Result<NodeRef, ParseError> {
        let op = self.lexer.next_token();
        let Some(consumer) = self.scope.get(name.text) else {
            return Err(ParseError::new(
                ParseErrorKind::UndefinedStreamTarget {
                    name: name.text.to_owned(),
                },
                name.span.merge(op.span),
            ));
        };

        let expression = self.parse_program()?;
        debug!(consumer = name.text, "stream");
        Ok(StreamBinding::new(name.text, consumer, expression).into())
    }
}

#[cold]
fn rebinding(err: MutationError, span: dex_lexer::Span) -> ParseError {
    ParseError::new(ParseErrorKind::Rebinding(err), span)
}
