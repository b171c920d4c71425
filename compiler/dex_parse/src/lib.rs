//! Recursive descent parser for dex.
//!
//! Parsing and evaluation are interleaved the way the language wants them:
//! declarations (`name < ...`) bind into the [`Scope`] while parsing, and a
//! stream target (`name > ...`) must already be bound when it is parsed.
//! The result of a parse is a single [`NodeRef`], usually a [`Chain`], that
//! the caller evaluates.
//!
//! ```text
//! program      := { term } EOF
//! term         := literal | functionMap | streamDecl | applyDecl | identRef
//! literal      := IDENT '{' literalBody
//! functionMap  := ( IDENT | ε ) '(' fnMapBody
//! streamDecl   := IDENT '>' program
//! applyDecl    := IDENT '<' program
//! identRef     := IDENT
//! ```
//!
//! Tokens that cannot start a term (`}`, `)`, `{`, a leading `<` or `>`,
//! control characters) are skipped at top level and between function map
//! entries. Inside a literal, the first malformed construct aborts the
//! parse; there is no recovery.

mod error;
mod grammar;
mod interpreter;

pub use error::{DexError, ParseError, ParseErrorKind};
pub use interpreter::Interpreter;

use dex_eval::{Chain, NodeRef, Scope, ANONYMOUS_MAP_NAME};
use dex_lexer::{Lexer, TokenKind};
use dex_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

/// Parser state: the shared scope and a lexer over one program.
///
/// A parser is used for a single program. Function map entries are parsed
/// by nested parsers over a slice of the same source, sharing the scope.
pub struct Parser<'src> {
    scope: Scope,
    lexer: Lexer<'src>,
}

impl<'src> Parser<'src> {
    /// Create a parser over `source` that reads and writes `scope`.
    pub fn new(scope: Scope, source: &'src str) -> Self {
        Parser {
            scope,
            lexer: Lexer::new(source),
        }
    }

    /// Parser over a slice starting at absolute offset `base` of an
    /// enclosing source, so errors point into the enclosing source.
    fn nested(scope: Scope, source: &'src str, base: u32) -> Self {
        Parser {
            scope,
            lexer: Lexer::with_base(source, base),
        }
    }

    /// The scope this parser binds into.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Parse the whole program.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(mut self) -> Result<NodeRef, ParseError> {
        self.parse_program()
    }

    /// `{ term } EOF`. Also used for the right-hand side of `<` and `>`.
    fn parse_program(&mut self) -> Result<NodeRef, ParseError> {
        ensure_sufficient_stack(|| self.parse_terms())
    }

    fn parse_terms(&mut self) -> Result<NodeRef, ParseError> {
        let mut nodes = Vec::new();
        loop {
            let token = self.lexer.next_token();
            trace!(%token, "term");
            match token.kind {
                TokenKind::Eof => return Ok(Chain::new(nodes).into()),
                TokenKind::Ident => match self.lexer.peek_kind() {
                    TokenKind::LBrace => nodes.push(self.parse_literal(token)?),
                    TokenKind::LParen => {
                        self.lexer.next_token();
                        nodes.push(self.parse_function_map(token.text)?);
                    }
                    TokenKind::Stream => {
                        // The stream swallows the rest of the program and
                        // replaces whatever came before it.
                        if !nodes.is_empty() {
                            debug!(dropped = nodes.len(), "terms before stream discarded");
                        }
                        return self.parse_stream(token);
                    }
                    TokenKind::Apply => return self.parse_apply(token, nodes),
                    _ => match self.scope.get(token.text) {
                        Some(node) => nodes.push(node),
                        None => debug!(name = token.text, "skipping unbound identifier"),
                    },
                },
                TokenKind::LParen => nodes.push(self.parse_function_map(ANONYMOUS_MAP_NAME)?),
                _ => debug!(%token, "skipping stray token"),
            }
        }
    }
}

/// Parse `source` against `scope`.
pub fn parse(scope: &Scope, source: &str) -> Result<NodeRef, ParseError> {
    Parser::new(scope.clone(), source).parse()
}

/// Parse `source` against `scope` and evaluate the result with `arg`.
pub fn run(scope: &Scope, source: &str, arg: Option<&NodeRef>) -> Result<Option<NodeRef>, DexError> {
    let node = parse(scope, source)?;
    Ok(node.eval(arg)?)
}

#[cfg(test)]
mod tests;
