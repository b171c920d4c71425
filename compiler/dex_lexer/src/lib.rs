//! Tokenizer for dex source text.
//!
//! The token set is tiny: identifiers, braces, parens and the two operators
//! `<` (apply) and `>` (stream). There are no numbers, strings or comments;
//! every literal is an opaque identifier. Whitespace is skipped and never
//! surfaced to the parser.
//!
//! # Usage
//!
//! ```text
//! let mut lexer = Lexer::new("set{1 2}");
//! assert_eq!(lexer.peek().kind, TokenKind::Ident);
//! let tok = lexer.next_token();
//! assert_eq!(tok.text, "set");
//! ```

mod lexer;
mod span;
mod token;

pub use lexer::{tokenize, Lexer};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
