//! Parse errors and the combined session error.
//!
//! The parser stops at the first malformed construct, so a failed parse
//! produces exactly one [`ParseError`]. Each kind maps to a stable
//! [`ErrorCode`] and renders through [`ParseError::to_diagnostic`].

use dex_diagnostic::{Diagnostic, ErrorCode};
use dex_eval::{EvalError, MutationError};
use dex_lexer::{Span, Token, TokenKind};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A token that cannot start or continue the current construct.
    #[error("unexpected `{found}` {context}")]
    UnexpectedToken {
        found: TokenKind,
        text: String,
        context: &'static str,
    },

    /// `name{}`: literals need at least one child. `open` is the span of
    /// the literal's `{`.
    #[error("literal `{name}` is empty: literals can not be empty")]
    EmptyLiteral { name: String, open: Span },

    /// Input ended inside a function map entry.
    #[error("function map entry `{key}` is never closed")]
    UnterminatedMapEntry { key: String },

    /// `name > ...` where `name` is not bound.
    #[error("stream to undefined function `{name}`")]
    UndefinedStreamTarget { name: String },

    /// `name < ...` where `name` is already bound.
    #[error("{0}")]
    Rebinding(MutationError),
}

/// A parse failure at a source location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// `token` is not allowed here; `context` reads like "in literal".
    #[cold]
    pub fn unexpected(token: Token<'_>, context: &'static str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: token.kind,
                text: token.text.to_owned(),
                context,
            },
            token.span,
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::EmptyLiteral { .. } => ErrorCode::E1002,
            ParseErrorKind::UnterminatedMapEntry { .. } => ErrorCode::E1003,
            ParseErrorKind::UndefinedStreamTarget { .. } => ErrorCode::E1004,
            ParseErrorKind::Rebinding(_) => ErrorCode::E1005,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match &self.kind {
            ParseErrorKind::UnexpectedToken { found, text, .. } => {
                let label = match found {
                    TokenKind::Illegal => format!("illegal character {text:?}"),
                    TokenKind::Eof => "input ends here".to_owned(),
                    _ => format!("`{text}` not expected here"),
                };
                diag.with_label(self.span, label)
            }
            ParseErrorKind::EmptyLiteral { open, .. } => diag
                .with_label(self.span, "empty literal")
                .with_secondary_label(*open, "opened here")
                .with_note("add at least one child, as in `name{child}`"),
            ParseErrorKind::UnterminatedMapEntry { .. } => diag
                .with_label(self.span, "entry opened here")
                .with_note("close the entry with a matching `}`"),
            ParseErrorKind::UndefinedStreamTarget { name } => diag
                .with_label(self.span, "not bound in this scope")
                .with_note(format!(
                    "bind `{name}` before streaming to it, for example with a native"
                )),
            ParseErrorKind::Rebinding(err) => diag
                .with_label(self.span, format!("`{}` is already bound", err.name))
                .with_note("names are write-once; pick a new name"),
        }
    }
}

/// Failure of [`run`](crate::run): parsing or evaluating.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DexError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl DexError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DexError::Parse(err) => err.code(),
            DexError::Eval(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            DexError::Parse(err) => err.to_diagnostic(),
            DexError::Eval(err) => err.to_diagnostic(),
        }
    }
}

#[cfg(test)]
mod tests;
