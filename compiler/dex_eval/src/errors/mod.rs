//! Evaluation and scope errors.

use dex_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

use crate::NodeRef;

/// Result of evaluating a node: a set, or nothing.
pub type EvalResult = Result<Option<NodeRef>, EvalError>;

/// Failure during evaluation of an already parsed program.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A function map was evaluated with no argument to dispatch on.
    #[error("function map `{map}` called without arguments")]
    MissingDispatchArgument { map: String },

    /// The argument to a function map evaluated to nothing, so there is no
    /// name to dispatch on.
    #[error("argument to function map `{map}` evaluated to nothing")]
    EmptyDispatchArgument { map: String },

    /// A host-provided native function failed.
    #[error("native function `{name}` failed: {message}")]
    Native { name: String, message: String },
}

impl EvalError {
    /// Error for a failing native function.
    #[cold]
    pub fn native(name: impl Into<String>, message: impl Into<String>) -> Self {
        EvalError::Native {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::MissingDispatchArgument { .. } => ErrorCode::E6001,
            EvalError::EmptyDispatchArgument { .. } => ErrorCode::E6002,
            EvalError::Native { .. } => ErrorCode::E6003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::MissingDispatchArgument { .. } => diag.with_note(
                "a function map dispatches on the name of its argument; pipe a set into it",
            ),
            EvalError::EmptyDispatchArgument { .. } => {
                diag.with_note("the argument must evaluate to a named set")
            }
            EvalError::Native { .. } => diag,
        }
    }
}

/// Attempt to rebind a name that is already bound in a [`Scope`](crate::Scope).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("attempt to mutate a value: `{name}` is already bound")]
pub struct MutationError {
    pub name: String,
}

impl MutationError {
    pub fn new(name: impl Into<String>) -> Self {
        MutationError { name: name.into() }
    }
}
