//! Session API for hosts.

use dex_eval::{EvalResult, MutationError, NodeRef, Scope};

use crate::{DexError, ParseError};

/// One interpreter session: a scope that outlives individual programs.
///
/// Declarations from one [`Interpreter::run`] are visible to the next,
/// which is how a host sets up aliases and then drives them:
///
/// ```text
/// let dex = Interpreter::new();
/// dex.bind_native("count", |arg| Ok(arg.cloned()))?;
/// dex.run("count4 < count count count count", None)?;
/// dex.run("set{1 2 3} count4", None)?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    scope: Scope,
}

impl Interpreter {
    /// Session with an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session over an existing scope.
    pub fn with_scope(scope: Scope) -> Self {
        Interpreter { scope }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Expose a host function under `name`.
    pub fn bind_native(
        &self,
        name: impl Into<String>,
        func: impl Fn(Option<&NodeRef>) -> EvalResult + Send + Sync + 'static,
    ) -> Result<(), MutationError> {
        self.scope.bind_native(name, func)
    }

    pub fn parse(&self, source: &str) -> Result<NodeRef, ParseError> {
        crate::parse(&self.scope, source)
    }

    pub fn run(&self, source: &str, arg: Option<&NodeRef>) -> Result<Option<NodeRef>, DexError> {
        crate::run(&self.scope, source, arg)
    }
}
