//! Host callables exposed to the language.

use std::fmt;
use std::sync::Arc;

use crate::{EvalResult, NodeRef};

type NativeFnPtr = dyn Fn(Option<&NodeRef>) -> EvalResult + Send + Sync;

/// Wraps a host function `argument -> set`.
///
/// The parser never sees what a native does; it only resolves the name it
/// was bound under. Natives are how side effects (printing, serving
/// requests, counting) enter a program.
#[derive(Clone)]
pub struct NativeFn {
    name: String,
    func: Arc<NativeFnPtr>,
}

impl NativeFn {
    pub fn new(
        name: impl Into<String>,
        func: impl Fn(Option<&NodeRef>) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        NativeFn {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call the wrapped function. Errors it returns propagate unchanged.
    #[inline]
    pub fn call(&self, arg: Option<&NodeRef>) -> EvalResult {
        (self.func)(arg)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn").field("name", &self.name).finish()
    }
}

impl fmt::Display for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native {}>", self.name)
    }
}

#[cfg(test)]
mod tests;
