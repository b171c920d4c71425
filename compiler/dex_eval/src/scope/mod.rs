//! Write-once name table.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{EvalResult, MutationError, NativeFn, NodeRef};

/// Maps identifiers to nodes. Bindings can be added but never replaced.
///
/// `Scope` is a cheap handle: clones share the same bindings, which is how a
/// nested parser (for a function map entry) sees declarations made by its
/// parent, and how a host registers natives into a running session.
///
/// Lookups take a read lock and may run concurrently from host threads.
#[derive(Clone, Default)]
pub struct Scope(Arc<RwLock<FxHashMap<String, NodeRef>>>);

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a binding. Absence is not an error.
    pub fn get(&self, name: &str) -> Option<NodeRef> {
        self.0.read().get(name).cloned()
    }

    /// Bind `name` to `node`.
    ///
    /// Fails if `name` is already bound; the existing binding is left
    /// untouched.
    pub fn set(&self, name: impl Into<String>, node: NodeRef) -> Result<(), MutationError> {
        let name = name.into();
        let mut bindings = self.0.write();
        if bindings.contains_key(&name) {
            return Err(MutationError::new(name));
        }
        debug!(%name, kind = node.kind(), "bind");
        bindings.insert(name, node);
        Ok(())
    }

    /// Bind a host function under `name`.
    pub fn bind_native(
        &self,
        name: impl Into<String>,
        func: impl Fn(Option<&NodeRef>) -> EvalResult + Send + Sync + 'static,
    ) -> Result<(), MutationError> {
        let name = name.into();
        let native = NativeFn::new(name.clone(), func);
        self.set(name, native.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Whether two handles share the same bindings.
    pub fn ptr_eq(a: &Scope, b: &Scope) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Scope").field(&self.names()).finish()
    }
}
