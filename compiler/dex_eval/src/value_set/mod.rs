//! Named literal trees.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{EvalResult, Node, NodeRef};

/// An immutable, named, key-addressable set.
///
/// Produced by literals such as `set{1 2 3{4 5}}`: the set is named `set`
/// and has children `1`, `2` and `3`, where `3` is itself a set with
/// children `4` and `5`.
#[derive(Debug)]
pub struct ValueSet {
    name: String,
    children: FxHashMap<String, NodeRef>,
}

impl ValueSet {
    pub fn new(name: impl Into<String>, children: FxHashMap<String, NodeRef>) -> Self {
        ValueSet {
            name: name.into(),
            children,
        }
    }

    /// A set with no children.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, FxHashMap::default())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the child stored under `key` with no argument.
    ///
    /// Nested sets materialize lazily: the child is only evaluated when it
    /// is asked for. A missing key yields nothing.
    pub fn get(&self, key: &str) -> EvalResult {
        match self.children.get(key) {
            Some(child) => child.eval(None),
            None => Ok(None),
        }
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Child keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.children.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Renders in literal syntax with sorted keys: `set{1 2 3{4 5}}`.
impl fmt::Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        self.fmt_body(f)
    }
}

impl ValueSet {
    /// Writes `{k1 k2{...}}`, or nothing for a leaf.
    fn fmt_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            return Ok(());
        }
        f.write_str("{")?;
        for (i, key) in self.keys().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(key)?;
            match self.children.get(key).map(|child| &**child) {
                Some(Node::ValueSet(set)) => set.fmt_body(f)?,
                Some(other) => write!(f, "{{{other}}}")?,
                None => {}
            }
        }
        f.write_str("}")
    }
}
