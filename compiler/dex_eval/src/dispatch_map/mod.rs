//! Function maps: a switch on the name of the incoming set.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{EvalError, EvalResult, NodeRef};

/// Name given to maps written without a leading identifier: `(a{..} b{..})`.
pub const ANONYMOUS_MAP_NAME: &str = "fnMap";

/// Routes its argument to one of its entries.
///
/// `set(doOnce{count} doThrice{count2 count})` builds a map named `set` with
/// entries `doOnce` and `doThrice`. Evaluating it with an argument that
/// evaluates to a set named `doOnce` runs the `doOnce` entry.
#[derive(Debug)]
pub struct DispatchMap {
    name: String,
    entries: FxHashMap<String, NodeRef>,
}

impl DispatchMap {
    pub fn new(name: impl Into<String>, entries: FxHashMap<String, NodeRef>) -> Self {
        DispatchMap {
            name: name.into(),
            entries,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn entry(&self, key: &str) -> Option<&NodeRef> {
        self.entries.get(key)
    }

    /// Entry keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dispatch on `arg`.
    ///
    /// The argument is evaluated with no argument to obtain a set; the set's
    /// name selects the entry, which is then evaluated with the original,
    /// unevaluated argument. No matching entry yields nothing. A missing
    /// argument is an error.
    pub fn eval(&self, arg: Option<&NodeRef>) -> EvalResult {
        let Some(arg) = arg else {
            return Err(EvalError::MissingDispatchArgument {
                map: self.name.clone(),
            });
        };
        let Some(selector) = arg.eval(None)? else {
            return Err(EvalError::EmptyDispatchArgument {
                map: self.name.clone(),
            });
        };
        let Some(key) = selector.name() else {
            debug!(map = %self.name, kind = selector.kind(), "unnamed dispatch argument");
            return Ok(None);
        };
        match self.entries.get(key) {
            Some(entry) => {
                debug!(map = %self.name, key, "dispatch");
                entry.eval(Some(arg))
            }
            None => {
                debug!(map = %self.name, key, "no matching entry");
                Ok(None)
            }
        }
    }
}

impl fmt::Display for DispatchMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, key) in self.keys().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}{{")?;
            if let Some(entry) = self.entries.get(key) {
                write!(f, "{entry}")?;
            }
            f.write_str("}")?;
        }
        f.write_str(")")
    }
}
