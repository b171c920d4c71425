//! Pipelines produced by the parser.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::{EvalResult, NodeRef};

/// How the next evaluation of a chain behaves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvalType {
    /// Evaluate the pipeline.
    Normal,
    /// Evaluate to nothing once, then revert to `Normal`.
    Deferred,
}

/// A left-to-right pipeline of nodes.
///
/// `set{1 2 3} count count` parses to a chain of three nodes. Evaluating it
/// evaluates the first node with the incoming argument and feeds each result
/// as the argument of the next; the last result is returned. Chains are not
/// memoized: every evaluation re-runs the whole pipeline.
///
/// A chain produced by an apply declaration (`name < ...`) starts out
/// [`EvalType::Deferred`], so running the declaration itself does not fire
/// the pipeline it just bound.
#[derive(Debug)]
pub struct Chain {
    nodes: Vec<NodeRef>,
    deferred: AtomicBool,
}

impl Chain {
    pub fn new(nodes: Vec<NodeRef>) -> Self {
        Self::with_eval_type(nodes, EvalType::Normal)
    }

    /// A chain whose first evaluation is a no-op.
    pub fn deferred(nodes: Vec<NodeRef>) -> Self {
        Self::with_eval_type(nodes, EvalType::Deferred)
    }

    pub fn with_eval_type(nodes: Vec<NodeRef>, eval_type: EvalType) -> Self {
        Chain {
            nodes,
            deferred: AtomicBool::new(eval_type == EvalType::Deferred),
        }
    }

    pub fn eval_type(&self) -> EvalType {
        if self.deferred.load(Ordering::Acquire) {
            EvalType::Deferred
        } else {
            EvalType::Normal
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeRef] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Run the pipeline. An empty chain evaluates to nothing.
    pub fn eval(&self, arg: Option<&NodeRef>) -> EvalResult {
        if self.deferred.swap(false, Ordering::AcqRel) {
            debug!(len = self.nodes.len(), "deferred chain consumed");
            return Ok(None);
        }
        let Some((head, rest)) = self.nodes.split_first() else {
            return Ok(None);
        };
        let mut value = head.eval(arg)?;
        for node in rest {
            value = node.eval(value.as_ref())?;
        }
        Ok(value)
    }
}

/// Space-separated nodes; nested chains are bracketed.
impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if node.as_chain().is_some() {
                write!(f, "[{node}]")?;
            } else {
                write!(f, "{node}")?;
            }
        }
        Ok(())
    }
}
