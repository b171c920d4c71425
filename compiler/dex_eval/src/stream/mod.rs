//! Stream bindings: wiring an expression to an external event source.

use std::fmt;

use tracing::debug;

use crate::{EvalResult, NodeRef};

/// `consumer > expression`.
///
/// Evaluating the binding evaluates `consumer` once, handing it the
/// *unevaluated* expression. The consumer (typically a native backed by a
/// listener of some sort) decides when and how often to evaluate the
/// expression, for example once per inbound request. The binding itself
/// never loops.
#[derive(Debug)]
pub struct StreamBinding {
    name: String,
    consumer: NodeRef,
    expression: NodeRef,
}

impl StreamBinding {
    pub fn new(name: impl Into<String>, consumer: NodeRef, expression: NodeRef) -> Self {
        StreamBinding {
            name: name.into(),
            consumer,
            expression,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn consumer(&self) -> &NodeRef {
        &self.consumer
    }

    #[inline]
    pub fn expression(&self) -> &NodeRef {
        &self.expression
    }

    /// Hand the expression to the consumer. Any incoming argument is
    /// ignored.
    pub fn eval(&self) -> EvalResult {
        debug!(stream = %self.name, "wiring stream to consumer");
        self.consumer.eval(Some(&self.expression))
    }
}

impl fmt::Display for StreamBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.name, self.expression)
    }
}

#[cfg(test)]
mod tests;
