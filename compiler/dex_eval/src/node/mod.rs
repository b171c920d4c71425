//! The node enum and its shared handle.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use dex_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{Chain, DispatchMap, EvalResult, NativeFn, StreamBinding, ValueSet};

/// Anything that can be evaluated.
///
/// The variant set is closed. Only [`ValueSet`] supports keyed lookup; use
/// [`Node::as_set`] to check for that capability.
#[derive(Debug)]
pub enum Node {
    ValueSet(ValueSet),
    DispatchMap(DispatchMap),
    Native(NativeFn),
    Stream(StreamBinding),
    Chain(Chain),
}

impl Node {
    /// The set capability: `Some` if this node supports keyed lookup.
    #[inline]
    pub fn as_set(&self) -> Option<&ValueSet> {
        match self {
            Node::ValueSet(set) => Some(set),
            _ => None,
        }
    }

    #[inline]
    pub fn as_chain(&self) -> Option<&Chain> {
        match self {
            Node::Chain(chain) => Some(chain),
            _ => None,
        }
    }

    /// Name of the node. Chains are anonymous.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::ValueSet(set) => Some(set.name()),
            Node::DispatchMap(map) => Some(map.name()),
            Node::Native(native) => Some(native.name()),
            Node::Stream(stream) => Some(stream.name()),
            Node::Chain(_) => None,
        }
    }

    /// Short description of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::ValueSet(_) => "value set",
            Node::DispatchMap(_) => "function map",
            Node::Native(_) => "native",
            Node::Stream(_) => "stream",
            Node::Chain(_) => "chain",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::ValueSet(set) => fmt::Display::fmt(set, f),
            Node::DispatchMap(map) => fmt::Display::fmt(map, f),
            Node::Native(native) => fmt::Display::fmt(native, f),
            Node::Stream(stream) => fmt::Display::fmt(stream, f),
            Node::Chain(chain) => fmt::Display::fmt(chain, f),
        }
    }
}

/// Shared, thread-safe handle to a [`Node`].
///
/// Scope bindings, chain cells and evaluation results are all `NodeRef`s, so
/// a binding looked up twice is the same node, not a copy.
#[derive(Clone)]
pub struct NodeRef(Arc<Node>);

impl NodeRef {
    pub fn new(node: Node) -> Self {
        NodeRef(Arc::new(node))
    }

    /// A childless value set, the usual way to pass a bare name as an
    /// argument (`doOnce`, a request path segment, ...).
    pub fn leaf(name: impl Into<String>) -> Self {
        ValueSet::leaf(name).into()
    }

    /// Evaluate this node with an optional argument.
    pub fn eval(&self, arg: Option<&NodeRef>) -> EvalResult {
        ensure_sufficient_stack(|| {
            trace!(kind = self.kind(), name = ?self.name(), "eval");
            match &*self.0 {
                // Sets are constants: application returns the set itself.
                Node::ValueSet(_) => Ok(Some(self.clone())),
                Node::DispatchMap(map) => map.eval(arg),
                Node::Native(native) => native.call(arg),
                Node::Stream(stream) => stream.eval(),
                Node::Chain(chain) => chain.eval(arg),
            }
        })
    }

    /// Keyed lookup on a set. Nodes without the set capability, and missing
    /// keys, yield nothing.
    pub fn get(&self, key: &str) -> EvalResult {
        match self.as_set() {
            Some(set) => set.get(key),
            None => Ok(None),
        }
    }

    /// Whether two handles point at the same node.
    #[inline]
    pub fn ptr_eq(a: &NodeRef, b: &NodeRef) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl Deref for NodeRef {
    type Target = Node;

    #[inline]
    fn deref(&self) -> &Node {
        &self.0
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl From<Node> for NodeRef {
    fn from(node: Node) -> Self {
        NodeRef::new(node)
    }
}

impl From<ValueSet> for NodeRef {
    fn from(set: ValueSet) -> Self {
        NodeRef::new(Node::ValueSet(set))
    }
}

impl From<DispatchMap> for NodeRef {
    fn from(map: DispatchMap) -> Self {
        NodeRef::new(Node::DispatchMap(map))
    }
}

impl From<NativeFn> for NodeRef {
    fn from(native: NativeFn) -> Self {
        NodeRef::new(Node::Native(native))
    }
}

impl From<StreamBinding> for NodeRef {
    fn from(stream: StreamBinding) -> Self {
        NodeRef::new(Node::Stream(stream))
    }
}

impl From<Chain> for NodeRef {
    fn from(chain: Chain) -> Self {
        NodeRef::new(Node::Chain(chain))
    }
}
