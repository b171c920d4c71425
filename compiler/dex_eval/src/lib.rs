//! Dex Eval - node model, scope and evaluation.
//!
//! Everything in dex is a [`Node`]: a value that is evaluated with an
//! optional argument and produces an optional result. Some nodes are also
//! *sets* ([`ValueSet`]) and support keyed child lookup.
//!
//! # Architecture
//!
//! - [`ValueSet`]: named literal tree, evaluates to itself
//! - [`DispatchMap`]: routes its argument to an entry by the argument's name
//! - [`NativeFn`]: host callable exposed to the language
//! - [`StreamBinding`]: hands an unevaluated expression to a consumer
//! - [`Chain`]: pipeline produced by the parser, one node feeding the next
//! - [`Scope`]: write-once name table shared by parser and host
//!
//! There is no separate evaluation pass. [`NodeRef::eval`] dispatches on the
//! variant and recurses through whatever the node holds.
//!
//! # Concurrency
//!
//! Nodes are shared through [`NodeRef`] (an `Arc`) and are `Send + Sync`.
//! Parsed nodes are immutable except for the one-shot deferred flag of a
//! [`Chain`]. Hosts that evaluate a deferred chain from several threads must
//! make sure only one caller consumes that flag.

mod chain;
mod dispatch_map;
pub mod errors;
mod native;
mod node;
mod scope;
mod stream;
mod value_set;

pub use chain::{Chain, EvalType};
pub use dispatch_map::{DispatchMap, ANONYMOUS_MAP_NAME};
pub use errors::{EvalError, EvalResult, MutationError};
pub use native::NativeFn;
pub use node::{Node, NodeRef};
pub use scope::Scope;
pub use stream::StreamBinding;
pub use value_set::ValueSet;
