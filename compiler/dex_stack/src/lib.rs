//! Stack growth guard for deeply nested programs.
//!
//! Both the parser and the evaluator recurse once per nesting level: nested
//! literals, map entries re-parsed as programs, chains that call chains
//! bound in scope. A program like `a{a{a{...}}}` nested a few hundred
//! thousand levels deep would otherwise overflow the native stack.
//!
//! Wrap each recursive step in [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn eval(&self, arg: Option<&NodeRef>) -> EvalResult {
//!     ensure_sufficient_stack(|| self.eval_inner(arg))
//! }
//! ```
//!
//! On WASM targets the guard is a plain call.

/// If less than this remains, grow the stack (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
