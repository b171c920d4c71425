//! Parser tests.
//!
//! - `parser`: structure of parse results and parse errors
//! - `programs`: evaluation of parsed programs against counting natives
//! - `streams`: stream declarations driven by simulated hosts

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]


use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::Interpreter;

/// Counts calls to a native and passes the argument through.
#[derive(Clone, Default)]
struct Counter(Arc<AtomicUsize>);

impl Counter {
    fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Bind this counter under `name`.
    fn bind(&self, dex: &Interpreter, name: &str) {
        let calls = Arc::clone(&self.0);
        dex.bind_native(name, move |arg| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(arg.cloned())
        })
        .unwrap();
    }
}

/// A session with `count` bound to a fresh counter.
fn session() -> (Interpreter, Counter) {
    let dex = Interpreter::new();
    let counter = Counter::default();
    counter.bind(&dex, "count");
    (dex, counter)
}
