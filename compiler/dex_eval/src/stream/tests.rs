#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::{Chain, NativeFn};
use pretty_assertions::assert_eq;

fn counter() -> (NodeRef, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let native = NativeFn::new("count", move |arg| {
        seen.fetch_add(1, Ordering::SeqCst);
        Ok(arg.cloned())
    });
    (native.into(), calls)
}

#[test]
fn consumer_receives_the_unevaluated_expression() {
    let (count, calls) = counter();
    let expression = NodeRef::from(Chain::new(vec![NodeRef::leaf("s"), count]));
    let received = Arc::new(parking_lot::Mutex::new(None));
    let slot = Arc::clone(&received);
    let consumer = NodeRef::from(NativeFn::new("serve", move |arg| {
        *slot.lock() = arg.cloned();
        Ok(None)
    }));

    let stream = StreamBinding::new("serve", consumer, expression.clone());
    assert!(stream.eval().unwrap().is_none());

    let handed = received.lock().clone().unwrap();
    assert!(NodeRef::ptr_eq(&handed, &expression));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn incoming_argument_is_ignored() {
    let consumer = NodeRef::from(NativeFn::new("echo", |arg| Ok(arg.cloned())));
    let expression = NodeRef::leaf("expr");
    let node = NodeRef::from(StreamBinding::new("echo", consumer, expression.clone()));

    let result = node.eval(Some(&NodeRef::leaf("ignored"))).unwrap().unwrap();
    assert!(NodeRef::ptr_eq(&result, &expression));
}

#[test]
fn consumer_may_evaluate_from_many_threads() {
    let (count, calls) = counter();
    let expression = NodeRef::from(Chain::new(vec![count.clone(), count]));

    // Evaluates the expression once per "request", fanned out over threads.
    let consumer = NodeRef::from(NativeFn::new("listen", |arg| {
        let Some(expr) = arg else {
            return Err(crate::EvalError::native("listen", "no expression"));
        };
        crossbeam::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| s.spawn(move |_| expr.eval(Some(&NodeRef::leaf(format!("req{i}"))))))
                .collect();
            for handle in handles {
                if let Ok(result) = handle.join() {
                    result?;
                }
            }
            Ok::<(), crate::EvalError>(())
        })
        .map_err(|_| crate::EvalError::native("listen", "worker panicked"))??;
        Ok(None)
    }));

    let stream = StreamBinding::new("listen", consumer, expression);
    stream.eval().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 16);
}

#[test]
fn display_names_the_consumer() {
    let consumer = NodeRef::from(NativeFn::new("serve", |_| Ok(None)));
    let stream = StreamBinding::new("serve", consumer, NodeRef::leaf("api"));
    assert_eq!(stream.name(), "serve");
    assert_eq!(stream.to_string(), "serve > api");
}
