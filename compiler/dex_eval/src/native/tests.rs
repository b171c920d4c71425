#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::EvalError;
use pretty_assertions::assert_eq;

#[test]
fn call_passes_argument_through() {
    let echo = NativeFn::new("echo", |arg| Ok(arg.cloned()));
    let arg = NodeRef::leaf("ping");

    let result = echo.call(Some(&arg)).unwrap().unwrap();
    assert!(NodeRef::ptr_eq(&result, &arg));
    assert!(echo.call(None).unwrap().is_none());
}

#[test]
fn errors_propagate() {
    let failing = NativeFn::new("serve", |_| Err(EvalError::native("serve", "address in use")));
    let node = NodeRef::from(failing);

    assert_eq!(
        node.eval(None).unwrap_err(),
        EvalError::native("serve", "address in use")
    );
}

#[test]
fn display_and_debug_show_name() {
    let native = NativeFn::new("count", |_| Ok(None));
    assert_eq!(native.name(), "count");
    assert_eq!(native.to_string(), "<native count>");
    assert_eq!(format!("{native:?}"), "NativeFn { name: \"count\" }");
}
