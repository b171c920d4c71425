#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::io::Cursor;

use dex_parse::Interpreter;

use super::*;
use pretty_assertions::assert_eq;

/// A session whose natives read `input` and write into the returned buffer.
fn session(input: &str) -> (Interpreter, Arc<Mutex<Vec<u8>>>) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let output: Output = buffer.clone();
    let input: Input = Arc::new(Mutex::new(Cursor::new(input.to_owned())));
    let dex = Interpreter::new();
    install(dex.scope(), &Stdio::new(input, output)).unwrap();
    (dex, buffer)
}

fn written(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(buffer.lock().clone()).unwrap()
}

#[test]
fn print_writes_and_passes_through() {
    let (dex, out) = session("");
    let result = dex.run("set{1 2} print print", None).unwrap().unwrap();

    assert_eq!(result.name(), Some("set"));
    assert_eq!(written(&out), "set{1 2}\nset{1 2}\n");
}

#[test]
fn print_without_argument_prints_nothing() {
    let (dex, out) = session("");
    assert!(dex.run("print", None).unwrap().is_none());
    assert_eq!(written(&out), "");
}

#[test]
fn lines_drives_a_dispatch_map() {
    let (dex, out) = session("/hello/world\n/other\nbye\n\n");
    dex.run("greet < (hello{print} bye{print})", None).unwrap();
    dex.run("lines > greet", None).unwrap();

    assert_eq!(written(&out), "hello\nhello\nbye\nbye\n");
}

#[test]
fn lines_without_expression_fails() {
    let (dex, _) = session("x\n");
    let lines = dex.scope().get(LINES).unwrap();
    assert_eq!(
        lines.eval(None).unwrap_err(),
        EvalError::native(LINES, "expected an expression to drive")
    );
}

#[test]
fn natives_cannot_be_installed_twice() {
    let (dex, _) = session("");
    let io = Stdio::new(
        Arc::new(Mutex::new(Cursor::new(Vec::<u8>::new()))),
        Arc::new(Mutex::new(Vec::<u8>::new())),
    );
    assert_eq!(
        install(dex.scope(), &io).unwrap_err(),
        MutationError::new(PRINT)
    );
}

#[test]
fn request_segments() {
    assert_eq!(request_segment("/doOnce/extra\n"), "doOnce");
    assert_eq!(request_segment("doTwice"), "doTwice");
    assert_eq!(request_segment(" /a "), "a");
    assert_eq!(request_segment("\n"), "");
}
