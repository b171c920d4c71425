//! Built-in natives available to programs run by the CLI.
//!
//! - `print`: writes its argument's set to stdout and passes it on.
//! - `lines`: a stream consumer. `lines > handler` evaluates `handler` once
//!   per stdin line, with a childless set named after the first
//!   `/`-separated segment of the line, and prints each result.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::Arc;

use dex_eval::{EvalError, EvalResult, MutationError, NodeRef, Scope};
use parking_lot::Mutex;
use tracing::debug;

pub const PRINT: &str = "print";
pub const LINES: &str = "lines";

pub type Input = Arc<Mutex<dyn BufRead + Send>>;
pub type Output = Arc<Mutex<dyn Write + Send>>;

/// Where natives read from and write to.
#[derive(Clone)]
pub struct Stdio {
    input: Input,
    output: Output,
}

impl Stdio {
    pub fn new(input: Input, output: Output) -> Self {
        Stdio { input, output }
    }

    /// The process's stdin and stdout.
    pub fn process() -> Self {
        let input: Input = Arc::new(Mutex::new(BufReader::new(io::stdin())));
        let output: Output = Arc::new(Mutex::new(io::stdout()));
        Self::new(input, output)
    }

    /// Read one line, including its terminator. `Ok(0)` at end of input.
    pub fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        self.input.lock().read_line(buf)
    }

    pub fn write_line(&self, text: &str) -> io::Result<()> {
        let mut out = self.output.lock();
        writeln!(out, "{text}")?;
        out.flush()
    }
}

/// Bind `print` and `lines` into `scope`.
pub fn install(scope: &Scope, io: &Stdio) -> Result<(), MutationError> {
    let out = io.clone();
    scope.bind_native(PRINT, move |arg| print(&out, arg))?;
    let source = io.clone();
    scope.bind_native(LINES, move |arg| lines(&source, arg))
}

fn print(io: &Stdio, arg: Option<&NodeRef>) -> EvalResult {
    let value = match arg {
        Some(arg) => arg.eval(None)?,
        None => None,
    };
    if let Some(set) = &value {
        io.write_line(&set.to_string())
            .map_err(|err| EvalError::native(PRINT, err.to_string()))?;
    }
    Ok(value)
}

fn lines(io: &Stdio, arg: Option<&NodeRef>) -> EvalResult {
    let Some(expr) = arg else {
        return Err(EvalError::native(LINES, "expected an expression to drive"));
    };
    let mut line = String::new();
    loop {
        line.clear();
        let read = io
            .read_line(&mut line)
            .map_err(|err| EvalError::native(LINES, err.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        let segment = request_segment(&line);
        debug!(segment, "line");
        if let Some(result) = expr.eval(Some(&NodeRef::leaf(segment)))? {
            io.write_line(&result.to_string())
                .map_err(|err| EvalError::native(LINES, err.to_string()))?;
        }
    }
}

/// First `/`-separated segment of a request-path-like line:
/// `/doOnce/extra` and `doOnce` both give `doOnce`.
pub fn request_segment(line: &str) -> &str {
    line.trim()
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests;
