//! Command handlers for the `dex` binary.
//!
//! Each handler returns the process exit code. Shared helpers for reading
//! sources and reporting diagnostics live here.

use std::io::IsTerminal;
use std::process::ExitCode;

use dex_diagnostic::emitter::{ColorMode, TerminalEmitter};
use dex_diagnostic::Diagnostic;
use dex_parse::Interpreter;

use crate::natives::{self, Stdio};

mod debug;
mod repl;
mod run;

pub use debug::{format_tokens, lex_file, parse_file};
pub use repl::repl;
pub use run::run_file;

/// Read a source file, reporting failures on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            None
        }
    }
}

/// Render a diagnostic for `source` on stderr.
pub(crate) fn report(path: &str, source: &str, diagnostic: &Diagnostic, color: ColorMode) {
    let stderr = std::io::stderr();
    let emitter = TerminalEmitter::new(path, source, color, stderr.is_terminal());
    if emitter.emit(diagnostic, stderr.lock()).is_err() {
        eprintln!("{diagnostic}");
    }
}

/// A session over the process's stdio with the built-in natives bound.
pub(crate) fn session(io: &Stdio) -> Option<Interpreter> {
    let dex = Interpreter::new();
    match natives::install(dex.scope(), io) {
        Ok(()) => Some(dex),
        Err(err) => {
            eprintln!("error: {err}");
            None
        }
    }
}

/// Turn a failure that was already reported (`None`) into the exit code.
pub(crate) fn or_exit<T>(value: Option<T>) -> Result<T, ExitCode> {
    value.ok_or(ExitCode::FAILURE)
}
