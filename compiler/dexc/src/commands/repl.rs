//! `dex repl`: one statement per line against a single session.

use std::process::ExitCode;

use super::{report, session};
use crate::natives::Stdio;
use crate::Config;

/// Name used for stdin in diagnostics.
const REPL_PATH: &str = "<repl>";

/// Run stdin line by line. Errors are reported and the session continues;
/// the exit code is a failure if any line failed.
pub fn repl(config: &Config) -> ExitCode {
    let io = Stdio::process();
    let Some(dex) = session(&io) else {
        return ExitCode::FAILURE;
    };

    let mut failed = false;
    let mut line = String::new();
    while read_line_or_report(&io, &mut line) {
        let source = line.trim_end();
        if source.trim().is_empty() {
            continue;
        }
        match dex.run(source, None) {
            Ok(Some(set)) => {
                if io.write_line(&set.to_string()).is_err() {
                    return ExitCode::FAILURE;
                }
            }
            Ok(None) => {}
            Err(err) => {
                failed = true;
                report(REPL_PATH, source, &err.to_diagnostic(), config.color);
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Read the next line into `buf`. `false` at end of input or on a read
/// error, which is reported.
fn read_line_or_report(io: &Stdio, buf: &mut String) -> bool {
    buf.clear();
    match io.read_line(buf) {
        Ok(0) => false,
        Ok(_) => true,
        Err(err) => {
            eprintln!("error: {err}");
            false
        }
    }
}
