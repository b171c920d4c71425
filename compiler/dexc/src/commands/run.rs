//! `dex run <file>`.

use std::process::ExitCode;

use dex_eval::NodeRef;
use tracing::debug;

use super::{or_exit, read_file, report, session};
use crate::natives::Stdio;
use crate::Config;

/// Parse and evaluate a file, printing the resulting set.
pub fn run_file(path: &str, config: &Config) -> ExitCode {
    match try_run_file(path, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}

fn try_run_file(path: &str, config: &Config) -> Result<(), ExitCode> {
    let source = or_exit(read_file(path))?;
    let io = Stdio::process();
    let dex = or_exit(session(&io))?;
    let arg = config.arg.as_deref().map(NodeRef::leaf);
    debug!(path, arg = ?config.arg, "run");

    match dex.run(&source, arg.as_ref()) {
        Ok(Some(set)) => {
            if let Err(err) = io.write_line(&set.to_string()) {
                eprintln!("error: {err}");
                return Err(ExitCode::FAILURE);
            }
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(err) => {
            report(path, &source, &err.to_diagnostic(), config.color);
            Err(ExitCode::FAILURE)
        }
    }
}
