//! Inspection commands: `lex` and `parse`.

use std::process::ExitCode;

use dex_lexer::tokenize;

use super::{read_file, report, session};
use crate::natives::Stdio;
use crate::Config;

/// Print the token stream of a file.
pub fn lex_file(path: &str) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };
    print!("{}", format_tokens(path, &source));
    ExitCode::SUCCESS
}

/// Tokens one per line with spans, after a header line.
pub fn format_tokens(path: &str, source: &str) -> String {
    let tokens = tokenize(source);
    let mut out = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
    for token in &tokens {
        out.push_str(&format!("  {token}\n"));
    }
    out
}

/// Parse a file against a session with the built-in natives and print the
/// resulting node.
pub fn parse_file(path: &str, config: &Config) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };
    let Some(dex) = session(&Stdio::process()) else {
        return ExitCode::FAILURE;
    };

    match dex.parse(&source) {
        Ok(node) => {
            println!("Parse result for '{path}':");
            println!("  {node}");
            let declared: Vec<String> = dex
                .scope()
                .names()
                .into_iter()
                .filter(|name| dex.scope().get(name).is_some_and(|n| n.as_chain().is_some()))
                .collect();
            if !declared.is_empty() {
                println!("Declared: {}", declared.join(", "));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(path, &source, &err.to_diagnostic(), config.color);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
