//! Dex CLI.

use std::process::ExitCode;

use dexc::commands::{lex_file, parse_file, repl, run_file};
use dexc::{init_tracing, parse_args, Command};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let config = &invocation.config;
    match &invocation.command {
        Command::Run { path } => run_file(path, config),
        Command::Lex { path } => lex_file(path),
        Command::Parse { path } => parse_file(path, config),
        Command::Repl => repl(config),
        Command::Help => {
            print_usage();
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("dex {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}

fn print_usage() {
    println!("Dex - set and pipeline expression language");
    println!();
    println!("Usage: dex <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Parse and evaluate a program");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  parse <file>         Parse and display the node tree");
    println!("  repl                 Evaluate stdin line by line in one session");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       Diagnostic colors: auto (default), always, never");
    println!("  --arg=<name>         run: evaluate with a set named <name> as argument");
    println!();
    println!("Built-in functions:");
    println!("  print                Print the incoming set and pass it on");
    println!("  lines                Stream consumer: `lines > expr` evaluates expr");
    println!("                       once per stdin line, named after its first");
    println!("                       '/'-separated segment");
    println!();
    println!("Environment:");
    println!("  DEX_LOG              Tracing filter (falls back to RUST_LOG)");
    println!();
    println!("Examples:");
    println!("  dex run main.dex");
    println!("  dex run router.dex --arg=doOnce");
    println!("  printf '/doOnce\\n/doTwice\\n' | dex run server.dex");
    println!("  DEX_LOG=dex_parse=trace dex parse main.dex");
}
