//! Command-line arguments.
//!
//! Arguments are parsed by hand: a command word, a positional path where
//! the command takes one, and `--flag=value` options anywhere after the
//! command.

use dex_diagnostic::emitter::ColorMode;
use thiserror::Error;

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Parse and evaluate a file.
    Run { path: String },
    /// Print the token stream of a file.
    Lex { path: String },
    /// Print the parsed node tree of a file.
    Parse { path: String },
    /// Evaluate stdin line by line in one session.
    Repl,
    Help,
    Version,
}

/// Options shared by all commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Diagnostic coloring, `--color=auto|always|never`.
    pub color: ColorMode,
    /// `--arg=<name>`: evaluate `run` programs with a childless set named
    /// `<name>` as argument.
    pub arg: Option<String>,
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub config: Config,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("missing file path for '{0}'")]
    MissingPath(&'static str),
    #[error("invalid color mode '{0}' (expected auto, always or never)")]
    InvalidColor(String),
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Parse the arguments following the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation, UsageError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(UsageError::MissingCommand);
    };

    let mut config = Config::default();
    let mut path: Option<String> = None;
    for arg in rest {
        if let Some(mode) = arg.strip_prefix("--color=") {
            config.color =
                ColorMode::from_flag(mode).ok_or_else(|| UsageError::InvalidColor(mode.to_string()))?;
        } else if let Some(name) = arg.strip_prefix("--arg=") {
            config.arg = Some(name.to_string());
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownFlag(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(UsageError::UnexpectedArgument(arg.clone()));
        }
    }

    let with_path = |name: &'static str| path.clone().ok_or(UsageError::MissingPath(name));
    let command = match command.as_str() {
        "run" => Command::Run {
            path: with_path("run")?,
        },
        "lex" => Command::Lex {
            path: with_path("lex")?,
        },
        "parse" => Command::Parse {
            path: with_path("parse")?,
        },
        "repl" => Command::Repl,
        "help" | "--help" | "-h" => Command::Help,
        "version" | "--version" | "-V" => Command::Version,
        other => return Err(UsageError::UnknownCommand(other.to_string())),
    };
    if let (Command::Repl | Command::Help | Command::Version, Some(extra)) = (&command, path) {
        return Err(UsageError::UnexpectedArgument(extra));
    }

    Ok(Invocation { command, config })
}
