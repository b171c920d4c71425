//! Dex command-line host.
//!
//! The `dex` binary runs programs from files or stdin against a session
//! preloaded with a couple of natives (`print`, `lines`). Everything the
//! binary does is exposed here so it can be tested without spawning it.

pub mod commands;
pub mod config;
pub mod natives;

use std::sync::Once;

pub use config::{parse_args, Command, Config, Invocation, UsageError};

/// Environment variable holding the tracing filter, e.g. `DEX_LOG=dex_parse=trace`.
pub const LOG_ENV: &str = "DEX_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once per process.
///
/// Reads the filter from `DEX_LOG`, falling back to `RUST_LOG`. Logging
/// stays off when neither is set. Output goes to stderr as an indented
/// span tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let directives = filter_directives(
            std::env::var(LOG_ENV).ok(),
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        );
        if let Some(directives) = directives {
            tracing_subscriber::registry()
                .with(EnvFilter::new(directives))
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .init();
        }
    });
}

/// `DEX_LOG` wins over `RUST_LOG`; `None` means logging stays off.
fn filter_directives(dex_log: Option<String>, rust_log: Option<String>) -> Option<String> {
    dex_log.or(rust_log)
}
