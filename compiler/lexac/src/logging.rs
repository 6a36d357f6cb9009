//! Tracing subscriber setup for the `lexa` binary.
//!
//! `LEXA_LOG` takes the usual `RUST_LOG` directive syntax (for example
//! `lexa_lexer=trace`) and overrides the level picked from `-v`/`-q`.
//! Output is an indented span tree on stderr, so stdout only ever carries
//! the report.

use std::io::{self, IsTerminal};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::args::Verbosity;

/// Environment variable read for filter directives.
pub const LOG_ENV: &str = "LEXA_LOG";

/// Default filter directive for a verbosity level.
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose(1) => "info",
        Verbosity::Verbose(2) => "debug",
        Verbosity::Verbose(_) => "trace",
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let tree_layer = tracing_tree::HierarchicalLayer::default()
        .with_indent_amount(2)
        .with_indent_lines(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_targets(true);

    let _ = Registry::default().with(filter).with(tree_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_directive() {
        assert_eq!(default_directive(Verbosity::Quiet), "error");
        assert_eq!(default_directive(Verbosity::Normal), "warn");
        assert_eq!(default_directive(Verbosity::Verbose(1)), "info");
        assert_eq!(default_directive(Verbosity::Verbose(2)), "debug");
        assert_eq!(default_directive(Verbosity::Verbose(5)), "trace");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(Verbosity::Quiet);
        init(Verbosity::Normal);
    }
}
