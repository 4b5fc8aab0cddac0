//! rulex command-line driver.
//!
//! Loads a JSON rule file, builds a [`Lexer`](rulex_lexer::Lexer) from it and
//! dumps the tokens of a source file.

pub mod commands;
mod rule_file;

pub use rule_file::{load_rules, parse_rules, LoadError, RuleFile};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a stderr tracing subscriber.
///
/// Reads the filter from `RULEX_LOG`, falling back to `RUST_LOG`. Does nothing
/// when neither is set, so plain runs pay no logging cost.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = std::env::var("RULEX_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };
        let filter = EnvFilter::builder().parse_lossy(directives);
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
