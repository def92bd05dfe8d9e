//! Front end for the Sprig interpreter.
//!
//! The language pipeline lives in `sprig_lexer`, `sprig_parse`, and
//! `sprig_eval`. This crate holds what the `sprig` binary shares with
//! its tests: script segmentation, a persistent evaluation session,
//! and diagnostic rendering.

pub mod report;
pub mod script;
pub mod session;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Logging is opt-in: nothing installs unless `SPRIG_LOG` is set, e.g.
/// `SPRIG_LOG=sprig_eval=trace` or `SPRIG_LOG=debug`. Safe to call
/// more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("SPRIG_LOG").is_ok() {
            let filter = EnvFilter::from_env("SPRIG_LOG");
            tracing_subscriber::registry()
                // Evaluated programs own stdout, so logs go to stderr.
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
