//! Logging setup
//!
//! Builds the subscriber for a run. `main` installs it with
//! `tracing::subscriber::with_default`, so it is only active while the
//! capture runs and nothing is registered process-wide.

use std::io::{self, IsTerminal};

use tracing::{Level, Subscriber};

/// Build the stderr subscriber used for a capture run
pub fn subscriber() -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .finish()
}
