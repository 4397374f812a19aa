//! Telemetry initialisation for the binary.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, honouring `RUST_LOG` and defaulting to
/// warnings only. Repeated calls leave the first registration in place.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        // Avoid stray colour codes in non-TTY sinks while keeping colour
        // on interactive terminals.
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .try_init();
}
