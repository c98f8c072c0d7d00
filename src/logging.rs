//! Logging setup
//!
//! Diagnostics go through `tracing` and are written to stderr so stdout stays
//! reserved for resolved file lists. `RUST_LOG` overrides the verbosity level.

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Build the filter for a verbosity level, preferring `RUST_LOG` when set.
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: Verbosity) {
    let stderr = std::io::stderr();
    let ansi = stderr.is_terminal() && std::env::var_os("NO_COLOR").is_none();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
