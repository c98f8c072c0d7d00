//! Terminal and machine-readable output for the CLI.
//!
//! stdout carries results (file lists, reports, NDJSON events); diagnostics go
//! to stderr through `tracing`.

pub mod json;
pub mod views;

use is_terminal::IsTerminal;

/// Whether stdout can render unicode status icons.
pub fn stdout_supports_unicode() -> bool {
    let term_is_dumb = std::env::var("TERM")
        .map(|t| t.eq_ignore_ascii_case("dumb"))
        .unwrap_or(false);
    std::io::stdout().is_terminal() && !term_is_dumb
}
