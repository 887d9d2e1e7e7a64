//! Logging setup using `tracing-subscriber`.
//!
//! Diagnostics reach the terminal as `tracing` events on stderr, so stdout
//! stays free for the summary and the JSON report.
//!
//! # Log Levels
//!
//! - default: `info` (warnings for unsupported fields, errors for rejected classes)
//! - `-v`: `debug` (per-class and per-file progress)
//! - `-vv`: `trace` (per-field codec decisions)
//! - `-q`: `error` only
//!
//! `RUST_LOG` takes precedence over the flags.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given flags.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
