//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; translated text and the chat
//! transcript are printed separately and are never routed through here.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flag.
pub const LOG_ENV: &str = "LINGOME_LOG";

/// Maps the `-v` count to a filter directive.
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
