//! Stderr logging. Stdout carries the module result and nothing else.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BODHI_RELEASE_LOG";

/// Filter directive for an Ansible verbosity level (`-v` count).
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 | 1 => "warn",
        2 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber. A filter in `env_var` wins over `fallback`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(env_var: &str, fallback: &str) {
    let filter = EnvFilter::try_from_env(env_var).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
