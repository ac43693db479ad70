//! Process-wide diagnostic logging to stderr via `env_logger`.
//!
//! Level comes from `RUST_LOG`, defaulting to `warn` (`debug` with
//! `--verbose`). Nothing is written to disk.

use env_logger::{Builder, Env};

/// Default filter when `RUST_LOG` is unset.
#[must_use]
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global logger. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_timestamp_millis()
        .format_module_path(false)
        .try_init();
}
