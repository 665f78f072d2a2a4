//! Log output for the generator.
//!
//! Filtering follows `HTML_CODEGEN_LOG` when it is set, and falls back to `info`, or `debug`
//! with `-v`.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "HTML_CODEGEN_LOG";

pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // a subscriber may already be installed when run from a test harness
    _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
