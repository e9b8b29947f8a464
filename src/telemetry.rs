//! Logging initialization.
//!
//! `RUST_LOG` takes precedence when set. Otherwise the level is `warn`,
//! or `debug` for vuemaker itself when `--verbose` is given. Output goes
//! to stderr so that stdout stays reserved for command output.

use tracing_subscriber::EnvFilter;

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,vuemaker=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
