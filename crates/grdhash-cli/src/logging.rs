//! Tracing subscriber setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive used when `RUST_LOG` is not set
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Build the filter, letting `RUST_LOG` override the verbosity flag
#[must_use]
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(build_filter(verbose))
        .init();
}
