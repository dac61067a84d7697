//! Tracing setup for the fintrack binary

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "fintrack=debug"
    } else {
        "fintrack=warn"
    }
}

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` wins over `verbose` when set. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
