//! Host-side logging setup.
//!
//! In the browser the app installs the Dioxus logger, which forwards `tracing`
//! events to the console. Native builds (tests, tooling) use this instead:
//!
//! ```ignore
//! portfolio_core::logging::init_native();
//! // RUST_LOG=portfolio_core=debug cargo test -- --nocapture
//! ```

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_native() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
