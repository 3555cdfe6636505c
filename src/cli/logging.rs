//! Logging setup
//!
//! Diagnostics go through `tracing` and are written to stderr, so they never
//! mix with command output on stdout.
//!
//! ```bash
//! # Debug output for one run
//! storefront --verbose order 1:2
//!
//! # Filter with RUST_LOG
//! RUST_LOG=storefront=info storefront shop
//! ```
//!
//! Without `--verbose` or `RUST_LOG` only errors are shown.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber; later calls are ignored
pub fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
