//! Diagnostic tracing for the fixer.
//!
//! Output goes to stderr only; stdout is reserved for `--dry-run` output.
//! Only this crate's events pass the default filter, so dependencies stay
//! quiet unless `RUST_LOG` asks for them.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
///
/// `verbose` (`--verbose`) raises the crate to `info`, which reports every
/// replaced directive and the written path.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "freshclam_fixer=info"
    } else {
        "freshclam_fixer=warn"
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over [`default_filter`].
///
/// # Example
/// ```bash
/// RUST_LOG=freshclam_fixer=debug freshclam-fixer -c /etc/freshclam.conf -m mirror.local
/// ```
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
