// File: crates/chart-core/src/telemetry.rs
// Summary: Opt-in log output for binaries that embed the charts. Libraries only emit
// `tracing` events; installing a subscriber is left to the application.

/// Filter applied when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "info";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if another global subscriber is already installed, or when built
/// without the `telemetry` feature.
#[cfg(feature = "telemetry")]
pub fn init_default_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init().is_ok()
}

#[cfg(not(feature = "telemetry"))]
pub fn init_default_tracing() -> bool {
    false
}

#[cfg(all(test, feature = "telemetry"))]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
