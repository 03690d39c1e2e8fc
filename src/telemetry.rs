//! Telemetry helpers for applications embedding `ohlcv-plot`.
//!
//! The library only emits `tracing` events (layout warnings, skipped draws,
//! backend stats); installing a subscriber is left to the host.

/// Filter used when `RUST_LOG` is unset: warnings from everything, render
/// details from this crate.
pub const DEFAULT_FILTER: &str = "warn,ohlcv_plot=info";

/// Installs a compact stderr subscriber using `RUST_LOG`, or `DEFAULT_FILTER`
/// when it is unset or unparsable.
///
/// Returns `false` when the `telemetry` feature is disabled or another global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Like `init_default_tracing`, with a caller-chosen fallback filter.
#[must_use]
pub fn init_tracing_with_fallback(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
