//! Telemetry helpers for applications embedding `gesture-cart`.
//!
//! Tracing setup stays explicit and opt-in.
//! Consumers can either call one of the `init_*` helpers or wire their own
//! `tracing` subscriber and filters.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`], with a caller-provided fallback filter.
///
/// Handy for surfacing per-tick transition logs, e.g. `"gesture_cart=trace"`.
#[must_use]
pub fn init_tracing_with_fallback_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
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
