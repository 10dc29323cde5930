//! Telemetry helpers for applications embedding `date-axis-rs`.
//!
//! The axis only emits `tracing` events: range changes and tick plans at
//! `debug`, animation frames at `trace`, recovered misconfiguration at
//! `warn`. Hosts either call `init_default_tracing` or install their own
//! subscriber.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("date_axis=info")),
            )
            .with_target(true)
            .compact();

        builder.try_init().is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
