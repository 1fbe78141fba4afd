//! Opt-in tracing setup for hosts embedding the editing core.
//!
//! The crate itself only emits `tracing` events (edits, appends, shape
//! changes); nothing is initialized unless the host asks. Most embedders wire
//! their own subscriber and ignore this module.

/// Installs a compact default subscriber when the `telemetry` feature is on.
///
/// The filter comes from `RUST_LOG` when set and otherwise narrows to this
/// crate's debug events, which is what you want when diagnosing a misbehaving
/// edit sequence. Returns `false` when the feature is disabled or another
/// subscriber already claimed the global default.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chartdoc_rs=debug"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
