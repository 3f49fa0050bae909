//! Subscriber setup.
//!
//! `tracing` events and spans are filtered by the configured level, bridged
//! into OpenTelemetry and written to `popcorn-otlp.json` in the plugin's data
//! directory.

use super::tracer;
use crate::domain::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::Path;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name reported with every span.
pub const SERVICE_NAME: &str = "popcorn";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "popcorn-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without traces. Only the first call takes effect.
///
/// ```no_run
/// use popcorn::observability::init_tracing;
/// use popcorn::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    let _ = try_init_tracing(&data_dir, config.trace_level.as_deref());
}

fn try_init_tracing(data_dir: &Path, level: Option<&str>) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider =
        tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(level)))
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)));

    let _ = subscriber.try_init();
    Ok(())
}

/// Falls back to `info` when no level, or a blank one, is configured.
fn filter_directive(level: Option<&str>) -> String {
    level
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_missing_level_uses_info() {
        assert_eq!(filter_directive(None), "info");
        assert_eq!(filter_directive(Some("  ")), "info");
        assert_eq!(filter_directive(Some("popcorn=debug")), "popcorn=debug");
    }

    #[test]
    fn setup_creates_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested").join("popcorn");
        try_init_tracing(&data_dir, Some("warn")).unwrap();
        assert!(data_dir.is_dir());
    }
}
