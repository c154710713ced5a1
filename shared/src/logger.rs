//! Logging utilities

use serde::Serialize;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown log format: {0} (expected pretty or json)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

/// Initialize the global subscriber.
///
/// `RUST_LOG` takes precedence; without it everything at `info` and above is
/// emitted. Calling this twice is harmless, the second install is ignored.
pub fn init_logger(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}

/// Log a serializable record (receipts, status snapshots) as one JSON field.
pub fn log_record<T: Serialize>(kind: &str, record: &T) {
    info!(
        kind = %kind,
        record = %serde_json::to_string(record).unwrap_or_default(),
        "Record emitted"
    );
}

const PLATE_VISIBLE_CHARS: usize = 3;

/// Mask a licence plate for log output.
///
/// Plates longer than four characters keep their first three characters;
/// shorter plates are masked completely.
pub fn mask_plate(plate: &str) -> String {
    if plate.chars().count() <= PLATE_VISIBLE_CHARS + 1 {
        return "***".to_string();
    }
    let visible: String = plate.chars().take(PLATE_VISIBLE_CHARS).collect();
    format!("{}***", visible)
}
