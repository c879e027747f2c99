use crate::config::{LogFormat, TelemetryConfig};
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    /// `origin` names where the directive came from (`RUST_LOG` or the
    /// configured level).
    EnvFilter {
        origin: &'static str,
        value: String,
        source: ParseError,
    },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { origin, value, .. } => {
                write!(f, "invalid {origin} filter '{value}'")
            }
            TelemetryError::Subscriber(err) => {
                write!(f, "failed to install tracing subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Installs the global fmt subscriber in the configured format. A non-empty
/// `RUST_LOG` overrides the configured level and must itself be valid.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = resolve_filter(rust_log.as_deref(), &config.log_level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(config.ansi);

    let installed = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };
    installed.map_err(TelemetryError::Subscriber)
}

fn resolve_filter(rust_log: Option<&str>, configured: &str) -> Result<EnvFilter, TelemetryError> {
    let (origin, directive) = match rust_log.map(str::trim) {
        Some(value) if !value.is_empty() => (EnvFilter::DEFAULT_ENV, value),
        _ => ("RECRUIT_LOG_LEVEL", configured.trim()),
    };

    EnvFilter::try_new(directive).map_err(|source| TelemetryError::EnvFilter {
        origin,
        value: directive.to_string(),
        source,
    })
}
