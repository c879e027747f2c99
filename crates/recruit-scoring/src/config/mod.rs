use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
/// Large enough for a few thousand rows of pasted school-list CSV.
const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024;

/// Deployment stage the scoring service runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat {
                value: value.to_string(),
            }),
        }
    }
}

/// Process-level settings for the scoring service. The engine itself takes no
/// configuration; its weights and thresholds are fixed tables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Reads `.env` when present, then the `RECRUIT_*` process variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = read("RECRUIT_ENV")
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or(AppEnvironment::Development);

        let host = read("RECRUIT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match read("RECRUIT_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };
        let max_body_bytes = match read("RECRUIT_MAX_BODY_BYTES") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(bytes) if bytes > 0 => bytes,
                _ => return Err(ConfigError::InvalidBodyLimit { value }),
            },
            None => DEFAULT_MAX_BODY_BYTES,
        };

        let log_level =
            read("RECRUIT_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let format = match read("RECRUIT_LOG_FORMAT") {
            Some(value) => LogFormat::parse(&value)?,
            None if environment == AppEnvironment::Production => LogFormat::Json,
            None => LogFormat::Compact,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host,
                port,
                max_body_bytes,
            },
            telemetry: TelemetryConfig {
                log_level,
                format,
                ansi: environment == AppEnvironment::Development,
            },
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on request bodies, CSV uploads included.
    pub max_body_bytes: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.trim();
        if host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        host.parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.port))
            .map_err(|source| ConfigError::InvalidHost {
                value: self.host.clone(),
                source,
            })
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
    pub format: LogFormat,
    pub ansi: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort {
        value: String,
    },
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
    InvalidBodyLimit {
        value: String,
    },
    InvalidLogFormat {
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { value } => {
                write!(f, "RECRUIT_PORT '{value}' is not a valid port number")
            }
            ConfigError::InvalidHost { value, .. } => {
                write!(f, "RECRUIT_HOST '{value}' is not an IP address or localhost")
            }
            ConfigError::InvalidBodyLimit { value } => {
                write!(f, "RECRUIT_MAX_BODY_BYTES '{value}' must be a positive byte count")
            }
            ConfigError::InvalidLogFormat { value } => {
                write!(f, "RECRUIT_LOG_FORMAT '{value}' must be compact or json")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source, .. } => Some(source),
            ConfigError::InvalidPort { .. }
            | ConfigError::InvalidBodyLimit { .. }
            | ConfigError::InvalidLogFormat { .. } => None,
        }
    }
}
