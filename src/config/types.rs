//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for
//! command-line/environment parsing and programmatic construction.

use std::fmt;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CORS_WILDCARD, DEFAULT_CORS_ORIGINS, DEFAULT_GEO_PROVIDER_URL, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed once at startup from CLI flags (with environment fallbacks) and
/// handed to the server explicitly. It can also be built programmatically:
///
/// ```no_run
/// use ip_lookup::Config;
///
/// let config = Config {
///     port: 9000,
///     cors_origins: vec!["https://app.example.com".to_string()],
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "ip_lookup",
    version,
    about = "Reports the caller's IP address and enriches IPs with reverse DNS and geo-IP data."
)]
pub struct Config {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on (0 picks an ephemeral port)
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins ("*" allows any origin)
    #[arg(
        long,
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_CORS_ORIGINS
    )]
    pub cors_origins: Vec<String>,

    /// Base URL of the geo-IP provider; lookups go to `<base>/<ip>/json/`
    #[arg(long, env = "GEO_PROVIDER_URL", default_value = DEFAULT_GEO_PROVIDER_URL)]
    pub geo_provider_url: String,

    /// Geo provider request timeout in seconds
    #[arg(long, env = "GEO_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// User-Agent header sent to the geo provider
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: vec![DEFAULT_CORS_ORIGINS.to_string()],
            geo_provider_url: DEFAULT_GEO_PROVIDER_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted instead
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Returns the CORS allow-list with whitespace trimmed and blank entries dropped.
    pub fn normalized_cors_origins(&self) -> Vec<String> {
        self.cors_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Whether the allow-list admits every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.normalized_cors_origins()
            .iter()
            .any(|origin| origin == CORS_WILDCARD)
    }

    /// Checks the configuration for values the service cannot run with.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }

        if self.normalized_cors_origins().is_empty() {
            return Err(ConfigValidationError {
                field: "cors_origins",
                message: "must contain at least one origin, or \"*\" to allow any".to_string(),
            });
        }

        match url::Url::parse(&self.geo_provider_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            Ok(url) => {
                return Err(ConfigValidationError {
                    field: "geo_provider_url",
                    message: format!(
                        "must be an http:// or https:// URL with a host (got scheme '{}')",
                        url.scheme()
                    ),
                });
            }
            Err(e) => {
                return Err(ConfigValidationError {
                    field: "geo_provider_url",
                    message: format!("is not a valid URL: {e}"),
                });
            }
        }

        Ok(())
    }
}
