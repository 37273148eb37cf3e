//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `printmon.toml` in the working directory unless another path is
//! given. Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values.
//!
//! A missing printer URL or API key is not an error here: the daemon starts
//! and the poller reports the problem on every cycle.

use serde::Deserialize;

use printmon_adapter_octoprint::OctoPrintConfig;
use printmon_domain::config::MonitorConfig;

/// Default config file name.
pub const DEFAULT_PATH: &str = "printmon.toml";

const DEFAULT_FILTER: &str =
    "printmond=info,printmon_app=info,printmon_adapter_octoprint=info,tower_http=info";
const DEBUG_FILTER: &str =
    "printmond=debug,printmon_app=debug,printmon_adapter_octoprint=debug,tower_http=debug";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Printer connection and display settings.
    pub printer: MonitorConfig,
    /// Controller client settings.
    pub http: OctoPrintConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `printmon.toml`, if present) then
    /// apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path.unwrap_or(DEFAULT_PATH))?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PRINTMON_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("PRINTMON_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("PRINTMON_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("PRINTMON_URL") {
            self.printer.url = val;
        }
        if let Ok(val) = std::env::var("PRINTMON_API_KEY") {
            self.printer.api_key = val;
        }
        if let Ok(val) = std::env::var("PRINTMON_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.printer.update_interval == 0 {
            return Err(ConfigError::Validation(
                "printer.update_interval must be non-zero".to_string(),
            ));
        }
        if self.printer.max_stream_width == 0 || self.printer.max_stream_height == 0 {
            return Err(ConfigError::Validation(
                "printer stream dimensions must be non-zero".to_string(),
            ));
        }
        if self.http.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "http.request_timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// The tracing filter to install.
    ///
    /// `printer.debug_mode` raises the default filter to `debug`; an explicit
    /// filter is kept as is.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        if self.printer.debug_mode && self.logging.filter == DEFAULT_FILTER {
            DEBUG_FILTER
        } else {
            &self.logging.filter
        }
    }

    /// Widget page reload period: the poll interval rounded up to seconds.
    #[must_use]
    pub fn refresh_seconds(&self) -> u32 {
        let seconds = self.printer.update_interval.div_ceil(1000).max(1);
        u32::try_from(seconds).unwrap_or(u32::MAX)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
