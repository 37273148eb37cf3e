//! OctoPrint client configuration.

use std::time::Duration;

use serde::Deserialize;

/// Transport settings for the OctoPrint client.
///
/// Connection details (URL, API key) belong to the monitor configuration and
/// are passed with every request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OctoPrintConfig {
    /// Upper bound for a single request, in seconds.
    pub request_timeout_secs: u16,
}

impl OctoPrintConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.request_timeout_secs))
    }
}

impl Default for OctoPrintConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_ten_second_timeout() {
        let config = OctoPrintConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn should_parse_timeout_from_toml() {
        let config: OctoPrintConfig = toml::from_str("request_timeout_secs = 3").unwrap();
        assert_eq!(config.request_timeout_secs, 3);
    }

    #[test]
    fn should_use_defaults_for_empty_table() {
        let config: OctoPrintConfig = toml::from_str("").unwrap();
        assert_eq!(config.request_timeout_secs, 10);
    }
}
