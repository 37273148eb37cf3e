//! Monitor configuration — the settings shared by the poller and the presenter.
//!
//! The record is built once at startup and never mutated afterwards, except
//! for the one-time derivation of the stream URL from the controller URL
//! (see [`MonitorConfig::with_derived_stream_url`]).
//!
//! Some fields are recognized but inert: `show_temps`, `show_preview` and
//! `preview_url` are accepted so existing configurations keep loading, but
//! no rendering decision depends on them yet.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigurationError;

/// Path appended to the controller URL when no stream URL is configured.
pub const DEFAULT_STREAM_PATH: &str = "/webcam/?action=stream";

/// Settings for one monitored printer controller.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Controller base URL (e.g. `http://octopi.local`).
    pub url: String,
    /// Static API key sent as `X-Api-Key`.
    pub api_key: String,
    /// Webcam stream URL. Derived from `url` when absent.
    pub stream_url: Option<String>,
    /// Show the live camera stream image.
    pub show_stream: bool,
    /// Show the preview video. Recognized, currently inert.
    pub show_preview: bool,
    /// Preview video URL. Recognized, currently inert.
    pub preview_url: Option<String>,
    /// Maximum width of the thumbnail and stream images, in pixels.
    pub max_stream_width: u32,
    /// Maximum height of the thumbnail and stream images, in pixels.
    pub max_stream_height: u32,
    /// Show the temperature block. Recognized, currently inert: the
    /// temperatures are always rendered.
    pub show_temps: bool,
    /// Poll and display refresh interval, in milliseconds.
    pub update_interval: u64,
    /// Log fetched payloads and received notifications.
    pub debug_mode: bool,
    /// Hide the widget while the printer is offline.
    pub hide_module_when_offline: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            stream_url: None,
            show_stream: true,
            show_preview: true,
            preview_url: None,
            max_stream_width: 400,
            max_stream_height: 300,
            show_temps: true,
            update_interval: 60 * 1000,
            debug_mode: false,
            hide_module_when_offline: false,
        }
    }
}

impl MonitorConfig {
    /// Fill in `stream_url` from the controller URL when it is absent or empty.
    ///
    /// Leaves the stream URL unset when no controller URL is configured either.
    #[must_use]
    pub fn with_derived_stream_url(mut self) -> Self {
        let missing = self.stream_url.as_deref().is_none_or(str::is_empty);
        if missing {
            self.stream_url = if self.url.is_empty() {
                None
            } else {
                Some(format!("{}{DEFAULT_STREAM_PATH}", self.base_url()))
            };
        }
        self
    }

    /// Controller URL without trailing slashes, ready for path concatenation.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// The configured (or derived) stream URL, if any.
    #[must_use]
    pub fn stream_url(&self) -> Option<&str> {
        self.stream_url.as_deref().filter(|url| !url.is_empty())
    }

    /// The poll interval as a [`Duration`]. Never zero.
    #[must_use]
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval.max(1))
    }

    /// Check that both the URL and the API key are present.
    ///
    /// # Errors
    ///
    /// Returns the first missing setting.
    pub fn validate_connection(&self) -> Result<(), ConfigurationError> {
        if self.url.trim().is_empty() {
            return Err(ConfigurationError::MissingUrl);
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigurationError::MissingApiKey);
        }
        Ok(())
    }
}

impl std::fmt::Debug for MonitorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("MonitorConfig")
            .field("url", &self.url)
            .field("api_key", &api_key)
            .field("stream_url", &self.stream_url)
            .field("show_stream", &self.show_stream)
            .field("show_preview", &self.show_preview)
            .field("preview_url", &self.preview_url)
            .field("max_stream_width", &self.max_stream_width)
            .field("max_stream_height", &self.max_stream_height)
            .field("show_temps", &self.show_temps)
            .field("update_interval", &self.update_interval)
            .field("debug_mode", &self.debug_mode)
            .field("hide_module_when_offline", &self.hide_module_when_offline)
            .finish()
    }
}
