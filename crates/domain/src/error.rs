//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PrintMonError`] via `#[from]` or an `into_domain()` helper when the
//! error crosses a port boundary.

/// Top-level error for printmon.
#[derive(Debug, thiserror::Error)]
pub enum PrintMonError {
    /// The monitor is not configured well enough to reach the controller.
    #[error("configuration error")]
    Configuration(#[from] ConfigurationError),

    /// A request to the printer controller failed (transport, status, decode).
    #[error("controller request failed")]
    Controller(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Missing settings that prevent any request to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("controller url is not configured")]
    MissingUrl,
    #[error("controller api key is not configured")]
    MissingApiKey,
}
