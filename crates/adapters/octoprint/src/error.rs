//! OctoPrint adapter error types.

use printmon_domain::error::PrintMonError;

/// Errors specific to the OctoPrint adapter.
#[derive(Debug, thiserror::Error)]
pub enum OctoPrintError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or timed out.
    #[error("request to {endpoint} failed")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The controller answered with a non-success status.
    #[error("{endpoint} answered with status {status}")]
    Status {
        endpoint: &'static str,
        status: u16,
    },

    /// The response body is not a status document.
    #[error("invalid response body from {endpoint}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl OctoPrintError {
    /// Convert into a [`PrintMonError::Controller`] for propagation across
    /// port boundaries.
    #[must_use]
    pub fn into_domain(self) -> PrintMonError {
        PrintMonError::Controller(Box::new(self))
    }
}

impl From<OctoPrintError> for PrintMonError {
    fn from(err: OctoPrintError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> OctoPrintError {
        OctoPrintError::Decode {
            endpoint: "/api/job",
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        }
    }

    #[test]
    fn should_display_status_error() {
        let err = OctoPrintError::Status {
            endpoint: "/api/printer",
            status: 409,
        };
        assert_eq!(err.to_string(), "/api/printer answered with status 409");
    }

    #[test]
    fn should_display_decode_error() {
        assert_eq!(
            decode_error().to_string(),
            "invalid response body from /api/job"
        );
    }

    #[test]
    fn should_keep_decode_source() {
        let err = decode_error();
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn should_convert_to_controller_error() {
        let err: PrintMonError = decode_error().into();
        assert!(matches!(err, PrintMonError::Controller(_)));
        assert_eq!(err.to_string(), "controller request failed");
    }
}
