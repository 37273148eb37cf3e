//! # printmon-adapter-octoprint
//!
//! OctoPrint REST adapter — implements the `PrinterController` and
//! `StreamProbe` ports over HTTP.
//!
//! ## Endpoints
//!
//! | Port call | Request |
//! |-----------|---------|
//! | `fetch_printer` | `GET {url}/api/printer` with `X-Api-Key` |
//! | `fetch_job` | `GET {url}/api/job` with `X-Api-Key` |
//! | `is_reachable` | `HEAD {stream_url}` |
//!
//! Response bodies are decoded leniently: missing or mistyped fields become
//! absent values and never fail the request.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `printmon-app` and `printmon-domain`.

mod config;
mod error;

pub use config::OctoPrintConfig;
pub use error::OctoPrintError;

use serde::de::DeserializeOwned;

use printmon_app::ports::{PrinterController, StreamProbe};
use printmon_domain::config::MonitorConfig;
use printmon_domain::error::PrintMonError;
use printmon_domain::status::{JobStatus, PrinterStatus};

const PRINTER_ENDPOINT: &str = "/api/printer";
const JOB_ENDPOINT: &str = "/api/job";
const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP client for an OctoPrint server.
#[derive(Debug, Clone)]
pub struct OctoPrintClient {
    http: reqwest::Client,
}

impl OctoPrintClient {
    /// Build a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`OctoPrintError::Build`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &OctoPrintConfig) -> Result<Self, OctoPrintError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(OctoPrintError::Build)?;
        Ok(Self { http })
    }

    async fn get_document<T: DeserializeOwned>(
        &self,
        config: &MonitorConfig,
        endpoint: &'static str,
    ) -> Result<T, OctoPrintError> {
        let url = endpoint_url(config.base_url(), endpoint);
        tracing::trace!(%url, "fetching status document");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &config.api_key)
            .send()
            .await
            .map_err(|source| OctoPrintError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OctoPrintError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| OctoPrintError::Request { endpoint, source })?;
        decode(endpoint, &body)
    }
}

impl PrinterController for OctoPrintClient {
    async fn fetch_printer(&self, config: &MonitorConfig) -> Result<PrinterStatus, PrintMonError> {
        Ok(self.get_document(config, PRINTER_ENDPOINT).await?)
    }

    async fn fetch_job(&self, config: &MonitorConfig) -> Result<JobStatus, PrintMonError> {
        Ok(self.get_document(config, JOB_ENDPOINT).await?)
    }
}

impl StreamProbe for OctoPrintClient {
    async fn is_reachable(&self, stream_url: &str) -> bool {
        match self.http.head(stream_url).send().await {
            Ok(response) => {
                let reachable = response.status().is_success();
                if !reachable {
                    tracing::debug!(status = %response.status(), "camera stream not available");
                }
                reachable
            }
            Err(err) => {
                tracing::debug!(error = %err, "camera stream not reachable");
                false
            }
        }
    }
}

fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{base_url}{endpoint}")
}

fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &[u8]) -> Result<T, OctoPrintError> {
    serde_json::from_slice(body).map_err(|source| OctoPrintError::Decode { endpoint, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;

    #[test]
    fn should_join_base_url_and_endpoint() {
        assert_eq!(
            endpoint_url("http://printer.local", PRINTER_ENDPOINT),
            "http://printer.local/api/printer"
        );
    }

    #[test]
    fn should_decode_partial_printer_document() {
        let status: PrinterStatus = decode(PRINTER_ENDPOINT, br#"{"state":{"text":"Printing"}}"#).unwrap();
        assert_eq!(status.state_text(), Some("Printing"));
        assert!(status.bed().is_none());
    }

    #[test]
    fn should_reject_non_json_body() {
        let err = decode::<JobStatus>(JOB_ENDPOINT, b"<html>").unwrap_err();
        assert!(matches!(err, OctoPrintError::Decode { endpoint: "/api/job", .. }));
    }

    async fn printer(headers: HeaderMap) -> (StatusCode, String) {
        match headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()) {
            Some("secret") => (
                StatusCode::OK,
                r#"{"state":{"text":"Operational"},"temperature":{"bed":{"actual":21.5,"target":0}}}"#
                    .to_string(),
            ),
            _ => (StatusCode::FORBIDDEN, String::new()),
        }
    }

    async fn serve() -> String {
        let router = Router::new()
            .route("/api/printer", get(printer))
            .route("/api/job", get(|| async { (StatusCode::CONFLICT, "") }))
            .route("/webcam/", get(|| async { "frame" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}")
    }

    fn monitor_config(url: &str, api_key: &str) -> MonitorConfig {
        MonitorConfig {
            url: url.to_string(),
            api_key: api_key.to_string(),
            ..MonitorConfig::default()
        }
    }

    #[tokio::test]
    async fn should_fetch_printer_with_api_key() {
        let url = serve().await;
        let client = OctoPrintClient::new(&OctoPrintConfig::default()).unwrap();

        let status = client
            .fetch_printer(&monitor_config(&url, "secret"))
            .await
            .unwrap();

        assert_eq!(status.state_text(), Some("Operational"));
        assert_eq!(status.bed().and_then(|bed| bed.actual), Some(21.5));
    }

    #[tokio::test]
    async fn should_fail_on_rejected_api_key() {
        let url = serve().await;
        let client = OctoPrintClient::new(&OctoPrintConfig::default()).unwrap();

        let err = client
            .fetch_printer(&monitor_config(&url, "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, PrintMonError::Controller(_)));
    }

    #[tokio::test]
    async fn should_fail_on_error_status() {
        let url = serve().await;
        let client = OctoPrintClient::new(&OctoPrintConfig::default()).unwrap();

        let err = client
            .get_document::<JobStatus>(&monitor_config(&url, "secret"), JOB_ENDPOINT)
            .await
            .unwrap_err();

        assert!(matches!(err, OctoPrintError::Status { status: 409, .. }));
    }

    #[tokio::test]
    async fn should_probe_stream_with_head() {
        let url = serve().await;
        let client = OctoPrintClient::new(&OctoPrintConfig::default()).unwrap();

        assert!(client.is_reachable(&format!("{url}/webcam/?action=stream")).await);
        assert!(!client.is_reachable(&format!("{url}/missing")).await);
    }

    #[tokio::test]
    async fn should_report_timeout_as_request_error() {
        let router = Router::new().route(
            "/api/printer",
            get(|| async {
                tokio::time::sleep(std::time::Duration::from_secs(3)).await;
                "{}"
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        let client = OctoPrintClient::new(&OctoPrintConfig {
            request_timeout_secs: 1,
        })
        .unwrap();

        let err = client
            .get_document::<PrinterStatus>(
                &monitor_config(&format!("http://{addr}"), "secret"),
                PRINTER_ENDPOINT,
            )
            .await
            .unwrap_err();

        match err {
            OctoPrintError::Request { endpoint, source } => {
                assert_eq!(endpoint, PRINTER_ENDPOINT);
                assert!(source.is_timeout());
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_treat_unreachable_host_as_unavailable() {
        let client = OctoPrintClient::new(&OctoPrintConfig::default()).unwrap();
        assert!(!client.is_reachable("http://127.0.0.1:1/webcam/").await);
    }
}
