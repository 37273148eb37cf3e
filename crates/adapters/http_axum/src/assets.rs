//! Static assets compiled into the binary.

use axum::http::header;
use axum::response::IntoResponse;

const STYLESHEET: &str = include_str!("../assets/printmon.css");
const STREAM_UNAVAILABLE: &str = include_str!("../assets/stream-unavailable.svg");

/// `GET /static/printmon.css`
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

/// `GET /static/stream-unavailable.svg` — shown when the camera is unreachable.
pub async fn stream_unavailable() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], STREAM_UNAVAILABLE)
}
