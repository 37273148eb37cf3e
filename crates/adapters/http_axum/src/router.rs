//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use printmon_domain::widget::STREAM_FALLBACK_ASSET;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(crate::dashboard::index))
        .route("/api/status", get(crate::api::status))
        .route("/static/printmon.css", get(crate::assets::stylesheet))
        .route(STREAM_FALLBACK_ASSET, get(crate::assets::stream_unavailable))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
