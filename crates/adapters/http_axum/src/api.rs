//! JSON API.

use axum::Json;
use axum::extract::State;

use printmon_app::presenter::Frame;

use crate::state::AppState;

/// `GET /api/status` — the latest frame.
pub async fn status(State(state): State<AppState>) -> Json<Frame> {
    Json(state.current_frame())
}
