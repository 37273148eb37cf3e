//! Server-side rendered widget page (no JavaScript).

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use printmon_domain::widget::Widget;

use crate::state::AppState;

/// Rendering failure of a dashboard page.
#[derive(Debug)]
pub struct DashboardError(askama::Error);

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "failed to render dashboard");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

/// Widget page template.
#[derive(Template)]
#[template(path = "widget.html")]
pub struct WidgetTemplate {
    refresh_seconds: u32,
    hidden: bool,
    widget: Widget,
}

/// `GET /` — the printer widget.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, DashboardError> {
    let frame = state.current_frame();
    let page = WidgetTemplate {
        refresh_seconds: state.refresh_seconds,
        hidden: !frame.visible,
        widget: frame.widget,
    };
    Ok(Html(page.render()?))
}
