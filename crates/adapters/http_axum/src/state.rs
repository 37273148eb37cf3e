//! Shared application state for axum handlers.

use tokio::sync::watch;

use printmon_app::presenter::Frame;

/// Application state shared across all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Latest frame published by the presenter.
    pub frames: watch::Receiver<Frame>,
    /// Reload period of the widget page.
    pub refresh_seconds: u32,
}

impl AppState {
    #[must_use]
    pub fn new(frames: watch::Receiver<Frame>, refresh_seconds: u32) -> Self {
        Self {
            frames,
            refresh_seconds,
        }
    }

    /// A copy of the latest frame.
    #[must_use]
    pub fn current_frame(&self) -> Frame {
        self.frames.borrow().clone()
    }
}
