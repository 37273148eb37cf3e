//! Widget rendering — turns the presenter's state into a display tree.
//!
//! [`render`] is a pure function of the last snapshot, the camera
//! reachability flag and the configuration. Adapters decide how the tree is
//! drawn (HTML, terminal, …); all text fallbacks are settled here.

use serde::Serialize;

use crate::config::MonitorConfig;
use crate::format::{format_progress, format_temperature, format_time_left};
use crate::snapshot::PrinterSnapshot;

/// Image shown instead of the stream when the camera is unreachable.
pub const STREAM_FALLBACK_ASSET: &str = "/static/stream-unavailable.svg";

pub const NO_STATUS: &str = "No status";
pub const NO_FILE_NAME: &str = "No file name";

const THUMBNAIL_ALT: &str = "3D Printer Thumbnail";
const STREAM_ALT: &str = "3D Printer Stream";

/// An image slot capped to the configured maximum size.
///
/// `src` is `None` for an empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSlot {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub max_width: u32,
    pub max_height: u32,
}

/// Everything the widget displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Widget {
    pub thumbnail: ImageSlot,
    /// `None` when the stream is disabled.
    pub stream: Option<ImageSlot>,
    pub printer_state: String,
    pub progress: String,
    pub remaining_time: String,
    pub file_name: String,
    pub bed_temperature: String,
    pub tool_temperature: String,
}

/// Build the widget for the given state.
#[must_use]
pub fn render(
    printer_data: Option<&PrinterSnapshot>,
    camera_available: bool,
    config: &MonitorConfig,
) -> Widget {
    let thumbnail_src = printer_data.and_then(|data| data.thumbnail_url.clone());
    let thumbnail = ImageSlot {
        alt: thumbnail_src.as_ref().map(|_| THUMBNAIL_ALT.to_string()),
        src: thumbnail_src,
        max_width: config.max_stream_width,
        max_height: config.max_stream_height,
    };

    let stream = config.show_stream.then(|| {
        let src = match config.stream_url() {
            Some(url) if camera_available => url.to_string(),
            _ => STREAM_FALLBACK_ASSET.to_string(),
        };
        ImageSlot {
            src: Some(src),
            alt: Some(STREAM_ALT.to_string()),
            max_width: config.max_stream_width,
            max_height: config.max_stream_height,
        }
    });

    let printer_state = printer_data
        .map(|data| data.printer_state.as_str())
        .filter(|state| !state.is_empty())
        .unwrap_or(NO_STATUS)
        .to_string();
    let file_name = printer_data
        .map(|data| data.job.file_name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(NO_FILE_NAME)
        .to_string();

    Widget {
        thumbnail,
        stream,
        printer_state,
        progress: format_progress(printer_data.map(|data| data.job.progress_percent)),
        remaining_time: format_time_left(printer_data.map(|data| data.job.print_time_left_seconds)),
        file_name,
        bed_temperature: format_temperature(printer_data.and_then(|d| d.bed_temperature.actual)),
        tool_temperature: format_temperature(printer_data.and_then(|d| d.tool_temperature.actual)),
    }
}
