//! Printer snapshot — one normalized reading of printer and job state.
//!
//! A snapshot is built every successful poll cycle from the two controller
//! documents ([`PrinterStatus`], [`JobStatus`]) and is immutable afterwards.
//! Every absent field is replaced by a documented fallback so consumers never
//! deal with partial data.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::status::{HeaterReport, JobStatus, PrinterStatus};
use crate::time::Timestamp;

/// Printer state used when the controller does not report one.
pub const UNKNOWN_STATE: &str = "Unknown";

/// File name used when no job file is reported.
pub const NO_FILE: &str = "No file";

/// State text the controller reports for a disconnected printer.
pub const OFFLINE_STATE: &str = "Offline";

/// URL path of the PrusaSlicer thumbnails plugin on the controller.
const THUMBNAIL_PATH: &str = "/plugin/prusaslicerthumbnails/thumbnail/";

const GCODE_EXTENSION: &str = ".gcode";

/// Characters escaped by `encodeURIComponent`: everything except
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Actual and target temperature of one heater, in °C.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Temperature {
    pub actual: Option<f64>,
    pub target: Option<f64>,
}

impl From<Option<&HeaterReport>> for Temperature {
    fn from(report: Option<&HeaterReport>) -> Self {
        report.map_or_else(Self::default, |heater| Self {
            actual: heater.actual,
            target: heater.target,
        })
    }
}

/// Progress of the current job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobProgress {
    pub file_name: String,
    pub progress_percent: f64,
    pub print_time_left_seconds: u64,
}

/// Normalized printer and job state for one poll cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrinterSnapshot {
    pub printer_state: String,
    pub bed_temperature: Temperature,
    pub tool_temperature: Temperature,
    pub job: JobProgress,
    /// Thumbnail image URL derived from the job file path.
    pub thumbnail_url: Option<String>,
    pub fetched_at: Timestamp,
}

impl PrinterSnapshot {
    /// Merge the two controller documents into a snapshot.
    ///
    /// `base_url` is the controller URL used to build the thumbnail URL.
    #[must_use]
    pub fn from_status(
        printer: &PrinterStatus,
        job: &JobStatus,
        base_url: &str,
        fetched_at: Timestamp,
    ) -> Self {
        let printer_state = printer.state_text().unwrap_or(UNKNOWN_STATE).to_string();
        let thumbnail_url = job.file_path().map(|path| thumbnail_url(base_url, path));

        Self {
            printer_state,
            bed_temperature: Temperature::from(printer.bed()),
            tool_temperature: Temperature::from(printer.tool0()),
            job: JobProgress {
                file_name: job.file_name().unwrap_or(NO_FILE).to_string(),
                progress_percent: job.completion().filter(|c| c.is_finite()).unwrap_or(0.0),
                print_time_left_seconds: job.print_time_left().map_or(0, whole_seconds),
            },
            thumbnail_url,
            fetched_at,
        }
    }

    /// Whether the controller reports the printer as offline.
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.printer_state == OFFLINE_STATE
    }
}

/// Build the thumbnail plugin URL for a job file path.
///
/// The `.gcode` extension is stripped (case-insensitively) and the rest of
/// the path is percent-encoded as a single URI component.
#[must_use]
pub fn thumbnail_url(base_url: &str, file_path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let encoded = utf8_percent_encode(strip_gcode_extension(file_path), URI_COMPONENT);
    format!("{base}{THUMBNAIL_PATH}{encoded}.png")
}

/// Remove a trailing `.gcode` extension, ignoring ASCII case.
#[must_use]
pub fn strip_gcode_extension(path: &str) -> &str {
    let Some(split) = path.len().checked_sub(GCODE_EXTENSION.len()) else {
        return path;
    };
    match path.get(split..) {
        Some(ext) if ext.eq_ignore_ascii_case(GCODE_EXTENSION) => &path[..split],
        _ => path,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        // saturating float-to-int cast
        seconds.round() as u64
    } else {
        0
    }
}
