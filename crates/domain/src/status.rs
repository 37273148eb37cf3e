//! Typed shape of the two controller status documents.
//!
//! Only the fields the dashboard uses are modelled. Every field is optional
//! and parsed leniently: a missing, `null` or mistyped value becomes `None`
//! instead of failing the whole document, so a partially unexpected response
//! still yields a snapshot with fallback values.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Body of `GET /api/printer`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrinterStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub state: Option<StateReport>,
    #[serde(default, deserialize_with = "lenient")]
    pub temperature: Option<TemperatureReport>,
}

/// `state` object of the printer document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StateReport {
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

/// `temperature` object of the printer document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TemperatureReport {
    #[serde(default, deserialize_with = "lenient")]
    pub bed: Option<HeaterReport>,
    #[serde(default, deserialize_with = "lenient")]
    pub tool0: Option<HeaterReport>,
}

/// Actual/target pair for one heater.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeaterReport {
    #[serde(default, deserialize_with = "lenient")]
    pub actual: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub target: Option<f64>,
}

/// Body of `GET /api/job`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub job: Option<JobReport>,
    #[serde(default, deserialize_with = "lenient")]
    pub progress: Option<ProgressReport>,
}

/// `job` object of the job document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobReport {
    #[serde(default, deserialize_with = "lenient")]
    pub file: Option<FileReport>,
}

/// `job.file` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileReport {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub path: Option<String>,
}

/// `progress` object of the job document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProgressReport {
    #[serde(default, deserialize_with = "lenient")]
    pub completion: Option<f64>,
    #[serde(default, rename = "printTimeLeft", deserialize_with = "lenient")]
    pub print_time_left: Option<f64>,
}

impl PrinterStatus {
    /// The reported state text, if present and non-empty.
    #[must_use]
    pub fn state_text(&self) -> Option<&str> {
        self.state
            .as_ref()
            .and_then(|state| state.text.as_deref())
            .filter(|text| !text.is_empty())
    }

    /// Bed heater reading, if reported.
    #[must_use]
    pub fn bed(&self) -> Option<&HeaterReport> {
        self.temperature.as_ref().and_then(|t| t.bed.as_ref())
    }

    /// First tool heater reading, if reported.
    #[must_use]
    pub fn tool0(&self) -> Option<&HeaterReport> {
        self.temperature.as_ref().and_then(|t| t.tool0.as_ref())
    }
}

impl JobStatus {
    fn file(&self) -> Option<&FileReport> {
        self.job.as_ref().and_then(|job| job.file.as_ref())
    }

    /// Display name of the job file, if present and non-empty.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file()
            .and_then(|file| file.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Storage path of the job file, if present and non-empty.
    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        self.file()
            .and_then(|file| file.path.as_deref())
            .filter(|path| !path.is_empty())
    }

    /// Completion percentage, if reported.
    #[must_use]
    pub fn completion(&self) -> Option<f64> {
        self.progress.as_ref().and_then(|p| p.completion)
    }

    /// Estimated seconds left, if reported.
    #[must_use]
    pub fn print_time_left(&self) -> Option<f64> {
        self.progress.as_ref().and_then(|p| p.print_time_left)
    }
}

/// Deserialize any JSON value, keeping it only if it has the expected type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_full_printer_document() {
        let json = r#"{
            "state": {"text": "Printing", "flags": {"printing": true}},
            "temperature": {
                "bed": {"actual": 59.8, "target": 60.0, "offset": 0},
                "tool0": {"actual": 214.6, "target": 215.0, "offset": 0}
            }
        }"#;
        let status: PrinterStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.state_text(), Some("Printing"));
        assert_eq!(status.bed().unwrap().actual, Some(59.8));
        assert_eq!(status.bed().unwrap().target, Some(60.0));
        assert_eq!(status.tool0().unwrap().actual, Some(214.6));
    }

    #[test]
    fn should_parse_full_job_document() {
        let json = r#"{
            "job": {"file": {"name": "model.gcode", "path": "folder/model.gcode", "origin": "local"}},
            "progress": {"completion": 42.7, "printTimeLeft": 3661, "printTime": 120},
            "state": "Printing"
        }"#;
        let status: JobStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.file_name(), Some("model.gcode"));
        assert_eq!(status.file_path(), Some("folder/model.gcode"));
        assert_eq!(status.completion(), Some(42.7));
        assert_eq!(status.print_time_left(), Some(3661.0));
    }

    #[test]
    fn should_parse_empty_documents() {
        let printer: PrinterStatus = serde_json::from_str("{}").unwrap();
        let job: JobStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(printer, PrinterStatus::default());
        assert_eq!(job, JobStatus::default());
    }

    #[test]
    fn should_treat_null_fields_as_absent() {
        let json = r#"{
            "job": {"file": {"name": null, "path": null}},
            "progress": {"completion": null, "printTimeLeft": null}
        }"#;
        let status: JobStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.file_name(), None);
        assert_eq!(status.file_path(), None);
        assert_eq!(status.completion(), None);
        assert_eq!(status.print_time_left(), None);
    }

    #[test]
    fn should_treat_mistyped_fields_as_absent() {
        let json = r#"{
            "state": {"text": 42},
            "temperature": {"bed": "hot", "tool0": {"actual": "210", "target": 215}}
        }"#;
        let status: PrinterStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.state_text(), None);
        assert!(status.bed().is_none());
        assert_eq!(status.tool0().unwrap().actual, None);
        assert_eq!(status.tool0().unwrap().target, Some(215.0));
    }

    #[test]
    fn should_treat_empty_strings_as_absent() {
        let json = r#"{"state": {"text": ""}}"#;
        let status: PrinterStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.state_text(), None);
    }

    #[test]
    fn should_reject_string_document() {
        assert!(serde_json::from_str::<PrinterStatus>(r#""offline""#).is_err());
    }
}
