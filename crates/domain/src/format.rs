//! Display formatting for durations, progress and temperatures.

/// Placeholder shown when a value is not available.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a number of seconds as `HH:MM:SS`.
///
/// Each field is zero-padded to two digits; hours are not capped, so
/// `360000` seconds formats as `100:00:00`.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format a completion percentage rounded to the nearest whole number.
///
/// Absent, zero, negative and non-finite values all render as `N/A`: a job
/// that has not started has nothing to report.
#[must_use]
pub fn format_progress(completion: Option<f64>) -> String {
    match completion {
        Some(value) if value.is_finite() && value > 0.0 => format!("{:.0}%", value.round()),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Format a remaining print time, `N/A` when absent or zero.
#[must_use]
pub fn format_time_left(seconds: Option<u64>) -> String {
    match seconds {
        Some(secs) if secs > 0 => format_duration(secs),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Format a temperature rounded to the nearest whole degree.
#[must_use]
pub fn format_temperature(celsius: Option<f64>) -> String {
    match celsius {
        // `+ 0.0` turns a rounded `-0.0` into `0.0`
        Some(value) if value.is_finite() => format!("{:.0}", value.round() + 0.0),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_zero_seconds() {
        assert_eq!(format_duration(0), "00:00:00");
    }

    #[test]
    fn should_format_minutes_and_seconds() {
        assert_eq!(format_duration(65), "00:01:05");
    }

    #[test]
    fn should_format_hours_minutes_seconds() {
        assert_eq!(format_duration(3661), "01:01:01");
    }

    #[test]
    fn should_not_cap_hours_at_two_digits() {
        assert_eq!(format_duration(360_000), "100:00:00");
    }

    #[test]
    fn should_round_progress_to_nearest_percent() {
        assert_eq!(format_progress(Some(42.7)), "43%");
        assert_eq!(format_progress(Some(42.2)), "42%");
        assert_eq!(format_progress(Some(99.5)), "100%");
    }

    #[test]
    fn should_report_missing_progress_as_not_available() {
        assert_eq!(format_progress(None), "N/A");
        assert_eq!(format_progress(Some(0.0)), "N/A");
        assert_eq!(format_progress(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn should_format_time_left() {
        assert_eq!(format_time_left(Some(3661)), "01:01:01");
        assert_eq!(format_time_left(Some(0)), "N/A");
        assert_eq!(format_time_left(None), "N/A");
    }

    #[test]
    fn should_round_temperature() {
        assert_eq!(format_temperature(Some(214.6)), "215");
        assert_eq!(format_temperature(Some(59.4)), "59");
        assert_eq!(format_temperature(Some(0.0)), "0");
    }

    #[test]
    fn should_not_render_negative_zero_temperature() {
        assert_eq!(format_temperature(Some(-0.3)), "0");
    }

    #[test]
    fn should_report_missing_temperature_as_not_available() {
        assert_eq!(format_temperature(None), "N/A");
        assert_eq!(format_temperature(Some(f64::INFINITY)), "N/A");
    }
}
