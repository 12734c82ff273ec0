//! Date parsing for spreadsheet cells.
//!
//! Cells reach us as text: ISO dates from typed date columns, date-times from timestamp
//! columns, day-first dates typed by hand, or bare spreadsheet serial numbers.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Configuration for date format handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatConfig {
    /// Date formats to try, in order
    pub date_formats: Vec<String>,
    /// Date-time formats to try, in order; the time part is discarded
    pub datetime_formats: Vec<String>,
    /// Accept spreadsheet serial day numbers (days since 1899-12-30)
    pub accept_serial_numbers: bool,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%d.%m.%Y".to_string(), // Russian: 15.01.2023
                "%d.%m.%y".to_string(), // Short year: 15.01.23
                "%d/%m/%Y".to_string(), // 15/01/2023
                "%d-%m-%Y".to_string(), // 15-01-2023
                "%Y%m%d".to_string(),   // Compact: 20230115
            ],
            datetime_formats: vec![
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S%.f".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M:%S%.f".to_string(),
                // Timestamp columns with a time zone: 2023-01-15T00:00:00+03:00
                "%Y-%m-%dT%H:%M:%S%:z".to_string(),
                "%Y-%m-%dT%H:%M:%S%.f%:z".to_string(),
                "%Y-%m-%dT%H:%M:%SZ".to_string(),
                "%Y-%m-%dT%H:%M:%S%.fZ".to_string(),
                "%Y-%m-%d %H:%M:%S%:z".to_string(),
                "%d.%m.%Y %H:%M:%S".to_string(),
                "%d.%m.%Y %H:%M".to_string(),
            ],
            accept_serial_numbers: true,
            enable_format_detection: true,
        }
    }
}

/// Serial numbers below this are not plausible dates (before 1900-04-09)
const MIN_SERIAL: f64 = 100.0;
/// Serial numbers above this are not plausible dates (after 2173)
const MAX_SERIAL: f64 = 100_000.0;

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in config.date_formats.iter().filter(|f| year_width_fits(s, f)) {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    for format in config.datetime_formats.iter().filter(|f| year_width_fits(s, f)) {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Some(datetime.date());
        }
    }

    if config.accept_serial_numbers {
        if let Some(date) = parse_serial_date(s) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// `%Y` also accepts one to three digits, so "15.01.85" would read as year 85.
/// A four-digit year format is only tried when the text has a run of four digits.
fn year_width_fits(s: &str, format: &str) -> bool {
    !format.contains("%Y")
        || s
            .split(|c: char| !c.is_ascii_digit())
            .any(|run| run.len() >= 4)
}

/// Convert a spreadsheet serial day number ("45123" or "45123.5") into a date
#[must_use]
pub fn parse_serial_date(s: &str) -> Option<NaiveDate> {
    let serial: f64 = s.parse().ok()?;
    if !(MIN_SERIAL..MAX_SERIAL).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(Days::new(serial.trunc() as u64))
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d");
            } else if parts[2].len() == 4 {
                // Day-first is the local convention
                return Some("%d/%m/%Y");
            }
        }
    }

    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[0].len() == 4 {
            return Some("%Y.%m.%d");
        }
    }

    None
}

/// Age in fractional years between two dates, using 365.25-day years
#[must_use]
pub fn age_in_years(birth: NaiveDate, at: NaiveDate) -> f64 {
    (at - birth).num_days() as f64 / 365.25
}
