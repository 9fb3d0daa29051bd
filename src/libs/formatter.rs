//! Human-readable time formatting used in reports and messages.
//!
//! Durations render as `"<H>h <M>m"`, dropping the hour term when zero and
//! the minute term when zero; a zero duration renders as `"0m"`, never as
//! an empty string. Clock stamps render as `"HH:MM:SS"`.

use chrono::{DateTime, Local};

/// Formats a count of seconds as a human-readable duration.
///
/// # Examples
///
/// ```rust
/// use dzira::libs::formatter::format_seconds;
///
/// assert_eq!(format_seconds(7800), "2h 10m");
/// assert_eq!(format_seconds(7200), "2h");
/// assert_eq!(format_seconds(2700), "45m");
/// assert_eq!(format_seconds(0), "0m");
/// ```
pub fn format_seconds(total: i64) -> String {
    let total = total.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;

    match (hours, minutes) {
        (0, 0) => "0m".to_string(),
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Formats the time-of-day of a local instant as "HH:MM:SS".
pub fn format_clock(instant: &DateTime<Local>) -> String {
    instant.format("%H:%M:%S").to_string()
}
