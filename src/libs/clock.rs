//! Parsing of free-text time-of-day expressions.
//!
//! A clock time is an hour/minute pair with no date and no timezone. It is
//! only ever an ingredient of a full instant assembled by the session
//! resolver. Accepted separators between hour and minute are `:`, `.`, `,`
//! and `h`; a bare hour such as `"14"` is read as `14:00`.

use crate::libs::errors::TimeError;
use chrono::{NaiveTime, Timelike};
use std::fmt;

/// A time of day: hour 0-23, minute 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Extracts the hour/minute pair from a full time, dropping seconds.
    pub fn from_time(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        // Fields are range-checked at construction, so this cannot fail.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default()
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_from_midnight(&self) -> i64 {
        i64::from(self.hour) * 3600 + i64::from(self.minute) * 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parses a time-of-day expression into a [`ClockTime`].
///
/// Out-of-range hours or minutes fail with [`TimeError::InvalidTimeFormat`],
/// as does anything that is not `H` or `H<sep>M`.
pub fn parse(text: &str) -> Result<ClockTime, TimeError> {
    let invalid = || TimeError::InvalidTimeFormat(text.to_string());
    let normalized: String = text
        .trim()
        .to_lowercase()
        .chars()
        .map(|ch| if matches!(ch, '.' | ',' | 'h') { ':' } else { ch })
        .collect();
    if normalized.is_empty() {
        return Err(invalid());
    }

    let (hour, minute) = match normalized.split_once(':') {
        Some((hour, minute)) => {
            let hour: u32 = hour.parse().map_err(|_| invalid())?;
            let minute: u32 = minute.parse().map_err(|_| invalid())?;
            (hour, minute)
        }
        None => (normalized.parse().map_err(|_| invalid())?, 0),
    };

    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok(ClockTime { hour, minute })
}
