//! Parsing of free-text calendar-date expressions.
//!
//! Patterns are tried in order, first match wins: `%Y-%m-%d`,
//! `%Y-%m-%dT%H:%M[:%S]`, `%Y-%m-%d %H:%M[:%S]`. Single-digit hours are
//! accepted, so `"2023-11-24 8:19"` parses. A date-only match produces a
//! [`CivilDate`] without a time component; whether the time-of-day comes
//! from a `--start` option or from the current clock is decided later by
//! the session resolver, which branches on that distinction.

use crate::libs::clock::ClockTime;
use crate::libs::errors::TimeError;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Date+time patterns accepted after the date-only pattern has failed.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A calendar date, optionally paired with an explicit time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDate {
    pub date: NaiveDate,
    pub time: Option<ClockTime>,
}

impl CivilDate {
    pub fn date_only(date: NaiveDate) -> Self {
        Self { date, time: None }
    }
}

/// Parses a calendar-date(+time) expression into a [`CivilDate`].
///
/// Fails with [`TimeError::InvalidDateFormat`] when no pattern matches or
/// the date is not a real calendar date (e.g. month 13).
pub fn parse(text: &str) -> Result<CivilDate, TimeError> {
    let trimmed = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(CivilDate::date_only(date));
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(CivilDate {
                date: datetime.date(),
                time: Some(ClockTime {
                    hour: datetime.hour(),
                    minute: datetime.minute(),
                }),
            });
        }
    }

    Err(TimeError::InvalidDateFormat(text.to_string()))
}
