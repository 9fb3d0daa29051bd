//! Parsing of free-text elapsed-time expressions.
//!
//! Accepts the grammar `[Nh][ ][Nm]` in any of its partial forms: `"2h 10m"`,
//! `"2h"`, `"45m"`, `"1h59"`, and a bare integer which is read as minutes
//! (`"90"` is an hour and a half). Parsing is case-insensitive and ignores
//! surrounding whitespace.
//!
//! A successful parse yields a [`TimeSpent`] value; from that point on the
//! amount travels through the application as seconds, never as a raw string.
//! The 8-hour per-session cap is enforced by the session resolver, not here.

use crate::libs::errors::TimeError;
use crate::libs::formatter::format_seconds;
use std::fmt;

/// An elapsed amount of work time, as a positive count of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpent {
    pub seconds: i64,
}

impl fmt::Display for TimeSpent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_seconds(self.seconds))
    }
}

/// Parses an elapsed-time expression into a [`TimeSpent`].
///
/// Fails with [`TimeError::InvalidDurationFormat`] when neither an hour nor
/// a minute component can be read, or when the total comes out as zero.
/// A malformed value is never coerced to a default.
pub fn parse(text: &str) -> Result<TimeSpent, TimeError> {
    let invalid = || TimeError::InvalidDurationFormat(text.to_string());
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(invalid());
    }

    let (has_hours, hours, minutes_part) = match normalized.split_once('h') {
        Some((hours, rest)) => {
            let hours: i64 = hours.trim().parse().map_err(|_| invalid())?;
            (true, hours, rest.trim())
        }
        // No hour marker: the whole text is the minute component.
        None => (false, 0, normalized.as_str()),
    };

    let minutes: i64 = if minutes_part.is_empty() {
        0
    } else {
        let digits = minutes_part.strip_suffix('m').unwrap_or(minutes_part);
        digits.parse().map_err(|_| invalid())?
    };

    if hours < 0 || minutes < 0 {
        return Err(invalid());
    }
    // A minute component next to hours is a clock-style remainder, 0-59; a
    // bare minute count such as "90" is unbounded.
    if has_hours && minutes > 59 {
        return Err(invalid());
    }

    let hour_seconds = hours.checked_mul(3600).ok_or_else(invalid)?;
    let minute_seconds = minutes.checked_mul(60).ok_or_else(invalid)?;
    let seconds = hour_seconds.checked_add(minute_seconds).ok_or_else(invalid)?;
    if seconds == 0 {
        return Err(invalid());
    }

    Ok(TimeSpent { seconds })
}
