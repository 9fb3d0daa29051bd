//! Work session resolution.
//!
//! Combines raw duration/clock/date option strings under a fixed precedence
//! policy into one fully-specified [`WorkSession`]: an absolute, local-
//! timezone start instant plus a duration in seconds, validated against the
//! business rules (8 hour cap per worklog, two week logging window).
//!
//! The current time is always an explicit parameter of [`resolve`]; nothing
//! in this module reads the system clock, which keeps the resolution
//! byte-for-byte reproducible in tests.

use crate::libs::clock::{self, ClockTime};
use crate::libs::date::{self, CivilDate};
use crate::libs::duration;
use crate::libs::errors::TimeError;
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDateTime, TimeZone};

/// Upper bound for a single worklog: 8 hours.
pub const MAX_SESSION_SECONDS: i64 = 8 * 3600;

/// Worklogs older than this many days are rejected.
pub const MAX_SESSION_AGE_DAYS: i64 = 14;

/// Raw, still-ambiguous option strings collected by the command layer.
#[derive(Debug, Default, Clone)]
pub struct SessionInput {
    /// Issue number or free-text summary match; resolved to an exact issue
    /// key by the Jira client, not here.
    pub issue: String,
    /// Elapsed time expression, e.g. `"2h 10m"`.
    pub time: Option<String>,
    /// Clock time when work started, e.g. `"10:30"`.
    pub start: Option<String>,
    /// Clock time when work ended, e.g. `"12.45"`.
    pub end: Option<String>,
    /// Calendar date (optionally with time) the work was done on.
    pub date: Option<String>,
    pub comment: Option<String>,
    /// Present when an existing worklog is being updated instead of a new
    /// one created.
    pub worklog_id: Option<u64>,
}

/// A fully resolved work session, ready to submit to the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSession {
    pub issue: String,
    /// Absolute start instant, carrying the local offset in effect at that
    /// instant (daylight-saving aware).
    pub started: DateTime<Local>,
    pub seconds: i64,
    pub comment: Option<String>,
    pub worklog_id: Option<u64>,
}

/// Resolves raw session input into a validated [`WorkSession`].
///
/// Precedence, in order:
/// 1. the target date is `--date` when given, otherwise the date of `now`;
/// 2. the start clock is the date's explicit time-of-day, else `--start`,
///    else the time-of-day of `now`;
/// 3. the duration is `--time` when given (`--end` is then ignored), else
///    derived from the `--start`/`--end` pair computed same-day, else the
///    input is rejected as [`TimeError::MissingTimeSpecification`].
pub fn resolve(input: &SessionInput, now: DateTime<Local>) -> Result<WorkSession, TimeError> {
    let civil = match input.date.as_deref() {
        Some(text) => date::parse(text)?,
        None => CivilDate::date_only(now.date_naive()),
    };

    let start_clock = match civil.time {
        Some(clock) => clock,
        None => match input.start.as_deref() {
            Some(text) => clock::parse(text)?,
            None => ClockTime::from_time(now.time()),
        },
    };

    let seconds = resolve_seconds(input)?;
    let started = to_local_instant(civil, start_clock)?;

    if seconds > MAX_SESSION_SECONDS {
        return Err(TimeError::DurationTooLong(seconds));
    }
    if input.date.is_some() && started > now {
        let stamp = started.format("%Y-%m-%d %H:%M").to_string();
        return Err(TimeError::DateInFuture(stamp));
    }
    if started < now - Duration::days(MAX_SESSION_AGE_DAYS) {
        return Err(TimeError::DateTooOld(started.format("%Y-%m-%d %H:%M").to_string()));
    }

    Ok(WorkSession {
        issue: input.issue.clone(),
        started,
        seconds,
        comment: input.comment.clone(),
        worklog_id: input.worklog_id,
    })
}

/// Ordered duration rules: an explicit `--time` wins outright, a
/// `--start`/`--end` pair is the fallback, anything else is an error.
fn resolve_seconds(input: &SessionInput) -> Result<i64, TimeError> {
    match (input.time.as_deref(), input.start.as_deref(), input.end.as_deref()) {
        (Some(time), _, _) => Ok(duration::parse(time)?.seconds),
        (None, Some(start), Some(end)) => {
            let start = clock::parse(start)?;
            let end = clock::parse(end)?;
            if end <= start {
                return Err(TimeError::InvalidTimeRange { start, end });
            }
            Ok(end.seconds_from_midnight() - start.seconds_from_midnight())
        }
        _ => Err(TimeError::MissingTimeSpecification),
    }
}

/// Attaches the local timezone to a civil date + clock, using the offset in
/// effect at that instant. An ambiguous wall time (DST fold) resolves to the
/// earlier offset; a nonexistent one (DST gap) is rejected.
fn to_local_instant(civil: CivilDate, clock: ClockTime) -> Result<DateTime<Local>, TimeError> {
    let naive = NaiveDateTime::new(civil.date, clock.as_naive_time());
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(TimeError::InvalidDateFormat(naive.to_string())),
    }
}
