//! Typed errors produced by the time parsing and resolution core.
//!
//! Every malformed user input or violated business rule maps to a distinct
//! variant, so the command layer can show a precise message and tests can
//! assert on the exact failure. Parsing errors echo the offending text and
//! the accepted patterns; none of them silently degrade to defaults.

use crate::libs::clock::ClockTime;
use thiserror::Error;

/// Errors raised while turning user-supplied time fragments into a
/// validated work session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    /// The duration text did not match `[Nh][ Nm]` or bare minutes,
    /// or the total was zero.
    #[error("invalid time spent {0:?}: has to be in format '[Nh][ N[m]]' or 'Nm', e.g. '2h', '91m', '4h 37m', '1h59'")]
    InvalidDurationFormat(String),

    /// The clock text did not match `H[:M]` with a `:`, `.`, `,` or `h`
    /// separator, or a field was out of range.
    #[error("invalid time {0:?}: has to be in format '[H[H]][:.h,][M[M]]', e.g. '2h3', '12:03', '3,59'")]
    InvalidTimeFormat(String),

    /// The date text did not match any supported ISO pattern, or named an
    /// impossible calendar date.
    #[error("invalid date {0:?}: has to match one of supported ISO formats: %Y-%m-%d, %Y-%m-%dT%H:%M, %Y-%m-%d %H:%M")]
    InvalidDateFormat(String),

    /// The end clock time was not after the start clock time.
    #[error("end time {end} has to be later than start time {start}")]
    InvalidTimeRange { start: ClockTime, end: ClockTime },

    /// Neither a duration nor a start/end pair was supplied.
    #[error("cannot spend without knowing working time or when work has started: provide valid --time or --start and --end options")]
    MissingTimeSpecification,

    /// The resolved duration exceeds the 8 hour cap for a single worklog.
    #[error("time spent cannot be greater than 8h (1 day) for a single worklog, got {0} seconds")]
    DurationTooLong(i64),

    /// The resolved start instant is older than the two week logging window.
    #[error("worklog date {0} cannot be older than 2 weeks")]
    DateTooOld(String),

    /// The explicitly given date lies in the future.
    #[error("worklog date {0} cannot be in the future")]
    DateInFuture(String),
}
