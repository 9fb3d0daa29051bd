#[cfg(test)]
mod tests {
    use dzira::libs::clock::{self, ClockTime};
    use dzira::libs::date;
    use dzira::libs::duration;
    use dzira::libs::errors::TimeError;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_duration_hours_and_minutes() {
        assert_eq!(duration::parse("2h 10m").unwrap().seconds, 7800);
        assert_eq!(duration::parse("4h 37m").unwrap().seconds, 16620);
        assert_eq!(duration::parse("1h59").unwrap().seconds, 7140);
        assert_eq!(duration::parse("2h10m").unwrap().seconds, 7800);
    }

    #[test]
    fn test_parse_duration_single_components() {
        assert_eq!(duration::parse("2h").unwrap().seconds, 7200);
        assert_eq!(duration::parse("45m").unwrap().seconds, 2700);
        assert_eq!(duration::parse("91m").unwrap().seconds, 5460);
    }

    #[test]
    fn test_parse_duration_bare_integer_is_minutes() {
        assert_eq!(duration::parse("90").unwrap().seconds, 5400);
    }

    #[test]
    fn test_parse_duration_is_case_and_whitespace_insensitive() {
        assert_eq!(duration::parse("  2H 10M  ").unwrap().seconds, 7800);
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        for text in ["", "abc", "h30", "10m5", "m", "2x 10m"] {
            assert!(
                matches!(duration::parse(text), Err(TimeError::InvalidDurationFormat(_))),
                "expected failure for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_duration_rejects_zero_and_negative() {
        assert!(matches!(duration::parse("0m"), Err(TimeError::InvalidDurationFormat(_))));
        assert!(matches!(duration::parse("0h 0m"), Err(TimeError::InvalidDurationFormat(_))));
        assert!(matches!(duration::parse("-5m"), Err(TimeError::InvalidDurationFormat(_))));
    }

    #[test]
    fn test_parse_duration_rejects_overflowing_components() {
        // A component large enough to overflow the seconds arithmetic is an
        // invalid amount, not a panic and not a wrapped negative.
        for text in ["3000000000000000h", "9223372036854775807m", "9223372036854775807h 59m"] {
            assert!(
                matches!(duration::parse(text), Err(TimeError::InvalidDurationFormat(_))),
                "expected failure for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_duration_caps_minutes_next_to_hours() {
        // With an hour component the minutes are a 0-59 remainder; only a
        // bare value like "90" may exceed that.
        assert!(matches!(duration::parse("1h 75m"), Err(TimeError::InvalidDurationFormat(_))));
        assert!(matches!(duration::parse("1h 60"), Err(TimeError::InvalidDurationFormat(_))));
    }

    #[test]
    fn test_parse_duration_rejects_space_before_minute_suffix() {
        assert!(matches!(duration::parse("10 m"), Err(TimeError::InvalidDurationFormat(_))));
        assert!(matches!(duration::parse("2h 10 m"), Err(TimeError::InvalidDurationFormat(_))));
    }

    #[test]
    fn test_parse_duration_error_echoes_input() {
        let err = duration::parse("bogus").unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_parse_clock_separators() {
        assert_eq!(clock::parse("10:30").unwrap(), ClockTime { hour: 10, minute: 30 });
        assert_eq!(clock::parse("12.45").unwrap(), ClockTime { hour: 12, minute: 45 });
        assert_eq!(clock::parse("3,59").unwrap(), ClockTime { hour: 3, minute: 59 });
        assert_eq!(clock::parse("2h3").unwrap(), ClockTime { hour: 2, minute: 3 });
    }

    #[test]
    fn test_parse_clock_bare_hour() {
        assert_eq!(clock::parse("14").unwrap(), ClockTime { hour: 14, minute: 0 });
        assert_eq!(clock::parse("0").unwrap(), ClockTime { hour: 0, minute: 0 });
    }

    #[test]
    fn test_parse_clock_rejects_out_of_range() {
        assert!(matches!(clock::parse("24:00"), Err(TimeError::InvalidTimeFormat(_))));
        assert!(matches!(clock::parse("10:75"), Err(TimeError::InvalidTimeFormat(_))));
    }

    #[test]
    fn test_parse_clock_rejects_garbage() {
        for text in ["", "abc", "10:", ":30", "1:2:3"] {
            assert!(
                matches!(clock::parse(text), Err(TimeError::InvalidTimeFormat(_))),
                "expected failure for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_date_only_has_no_time() {
        let civil = date::parse("2023-11-24").unwrap();
        assert_eq!(civil.date, NaiveDate::from_ymd_opt(2023, 11, 24).unwrap());
        assert!(civil.time.is_none());
    }

    #[test]
    fn test_parse_date_with_time() {
        let civil = date::parse("2023-11-24 8:19").unwrap();
        assert_eq!(civil.date, NaiveDate::from_ymd_opt(2023, 11, 24).unwrap());
        assert_eq!(civil.time, Some(ClockTime { hour: 8, minute: 19 }));

        let civil = date::parse("2023-11-24T08:19").unwrap();
        assert_eq!(civil.time, Some(ClockTime { hour: 8, minute: 19 }));

        let civil = date::parse("2023-11-24T08:19:30").unwrap();
        assert_eq!(civil.time, Some(ClockTime { hour: 8, minute: 19 }));
    }

    #[test]
    fn test_parse_date_rejects_invalid_calendar_dates() {
        assert!(matches!(date::parse("2023-13-01"), Err(TimeError::InvalidDateFormat(_))));
        assert!(matches!(date::parse("2023-02-30"), Err(TimeError::InvalidDateFormat(_))));
    }

    #[test]
    fn test_parse_date_rejects_unknown_patterns() {
        for text in ["24-11-2023", "2023/11/24", "yesterday", ""] {
            assert!(
                matches!(date::parse(text), Err(TimeError::InvalidDateFormat(_))),
                "expected failure for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_duration_round_trips_through_human_format() {
        for text in ["2h 10m", "8h", "45m", "1h 1m"] {
            let spent = duration::parse(text).unwrap();
            let rendered = spent.to_string();
            assert_eq!(duration::parse(&rendered).unwrap().seconds, spent.seconds);
        }
    }
}
