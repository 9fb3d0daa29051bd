#[cfg(test)]
mod tests {
    use dzira::libs::formatter::{format_clock, format_seconds};
    use chrono::{Local, TimeZone};

    #[test]
    fn test_format_seconds_drops_zero_terms() {
        assert_eq!(format_seconds(7800), "2h 10m");
        assert_eq!(format_seconds(7200), "2h");
        assert_eq!(format_seconds(2700), "45m");
        assert_eq!(format_seconds(60), "1m");
    }

    #[test]
    fn test_format_seconds_zero_is_never_empty() {
        assert_eq!(format_seconds(0), "0m");
        // Sub-minute amounts round down but still render.
        assert_eq!(format_seconds(59), "0m");
    }

    #[test]
    fn test_format_seconds_clamps_negative() {
        assert_eq!(format_seconds(-300), "0m");
    }

    #[test]
    fn test_format_seconds_large_totals() {
        assert_eq!(format_seconds(8 * 3600), "8h");
        assert_eq!(format_seconds(26 * 3600 + 300), "26h 5m");
    }

    #[test]
    fn test_format_clock() {
        let instant = Local.with_ymd_and_hms(2024, 1, 1, 12, 45, 7).unwrap();
        assert_eq!(format_clock(&instant), "12:45:07");
    }
}
