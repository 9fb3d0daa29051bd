#[cfg(test)]
mod tests {
    use dzira::libs::render::{render, ReportFormat};
    use dzira::libs::worklog::{aggregate, Report, WorklogRecord};
    use chrono::{Local, TimeZone};

    fn sample_report() -> Report {
        let record = |issue: &str, id: &str, minute: u32, seconds: i64, comment: Option<&str>| {
            WorklogRecord {
                issue_key: issue.to_string(),
                summary: format!("Summary of {}", issue),
                worklog_id: id.to_string(),
                started: Local.with_ymd_and_hms(2024, 1, 1, 12, minute, 0).unwrap(),
                seconds,
                comment: comment.map(String::from),
            }
        };
        aggregate(vec![
            record("XY-1", "1", 0, 1800, Some("implementing foo in bar")),
            record("XY-1", "2", 45, 2700, None),
            record("XY-2", "3", 50, 600, Some("review")),
        ])
    }

    #[test]
    fn test_csv_header_and_row_count() {
        let csv = render(&sample_report(), ReportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "issue,summary,worklog,started,spent,spent_seconds,comment");
        // One row per worklog regardless of issue count.
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "XY-1,Summary of XY-1,1,12:00:00,30m,1800,implementing foo in bar");
        assert_eq!(lines[3], "XY-2,Summary of XY-2,3,12:50:00,10m,600,review");
    }

    #[test]
    fn test_csv_header_is_emitted_for_empty_report() {
        let csv = render(&Report::default(), ReportFormat::Csv).unwrap();
        assert_eq!(csv.trim_end(), "issue,summary,worklog,started,spent,spent_seconds,comment");
    }

    #[test]
    fn test_json_structure_and_totals() {
        let json = render(&sample_report(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_seconds"], 5100);
        assert_eq!(value["total_time"], "1h 25m");

        let issues = value["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0]["key"], "XY-1");
        assert_eq!(issues[0]["issue_total_spent_seconds"], 4500);
        assert_eq!(issues[0]["issue_total_time"], "1h 15m");

        let worklogs = issues[0]["worklogs"].as_array().unwrap();
        assert_eq!(worklogs.len(), 2);
        assert_eq!(worklogs[0]["id"], "1");
        assert_eq!(worklogs[0]["started"], "12:00:00");
        assert_eq!(worklogs[0]["spent"], "30m");
        assert_eq!(worklogs[0]["spent_seconds"], 1800);
        assert_eq!(worklogs[0]["comment"], "implementing foo in bar");
        assert_eq!(worklogs[1]["comment"], serde_json::Value::Null);
    }

    #[test]
    fn test_table_contains_issues_and_grand_total() {
        let table = render(&sample_report(), ReportFormat::Table).unwrap();

        assert!(table.contains("[XY-1] Summary of XY-1 (1h 15m)"));
        assert!(table.contains("[XY-2] Summary of XY-2 (10m)"));
        assert!(table.contains("12:45:00"));
        assert!(table.contains("Total spent time: 1h 25m"));
    }

    #[test]
    fn test_table_for_empty_report_does_not_error() {
        let table = render(&Report::default(), ReportFormat::Table).unwrap();
        assert!(table.contains("No work logged"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let report = sample_report();
        for format in [ReportFormat::Table, ReportFormat::Csv, ReportFormat::Json] {
            assert_eq!(render(&report, format).unwrap(), render(&report, format).unwrap());
        }
    }
}
