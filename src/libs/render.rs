//! Report rendering into table, CSV, and JSON encodings.
//!
//! All three encodings are derived purely from a [`Report`]; the renderer
//! never talks to the tracker. The CSV header and the JSON key names are a
//! user-facing contract consumed by external scripts, so their exact
//! spelling and order are load-bearing:
//!
//! ```text
//! issue,summary,worklog,started,spent,spent_seconds,comment
//! ```
//!
//! ```json
//! {
//!   "issues": [
//!     {
//!       "key": "XY-1",
//!       "summary": "Foo bar",
//!       "issue_total_time": "1h 15m",
//!       "issue_total_spent_seconds": 4500,
//!       "worklogs": [
//!         {
//!           "id": "1",
//!           "started": "12:45:00",
//!           "spent": "1h 15m",
//!           "spent_seconds": 4500,
//!           "comment": "implementing foo in bar"
//!         }
//!       ]
//!     }
//!   ],
//!   "total_time": "1h 15m",
//!   "total_seconds": 4500
//! }
//! ```

use crate::libs::formatter::{format_clock, format_seconds};
use crate::libs::worklog::Report;
use anyhow::Result;
use prettytable::{row, Table};
use serde::Serialize;

/// Output encodings supported by the `report` command.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable grid: one table per issue plus a grand-total line.
    #[default]
    Table,
    /// Flat row-per-worklog encoding with a stable header row.
    Csv,
    /// Nested per-issue structure with totals.
    Json,
}

/// CSV header row, emitted even for an empty report.
const CSV_HEADERS: [&str; 7] = [
    "issue", "summary", "worklog", "started", "spent", "spent_seconds", "comment",
];

#[derive(Serialize)]
struct JsonReport {
    issues: Vec<JsonIssue>,
    total_time: String,
    total_seconds: i64,
}

#[derive(Serialize)]
struct JsonIssue {
    key: String,
    summary: String,
    issue_total_time: String,
    issue_total_spent_seconds: i64,
    worklogs: Vec<JsonWorklog>,
}

#[derive(Serialize)]
struct JsonWorklog {
    id: String,
    started: String,
    spent: String,
    spent_seconds: i64,
    comment: Option<String>,
}

/// Renders an aggregated report in the requested format.
pub fn render(report: &Report, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(report)),
        ReportFormat::Csv => render_csv(report),
        ReportFormat::Json => render_json(report),
    }
}

fn render_table(report: &Report) -> String {
    if report.issues.is_empty() {
        return "No work logged on given date\n".to_string();
    }

    let mut out = String::new();
    for issue in &report.issues {
        out.push('\n');
        out.push_str(&format!(
            "[{}] {} ({})\n",
            issue.key,
            issue.summary,
            format_seconds(issue.total_seconds)
        ));

        let mut table = Table::new();
        for worklog in &issue.worklogs {
            table.add_row(row![
                format!("[{}]", worklog.worklog_id),
                format_clock(&worklog.started),
                format_seconds(worklog.seconds),
                worklog.comment.clone().unwrap_or_default()
            ]);
        }
        out.push_str(&table.to_string());
    }

    out.push_str(&format!("\nTotal spent time: {}\n", format_seconds(report.total_seconds)));
    out
}

fn render_csv(report: &Report) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(CSV_HEADERS)?;

    for issue in &report.issues {
        for worklog in &issue.worklogs {
            writer.write_record([
                issue.key.as_str(),
                issue.summary.as_str(),
                worklog.worklog_id.as_str(),
                &format_clock(&worklog.started),
                &format_seconds(worklog.seconds),
                &worklog.seconds.to_string(),
                worklog.comment.as_deref().unwrap_or_default(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(String::from_utf8(writer.into_inner()?)?)
}

fn render_json(report: &Report) -> Result<String> {
    let issues = report
        .issues
        .iter()
        .map(|issue| JsonIssue {
            key: issue.key.clone(),
            summary: issue.summary.clone(),
            issue_total_time: format_seconds(issue.total_seconds),
            issue_total_spent_seconds: issue.total_seconds,
            worklogs: issue
                .worklogs
                .iter()
                .map(|worklog| JsonWorklog {
                    id: worklog.worklog_id.clone(),
                    started: format_clock(&worklog.started),
                    spent: format_seconds(worklog.seconds),
                    spent_seconds: worklog.seconds,
                    comment: worklog.comment.clone(),
                })
                .collect(),
        })
        .collect();

    let json = JsonReport {
        issues,
        total_time: format_seconds(report.total_seconds),
        total_seconds: report.total_seconds,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
