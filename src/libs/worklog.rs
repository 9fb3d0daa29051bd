//! Aggregation of logged work records into a per-issue report.

use chrono::{DateTime, Local};

/// A worklog entry as reported back by the tracker. Read-only input to
/// aggregation; arrives already deserialized and already filtered to the
/// requested user and date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklogRecord {
    pub issue_key: String,
    pub summary: String,
    pub worklog_id: String,
    pub started: DateTime<Local>,
    pub seconds: i64,
    pub comment: Option<String>,
}

/// All worklogs of a single issue, with their total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReport {
    pub key: String,
    pub summary: String,
    pub worklogs: Vec<WorklogRecord>,
    pub total_seconds: i64,
}

/// The whole-run report: issues in order of first appearance, plus the
/// grand total. Built fresh on every aggregation call and never mutated
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub issues: Vec<IssueReport>,
    pub total_seconds: i64,
}

/// Stable-groups records by issue key and sums durations.
///
/// Issues appear in the order their key first occurs in the input, and
/// records keep their input order within an issue. Nothing is filtered or
/// deduplicated: a record present twice is summed twice. An empty input
/// yields an empty report with a zero total.
pub fn aggregate(records: Vec<WorklogRecord>) -> Report {
    let mut report = Report::default();

    for record in records {
        report.total_seconds += record.seconds;
        match report.issues.iter().position(|issue| issue.key == record.issue_key) {
            Some(index) => {
                let issue = &mut report.issues[index];
                issue.total_seconds += record.seconds;
                issue.worklogs.push(record);
            }
            None => report.issues.push(IssueReport {
                key: record.issue_key.clone(),
                summary: record.summary.clone(),
                total_seconds: record.seconds,
                worklogs: vec![record],
            }),
        }
    }

    report
}
