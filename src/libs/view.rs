use crate::api::jira::JiraIssue;
use crate::libs::formatter::format_seconds;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints sprint issues as a table, most advanced status first.
    pub fn issues(issues: &[JiraIssue]) {
        let mut table = Table::new();

        table.add_row(row!["KEY", "SUMMARY", "STATE", "SPENT", "ESTIMATED"]);
        for issue in issues {
            table.add_row(row![
                issue.key,
                issue.fields.summary,
                issue.fields.status.as_ref().map(|status| status.name.as_str()).unwrap_or(""),
                issue.fields.timespent.map(format_seconds).unwrap_or_default(),
                issue.fields.timeestimate.map(format_seconds).unwrap_or_default()
            ]);
        }
        table.printstd();
    }
}
