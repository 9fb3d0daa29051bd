//! Display implementation for user-facing messages.
//!
//! All message text lives here, in one place, so wording stays consistent
//! and the rest of the code deals only in typed [`Message`] values.

use super::types::Message;
use std::fmt;

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Configuration
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigMissingKeys(keys) => {
                format!("could not find required config values: {}", keys)
            }

            // Issues
            Message::IssueNotMatched(text) => {
                format!("could not find any issues matching '{}'", text)
            }
            Message::IssueAmbiguous(candidates) => {
                format!("found more than one matching issue:\n{}", candidates)
            }
            Message::IssuesFound(count, date) => {
                format!("Found {} issue{} with work logged on {}", count, plural(*count), date)
            }
            Message::NoIssuesFound => "No issues found".to_string(),
            Message::SprintInfo(info) => info.clone(),

            // Worklogs
            Message::WorklogCreated {
                spent,
                issue,
                worklog_id,
                at,
            } => format!("spent {} in {} [worklog {}] at {}", spent, issue, worklog_id, at),
            Message::WorklogUpdated { issue, worklog_id } => {
                format!("updated worklog {} in {}", worklog_id, issue)
            }
            Message::WorklogsFound(count) => {
                format!("Found {} worklog{} matching author and date", count, plural(*count))
            }
            Message::WorklogUpdateNeedsChanges => {
                "to update a worklog, either time spent or a comment is needed".to_string()
            }

            // API
            Message::JiraRequestFailed(status, detail) => {
                format!("Jira request failed ({}): {}", status, detail)
            }
            Message::JiraAmbiguousBoard(boards) => {
                format!("found more than one board matching the project key:\n{}", boards)
            }
            Message::JiraBoardNotFound(key) => {
                format!("could not find a board for project key '{}'", key)
            }
        };
        write!(f, "{}", text)
    }
}
