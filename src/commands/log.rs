//! Logs time spent on an issue, or updates an existing worklog.
//!
//! ISSUE is either an issue number (expanded with the configured project
//! key) or a text matched against the summaries of the current sprint's
//! issues. Time spent comes from `--time`, or is calculated from `--start`
//! and `--end`; a single worklog cannot exceed 8 hours, and `--date` cannot
//! be older than two weeks.

use crate::api::jira::Jira;
use crate::libs::session::{self, SessionInput};
use crate::libs::{config::Config, formatter::format_seconds, messages::Message};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Issue number or text matching an issue summary
    issue: String,

    /// Time to spend, e.g. '2h 10m', '45m', '90'
    #[arg(short, long)]
    time: Option<String>,

    /// Time when the work started, e.g. '10:30', '12.45'
    #[arg(short, long)]
    start: Option<String>,

    /// Time when the work ended, e.g. '14:50', '16.10'
    #[arg(short, long)]
    end: Option<String>,

    /// Date when the work was done in ISO format, e.g. '2023-11-24',
    /// '2023-11-24 8:19'; defaults to today
    #[arg(short, long)]
    date: Option<String>,

    /// Comment added to logged time
    #[arg(short, long)]
    comment: Option<String>,

    /// Id of the worklog to be updated instead of creating a new one
    #[arg(short, long, value_name = "WORKLOG_ID")]
    worklog: Option<u64>,
}

pub async fn cmd(args: LogArgs) -> Result<()> {
    let config = Config::read()?;
    let jira = Jira::new(config.jira);
    let issue = establish_issue(&jira, &args.issue).await?;

    // A worklog update needs either time or a comment; a comment alone is a
    // valid update and skips time resolution entirely.
    if let Some(worklog_id) = args.worklog {
        if args.time.is_none() && args.start.is_none() {
            let Some(comment) = &args.comment else {
                msg_bail_anyhow!(Message::WorklogUpdateNeedsChanges);
            };
            jira.update_worklog(&issue, worklog_id, None, Some(comment.as_str()), None).await?;
            msg_success!(Message::WorklogUpdated {
                issue,
                worklog_id: worklog_id.to_string(),
            });
            return Ok(());
        }
    }

    let input = SessionInput {
        issue: issue.clone(),
        time: args.time,
        start: args.start,
        end: args.end,
        date: args.date,
        comment: args.comment,
        worklog_id: args.worklog,
    };
    let session = session::resolve(&input, Local::now())?;

    match session.worklog_id {
        Some(worklog_id) => {
            jira.update_worklog(
                &issue,
                worklog_id,
                Some(session.seconds),
                session.comment.as_deref(),
                Some(&session.started),
            )
            .await?;
            msg_success!(Message::WorklogUpdated {
                issue,
                worklog_id: worklog_id.to_string(),
            });
        }
        None => {
            let worklog = jira.add_worklog(&issue, &session).await?;
            msg_success!(Message::WorklogCreated {
                spent: format_seconds(session.seconds),
                issue,
                worklog_id: worklog.id,
                at: Local::now().format("%H:%M:%S").to_string(),
            });
        }
    }

    Ok(())
}

/// Resolves the ISSUE argument to an exact issue key: a number is expanded
/// with the project key, anything else is matched against the summaries of
/// the current sprint's issues.
async fn establish_issue(jira: &Jira, issue: &str) -> Result<String> {
    if issue.chars().all(|ch| ch.is_ascii_digit()) && !issue.is_empty() {
        return Ok(format!("{}-{}", jira.project_key(), issue));
    }

    let needle = issue.to_lowercase();
    let candidates: Vec<_> = jira
        .get_current_sprint_issues()
        .await?
        .into_iter()
        .filter(|candidate| candidate.fields.summary.to_lowercase().contains(&needle))
        .collect();

    match candidates.len() {
        0 => msg_bail_anyhow!(Message::IssueNotMatched(issue.to_string())),
        1 => Ok(candidates[0].key.clone()),
        _ => {
            let listing = candidates
                .iter()
                .map(|candidate| format!(" * {}: {}", candidate.key, candidate.fields.summary))
                .collect::<Vec<_>>()
                .join("\n");
            msg_bail_anyhow!(Message::IssueAmbiguous(listing))
        }
    }
}
