//! Lists issues from the current sprint.
//!
//! 'Current sprint' is the most recent sprint matching the requested state;
//! use `--sprint-id` for an unambiguous result when several are active.

use crate::api::jira::{Jira, JiraIssue, JiraSprint};
use crate::libs::render::ReportFormat;
use crate::libs::view::View;
use crate::libs::{config::Config, formatter::format_seconds, messages::Message};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono::DateTime;
use clap::Args;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum SprintState {
    #[default]
    Active,
    Closed,
    Future,
}

impl SprintState {
    fn as_str(&self) -> &'static str {
        match self {
            SprintState::Active => "active",
            SprintState::Closed => "closed",
            SprintState::Future => "future",
        }
    }
}

#[derive(Debug, Args)]
pub struct LsArgs {
    /// Sprint state used for filtering
    #[arg(short, long, value_enum, default_value = "active")]
    state: SprintState,

    /// Sprint id to get an unambiguous result; has precedence over --state
    #[arg(short = 'i', long)]
    sprint_id: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: ReportFormat,
}

pub async fn cmd(args: LsArgs) -> Result<()> {
    let config = Config::read()?;
    let jira = Jira::new(config.jira);

    let sprint = match args.sprint_id {
        Some(sprint_id) => Some(jira.get_sprint(sprint_id).await?),
        None => {
            let board = jira.get_board().await?;
            let mut sprints = jira.get_sprints(board.id, args.state.as_str()).await?;
            sprints.pop()
        }
    };

    let Some(sprint) = sprint else {
        msg_warning!(Message::NoIssuesFound);
        return Ok(());
    };

    let mut issues = jira.get_sprint_issues(sprint.id).await?;
    issues.sort_by(|a, b| {
        let status = |issue: &JiraIssue| {
            issue
                .fields
                .status
                .as_ref()
                .map(|status| status.name.clone())
                .unwrap_or_default()
        };
        status(b).cmp(&status(a))
    });

    match args.format {
        ReportFormat::Table => {
            msg_print!(Message::SprintInfo(sprint_info(&sprint)));
            View::issues(&issues);
        }
        ReportFormat::Csv => print!("{}", issues_csv(&sprint, &issues)?),
        ReportFormat::Json => println!("{}", issues_json(&sprint, &issues)?),
    }

    Ok(())
}

/// One-line sprint summary, e.g. `Iteration 42 • id: 42 • Mon, Jan 01 -> Sun, Jan 14`.
fn sprint_info(sprint: &JiraSprint) -> String {
    let format_date = |value: &Option<String>| {
        value
            .as_deref()
            .and_then(|text| DateTime::parse_from_rfc3339(text).ok())
            .map(|date| date.format("%a, %b %d").to_string())
            .unwrap_or_else(|| "?".to_string())
    };
    format!(
        "{} • id: {} • {} -> {}",
        sprint.name,
        sprint.id,
        format_date(&sprint.start_date),
        format_date(&sprint.end_date)
    )
}

fn issue_row(issue: &JiraIssue) -> (String, String, String, String, String) {
    (
        issue.key.clone(),
        issue.fields.summary.clone(),
        issue
            .fields
            .status
            .as_ref()
            .map(|status| status.name.clone())
            .unwrap_or_default(),
        issue.fields.timespent.map(format_seconds).unwrap_or_default(),
        issue.fields.timeestimate.map(format_seconds).unwrap_or_default(),
    )
}

fn issues_csv(sprint: &JiraSprint, issues: &[JiraIssue]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["sprint_id", "key", "summary", "state", "spent", "estimated"])?;
    for issue in issues {
        let (key, summary, state, spent, estimated) = issue_row(issue);
        writer.write_record([sprint.id.to_string(), key, summary, state, spent, estimated])?;
    }
    writer.flush()?;
    Ok(String::from_utf8(writer.into_inner()?)?)
}

fn issues_json(sprint: &JiraSprint, issues: &[JiraIssue]) -> Result<String> {
    let issues = issues
        .iter()
        .map(|issue| {
            let (key, summary, state, spent, estimated) = issue_row(issue);
            serde_json::json!({
                "key": key,
                "summary": summary,
                "state": state,
                "spent": spent,
                "estimated": estimated,
            })
        })
        .collect::<Vec<_>>();

    Ok(serde_json::to_string_pretty(&serde_json::json!({
        "sprint": {
            "name": sprint.name,
            "id": sprint.id,
            "start": sprint.start_date,
            "end": sprint.end_date,
        },
        "issues": issues,
    }))?)
}
