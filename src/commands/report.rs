//! Shows work logged for today or a given date.
//!
//! Fetches the issues of the configured project with work logged on the
//! date, keeps the worklogs authored by the current user within that day,
//! aggregates them per issue, and renders the result in the requested
//! format.

use crate::api::jira::Jira;
use crate::libs::render::{self, ReportFormat};
use crate::libs::worklog::{self, WorklogRecord};
use crate::libs::{config::Config, messages::Message};
use crate::msg_info;
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate, TimeZone};
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Date to show report for (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// How to display the report
    #[arg(short, long, value_enum, default_value = "table")]
    format: ReportFormat,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let jira = Jira::new(config.jira);

    let user = jira.myself().await?;
    let user_email = user.email_address.unwrap_or_default();

    let issues = jira.get_issues_with_worklogs_on(args.date).await?;
    let report_date = args.date.unwrap_or_else(|| Local::now().date_naive());
    msg_info!(Message::IssuesFound(issues.len(), report_date.format("%a, %b %d").to_string()));

    // Tracker results are scoped by worklogDate for the whole project, so
    // narrow each issue's worklogs to this author and this day.
    let day_start = Local
        .from_local_datetime(&report_date.and_hms_opt(0, 0, 0).unwrap_or_default())
        .earliest();
    let mut records: Vec<WorklogRecord> = Vec::new();
    for issue in &issues {
        for worklog in jira.get_issue_worklogs(issue).await? {
            let Ok(started) = worklog.started_local() else {
                continue;
            };
            let same_day = day_start
                .map(|start| started >= start && started < start + Duration::days(1))
                .unwrap_or(false);
            let same_author = worklog
                .author
                .as_ref()
                .and_then(|author| author.email_address.as_deref())
                .map(|email| email == user_email)
                .unwrap_or(false);
            if same_day && same_author {
                records.push(WorklogRecord {
                    issue_key: issue.key.clone(),
                    summary: issue.fields.summary.clone(),
                    worklog_id: worklog.id.clone(),
                    started,
                    seconds: worklog.time_spent_seconds,
                    comment: worklog.comment.clone(),
                });
            }
        }
    }
    msg_info!(Message::WorklogsFound(records.len()));

    let report = worklog::aggregate(records);
    print!("{}", render::render(&report, args.format)?);
    Ok(())
}
