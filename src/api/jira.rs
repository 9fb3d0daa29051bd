//! Jira REST client.
//!
//! Thin wrapper over the Jira Cloud REST API using basic auth with an email
//! and API token. Covers the handful of endpoints the commands need: board
//! and sprint lookup, issue search by JQL, and worklog create/read/update.
//! Error responses are unwrapped into their `errorMessages` when Jira
//! supplies them.

use crate::libs::messages::Message;
use crate::libs::session::WorkSession;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

const BOARD_URL: &str = "rest/agile/1.0/board";
const SPRINT_URL: &str = "rest/agile/1.0/sprint";
const SEARCH_URL: &str = "rest/api/2/search";
const ISSUE_URL: &str = "rest/api/2/issue";
const MYSELF_URL: &str = "rest/api/2/myself";

/// Timestamp format Jira expects for worklog `started` fields.
const JIRA_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Jira embeds at most this many worklogs inside a search result; issues
/// with more require a dedicated worklog request.
const EMBEDDED_WORKLOG_LIMIT: usize = 20;

/// Fields requested when searching sprint issues.
const SPRINT_ISSUE_FIELDS: &str = "status,summary,timespent,timeestimate";

/// Connection settings for a Jira instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Host name of the Jira instance, with or without scheme.
    pub server: String,
    pub email: String,
    pub token: String,
    pub project_key: String,
}

#[derive(Debug, Deserialize)]
pub struct JiraBoard {
    pub id: u64,
    pub name: String,
    pub location: Option<JiraBoardLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraBoardLocation {
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraSprint {
    pub id: u64,
    pub name: String,
    pub state: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JiraIssue {
    pub id: String,
    pub key: String,
    pub fields: JiraIssueFields,
}

#[derive(Debug, Deserialize)]
pub struct JiraIssueFields {
    pub summary: String,
    pub status: Option<JiraStatus>,
    pub timespent: Option<i64>,
    pub timeestimate: Option<i64>,
    pub worklog: Option<JiraWorklogPage>,
}

#[derive(Debug, Deserialize)]
pub struct JiraStatus {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct JiraWorklogPage {
    pub total: usize,
    pub worklogs: Vec<JiraWorklog>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorklog {
    pub id: String,
    pub author: Option<JiraAuthor>,
    pub started: String,
    pub time_spent: Option<String>,
    pub time_spent_seconds: i64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraAuthor {
    pub email_address: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    pub email_address: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PagedValues<T> {
    values: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    issues: Vec<JiraIssue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraErrorBody {
    #[serde(default)]
    error_messages: Vec<String>,
}

impl JiraWorklog {
    /// The worklog's start instant, normalized to the local timezone.
    pub fn started_local(&self) -> Result<DateTime<Local>> {
        let parsed = DateTime::parse_from_str(&self.started, JIRA_DATETIME_FORMAT)?;
        Ok(parsed.with_timezone(&Local))
    }
}

/// Jira API client.
#[derive(Debug)]
pub struct Jira {
    client: Client,
    config: JiraConfig,
    base_url: String,
}

impl Jira {
    pub fn new(config: JiraConfig) -> Self {
        let server = config.server.trim_end_matches('/');
        let base_url = if server.starts_with("http://") || server.starts_with("https://") {
            server.to_string()
        } else {
            format!("https://{}", server)
        };
        Self {
            client: Client::new(),
            config,
            base_url,
        }
    }

    pub fn project_key(&self) -> &str {
        &self.config.project_key
    }

    /// The authenticated user, used to filter worklogs by author.
    pub async fn myself(&self) -> Result<JiraUser> {
        self.get(format!("{}/{}", self.base_url, MYSELF_URL), &[]).await
    }

    /// The board belonging to the configured project key. Fails when the
    /// key maps to more than one board.
    pub async fn get_board(&self) -> Result<JiraBoard> {
        let url = format!("{}/{}", self.base_url, BOARD_URL);
        let boards: PagedValues<JiraBoard> = self
            .get(url, &[("projectKeyOrId", self.config.project_key.clone())])
            .await?;

        let mut boards = boards.values;
        if boards.len() > 1 {
            let names = boards
                .iter()
                .map(|board| {
                    board
                        .location
                        .as_ref()
                        .map(|location| location.display_name.clone())
                        .unwrap_or_else(|| board.name.clone())
                })
                .collect::<Vec<_>>()
                .join(", ");
            msg_bail_anyhow!(Message::JiraAmbiguousBoard(names));
        }
        match boards.pop() {
            Some(board) => Ok(board),
            None => msg_bail_anyhow!(Message::JiraBoardNotFound(self.config.project_key.clone())),
        }
    }

    pub async fn get_sprints(&self, board_id: u64, state: &str) -> Result<Vec<JiraSprint>> {
        let url = format!("{}/{}/{}/sprint", self.base_url, BOARD_URL, board_id);
        let sprints: PagedValues<JiraSprint> =
            self.get(url, &[("state", state.to_string())]).await?;
        Ok(sprints.values)
    }

    pub async fn get_sprint(&self, sprint_id: u64) -> Result<JiraSprint> {
        self.get(format!("{}/{}/{}", self.base_url, SPRINT_URL, sprint_id), &[]).await
    }

    pub async fn search_issues(&self, jql: &str, fields: &str) -> Result<Vec<JiraIssue>> {
        debug!(jql, fields, "searching issues");
        let url = format!("{}/{}", self.base_url, SEARCH_URL);
        let results: SearchResults = self
            .get(url, &[("jql", jql.to_string()), ("fields", fields.to_string())])
            .await?;
        Ok(results.issues)
    }

    pub async fn get_sprint_issues(&self, sprint_id: u64) -> Result<Vec<JiraIssue>> {
        self.search_issues(&format!("sprint = {}", sprint_id), SPRINT_ISSUE_FIELDS).await
    }

    /// Issues of the current (open) sprint of the configured project.
    pub async fn get_current_sprint_issues(&self) -> Result<Vec<JiraIssue>> {
        let jql = format!("project = '{}' AND sprint in openSprints()", self.config.project_key);
        self.search_issues(&jql, SPRINT_ISSUE_FIELDS).await
    }

    /// Issues of the configured project with work logged on the given date
    /// (or today when `date` is `None`), with their worklogs embedded.
    pub async fn get_issues_with_worklogs_on(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<JiraIssue>> {
        let date_query = match date {
            Some(date) => format!("worklogDate = {}", date.format("%Y-%m-%d")),
            None => "worklogDate >= startOfDay()".to_string(),
        };
        let jql = format!("{} AND project = '{}'", date_query, self.config.project_key);
        self.search_issues(&jql, "worklog,summary").await
    }

    /// All worklogs of an issue, fetching the full list when the embedded
    /// page in the search result is truncated.
    pub async fn get_issue_worklogs(&self, issue: &JiraIssue) -> Result<Vec<JiraWorklog>> {
        if let Some(page) = &issue.fields.worklog {
            if page.total <= page.worklogs.len() && page.total < EMBEDDED_WORKLOG_LIMIT {
                return Ok(page.worklogs.clone());
            }
        }
        let url = format!("{}/{}/{}/worklog", self.base_url, ISSUE_URL, issue.id);
        let page: JiraWorklogPage = self.get(url, &[]).await?;
        Ok(page.worklogs)
    }

    pub async fn add_worklog(&self, issue: &str, session: &WorkSession) -> Result<JiraWorklog> {
        let url = format!("{}/{}/{}/worklog", self.base_url, ISSUE_URL, issue);
        let mut body = serde_json::json!({
            "timeSpentSeconds": session.seconds,
            "started": session.started.format(JIRA_DATETIME_FORMAT).to_string(),
        });
        if let Some(comment) = &session.comment {
            body["comment"] = serde_json::json!(comment);
        }

        debug!(issue, seconds = session.seconds, "adding worklog");
        let response = self
            .client
            .post(url)
            .json(&body)
            .basic_auth(&self.config.email, Some(&self.config.token))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn get_worklog(&self, issue: &str, worklog_id: u64) -> Result<JiraWorklog> {
        let url = format!("{}/{}/{}/worklog/{}", self.base_url, ISSUE_URL, issue, worklog_id);
        self.get(url, &[]).await
    }

    /// Updates an existing worklog; only the supplied fields change.
    pub async fn update_worklog(
        &self,
        issue: &str,
        worklog_id: u64,
        seconds: Option<i64>,
        comment: Option<&str>,
        started: Option<&DateTime<Local>>,
    ) -> Result<JiraWorklog> {
        let mut body = serde_json::Map::new();
        if let Some(seconds) = seconds {
            body.insert("timeSpentSeconds".to_string(), serde_json::json!(seconds));
        }
        if let Some(comment) = comment {
            body.insert("comment".to_string(), serde_json::json!(comment));
        }
        if let Some(started) = started {
            body.insert(
                "started".to_string(),
                serde_json::json!(started.format(JIRA_DATETIME_FORMAT).to_string()),
            );
        }

        debug!(issue, worklog_id, "updating worklog");
        let url = format!("{}/{}/{}/worklog/{}", self.base_url, ISSUE_URL, issue, worklog_id);
        let response = self
            .client
            .put(url)
            .json(&serde_json::Value::Object(body))
            .basic_auth(&self.config.email, Some(&self.config.token))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn get<T: DeserializeOwned>(&self, url: String, query: &[(&str, String)]) -> Result<T> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .query(query)
            .basic_auth(&self.config.email, Some(&self.config.token))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<JiraErrorBody>(&body)
                .ok()
                .map(|parsed| parsed.error_messages.join(" "))
                .filter(|messages| !messages.is_empty())
                .unwrap_or(body);
            msg_bail_anyhow!(Message::JiraRequestFailed(status.to_string(), detail));
        }
        Ok(response.json::<T>().await?)
    }
}
