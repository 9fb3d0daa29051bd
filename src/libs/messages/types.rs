#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),       // path
    ConfigMissingKeys(String), // comma-separated sorted keys

    // === ISSUE MESSAGES ===
    IssueNotMatched(String),  // search text
    IssueAmbiguous(String),   // candidate list, one per line
    IssuesFound(usize, String), // count, date
    NoIssuesFound,
    SprintInfo(String), // preformatted sprint summary line

    // === WORKLOG MESSAGES ===
    WorklogCreated {
        spent: String,
        issue: String,
        worklog_id: String,
        at: String,
    },
    WorklogUpdated {
        issue: String,
        worklog_id: String,
    },
    WorklogsFound(usize),
    WorklogUpdateNeedsChanges,

    // === API MESSAGES ===
    JiraRequestFailed(String, String), // status, detail
    JiraAmbiguousBoard(String),        // board list
    JiraBoardNotFound(String),         // project key
}
