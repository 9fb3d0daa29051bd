//! API client modules for external service integrations.
//!
//! Contains the Jira REST client used to look up boards, sprints, and
//! issues, and to create, read, and update worklogs. The client is plain
//! request/response glue: everything it returns arrives in the core already
//! deserialized, and remote failures surface as opaque errors the core
//! never inspects.

pub mod jira;

pub use jira::{Jira, JiraConfig};
