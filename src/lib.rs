//! # Dzira - Jira Worklog Assistant
//!
//! A command-line utility for logging time spent on Jira issues and
//! reporting logged work.
//!
//! ## Features
//!
//! - **Time Resolution**: Turns human time expressions ("2h 10m", "10:30",
//!   "2023-11-24 8:19") into validated, timezone-aware work sessions
//! - **Worklog Reports**: Groups and totals logged work per issue and day
//! - **Multiple Formats**: Table, CSV, and JSON report output
//! - **Sprint Listing**: Lists issues from the current (or any) sprint
//! - **Issue Matching**: Accepts issue numbers or free-text summary matches
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dzira::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
