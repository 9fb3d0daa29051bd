//! Configuration discovery and storage.
//!
//! Connection settings are plain `KEY=value` env files, discovered in the
//! following order (first existing file wins):
//!
//! - `$XDG_CONFIG_HOME` or `$HOME` / `dzira/env`
//! - `$XDG_CONFIG_HOME` or `$HOME` / `.dzira`
//! - `$HOME/.config/dzira/env`
//! - `$HOME/.config/.dzira`
//!
//! Process environment variables override file values, and
//! `DZIRA_CONFIG_FILE` (set by the `--file` option) forces a specific file.
//! Required keys: `JIRA_SERVER`, `JIRA_EMAIL`, `JIRA_TOKEN`,
//! `JIRA_PROJECT_KEY`.

use crate::api::jira::JiraConfig;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_DIR_NAME: &str = "dzira";
pub const DOTFILE_NAME: &str = ".dzira";

/// Environment variable forcing a specific config file path.
pub const CONFIG_FILE_ENV: &str = "DZIRA_CONFIG_FILE";

const REQUIRED_KEYS: [&str; 4] = ["JIRA_SERVER", "JIRA_EMAIL", "JIRA_TOKEN", "JIRA_PROJECT_KEY"];

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub jira: JiraConfig,
}

impl Config {
    /// Loads configuration from the environment and the first discovered
    /// env file. Fails listing the missing keys when the merge does not
    /// cover all required values.
    pub fn read() -> Result<Self> {
        let mut values: HashMap<String, String> = HashMap::new();

        // Environment variables take precedence over file values.
        for key in REQUIRED_KEYS {
            if let Ok(value) = env::var(key) {
                values.insert(key.to_string(), value);
            }
        }

        if values.len() < REQUIRED_KEYS.len() {
            if let Some(path) = Self::config_file() {
                for item in dotenv::from_path_iter(&path)? {
                    let (key, value) = item?;
                    values.entry(key).or_insert(value);
                }
            }
        }

        let mut missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .filter(|key| !values.contains_key(**key))
            .copied()
            .collect();
        if !missing.is_empty() {
            missing.sort_unstable();
            return Err(msg_error_anyhow!(Message::ConfigMissingKeys(missing.join(", "))));
        }

        let get = |key: &str| values.get(key).cloned().unwrap_or_default();
        Ok(Self {
            jira: JiraConfig {
                server: get("JIRA_SERVER"),
                email: get("JIRA_EMAIL"),
                token: get("JIRA_TOKEN"),
                project_key: get("JIRA_PROJECT_KEY"),
            },
        })
    }

    /// Interactive configuration wizard. Existing values (when readable)
    /// are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().ok();
        let theme = ColorfulTheme::default();

        let prompt = |label: &str, initial: Option<String>| -> Result<String> {
            let mut input = Input::<String>::with_theme(&theme).with_prompt(label);
            if let Some(initial) = initial {
                input = input.with_initial_text(initial);
            }
            Ok(input.interact_text()?)
        };

        let jira = JiraConfig {
            server: prompt(
                "Jira server (host name)",
                current.as_ref().map(|c| c.jira.server.clone()),
            )?,
            email: prompt("Jira email", current.as_ref().map(|c| c.jira.email.clone()))?,
            token: prompt("Jira API token", current.as_ref().map(|c| c.jira.token.clone()))?,
            project_key: prompt(
                "Jira project key",
                current.as_ref().map(|c| c.jira.project_key.clone()),
            )?,
        };

        Ok(Self { jira })
    }

    /// Writes the configuration as an env file under the config directory.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::default_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = format!(
            "JIRA_SERVER={}\nJIRA_EMAIL={}\nJIRA_TOKEN={}\nJIRA_PROJECT_KEY={}\n",
            self.jira.server, self.jira.email, self.jira.token, self.jira.project_key
        );
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// The file new configurations are written to.
    pub fn default_config_path() -> PathBuf {
        Self::config_home().join(CONFIG_DIR_NAME).join("env")
    }

    /// First existing config file among the candidate paths, honoring the
    /// `DZIRA_CONFIG_FILE` override.
    fn config_file() -> Option<PathBuf> {
        if let Ok(forced) = env::var(CONFIG_FILE_ENV) {
            return Some(PathBuf::from(forced));
        }
        Self::candidate_paths().into_iter().find(|path| path.is_file())
    }

    fn config_home() -> PathBuf {
        env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env::var("HOME").unwrap_or_default()))
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let config_home = Self::config_home();
        let home = PathBuf::from(env::var("HOME").unwrap_or_default());
        vec![
            config_home.join(CONFIG_DIR_NAME).join("env"),
            config_home.join(DOTFILE_NAME),
            home.join(".config").join(CONFIG_DIR_NAME).join("env"),
            home.join(".config").join(DOTFILE_NAME),
        ]
    }
}
