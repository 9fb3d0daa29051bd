#[cfg(test)]
mod tests {
    use dzira::libs::config::Config;
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // These tests rewrite HOME and the JIRA_* variables, which are process
    // global, so they must not run concurrently.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        temp_dir: TempDir,
        _env_guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let env_guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
            let keys = [
                "JIRA_SERVER", "JIRA_EMAIL", "JIRA_TOKEN", "JIRA_PROJECT_KEY", "DZIRA_CONFIG_FILE",
            ];
            for key in keys {
                std::env::remove_var(key);
            }
            ConfigTestContext {
                temp_dir,
                _env_guard: env_guard,
            }
        }
    }

    fn write_env_file(ctx: &ConfigTestContext, contents: &str) {
        let dir = ctx.temp_dir.path().join("dzira");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("env"), contents).unwrap();
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_reads_config_from_discovered_env_file(ctx: &mut ConfigTestContext) {
        write_env_file(
            ctx,
            "JIRA_SERVER=jira.example.com\nJIRA_EMAIL=me@example.com\nJIRA_TOKEN=secret\nJIRA_PROJECT_KEY=XY\n",
        );

        let config = Config::read().unwrap();
        assert_eq!(config.jira.server, "jira.example.com");
        assert_eq!(config.jira.email, "me@example.com");
        assert_eq!(config.jira.token, "secret");
        assert_eq!(config.jira.project_key, "XY");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_keys_are_listed_sorted(ctx: &mut ConfigTestContext) {
        write_env_file(ctx, "JIRA_SERVER=jira.example.com\n");

        let err = Config::read().unwrap_err().to_string();
        assert!(err.contains("could not find required config values"));
        assert!(err.contains("JIRA_EMAIL, JIRA_PROJECT_KEY, JIRA_TOKEN"));
        assert!(!err.contains("JIRA_SERVER,"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_explicit_config_file_overrides_discovery(ctx: &mut ConfigTestContext) {
        write_env_file(
            ctx,
            "JIRA_SERVER=wrong.example.com\nJIRA_EMAIL=me@example.com\nJIRA_TOKEN=secret\nJIRA_PROJECT_KEY=XY\n",
        );
        let forced = ctx.temp_dir.path().join("other-env");
        fs::write(
            &forced,
            "JIRA_SERVER=right.example.com\nJIRA_EMAIL=me@example.com\nJIRA_TOKEN=secret\nJIRA_PROJECT_KEY=XY\n",
        )
        .unwrap();
        std::env::set_var("DZIRA_CONFIG_FILE", &forced);

        let config = Config::read().unwrap();
        assert_eq!(config.jira.server, "right.example.com");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_round_trips(ctx: &mut ConfigTestContext) {
        write_env_file(
            ctx,
            "JIRA_SERVER=jira.example.com\nJIRA_EMAIL=me@example.com\nJIRA_TOKEN=secret\nJIRA_PROJECT_KEY=XY\n",
        );
        let config = Config::read().unwrap();

        let path = config.save().unwrap();
        assert!(path.is_file());
        let reread = Config::read().unwrap();
        assert_eq!(reread.jira.server, config.jira.server);
        assert_eq!(reread.jira.project_key, config.jira.project_key);
    }
}
