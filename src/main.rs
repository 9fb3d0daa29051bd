use dzira::commands::Cli;
use dzira::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Structured logging is opt-in: without DZIRA_DEBUG or RUST_LOG the
    // message macros print plain text and no subscriber is installed.
    if std::env::var("DZIRA_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if let Err(err) = Cli::menu().await {
        msg_error!(err);
        std::process::exit(1);
    }
}
