pub mod init;
pub mod log;
pub mod ls;
pub mod report;

use crate::libs::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List issues from the current sprint")]
    Ls(ls::LsArgs),
    #[command(about = "Log time spent on an issue")]
    Log(log::LogArgs),
    #[command(about = "Show work logged for a day")]
    Report(report::ReportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path, overriding the default discovery
    #[arg(long, global = true)]
    file: Option<PathBuf>,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();

        // Config::read() consults this variable, so a --file given anywhere
        // on the command line reaches every command the same way.
        if let Some(file) = &cli.file {
            std::env::set_var(config::CONFIG_FILE_ENV, file);
        }

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Ls(args) => ls::cmd(args).await,
            Commands::Log(args) => log::cmd(args).await,
            Commands::Report(args) => report::cmd(args).await,
        }
    }
}
