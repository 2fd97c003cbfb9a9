//! CLI for the filedrop transfer client.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use filedrop::config::Config;
use filedrop::logging;
use filedrop::TransferSession;

use commands::{run_clear_history, run_history, run_send, run_status, run_watch};

/// Top-level CLI for the filedrop transfer client.
#[derive(Debug, Parser)]
#[command(name = "filedrop")]
#[command(about = "filedrop: send files to a companion server on the local network", long_about = None)]
pub struct Cli {
    /// Path to a config.json (default: the application root, then the working directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Server base URL, overriding config and environment.
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Log more detail to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Probe the server once and show its identity.
    Status,

    /// Upload files to the server as one batch.
    Send {
        /// Files to send.
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,
    },

    /// Show the server's transfer log, newest first.
    History {
        /// List entries in the order the server recorded them.
        #[arg(long)]
        oldest_first: bool,
    },

    /// Clear the server's transfer log.
    ClearHistory,

    /// Keep probing the server and report connectivity changes until Ctrl-C.
    Watch,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        logging::init_logging(cli.verbose);

        let config = cli.load_config().await?;
        tracing::debug!("loaded config: {:?}", config);
        let session = TransferSession::new(config).context("failed to build HTTP client")?;

        match cli.command {
            CliCommand::Status => run_status(&session).await?,
            CliCommand::Send { files } => run_send(&session, &files).await?,
            CliCommand::History { oldest_first } => run_history(&session, oldest_first).await?,
            CliCommand::ClearHistory => run_clear_history(&session).await?,
            CliCommand::Watch => run_watch(&session).await?,
        }

        Ok(())
    }

    async fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path).await?,
            None => Config::load().await,
        };
        if let Some(server) = self.server.as_deref().map(str::trim) {
            if !server.is_empty() {
                config.server_url = server.to_string();
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests;
