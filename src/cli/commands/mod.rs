//! CLI command implementations for reelgrid
//!
//! This module contains the implementation of the serve, list and monitor
//! commands.

mod list;
mod monitor;
mod serve;

pub use list::ListCommand;
pub use monitor::MonitorCommand;
pub use serve::ServeCommand;

use crate::{
    config::{Config, LOG_LEVEL_ENV_VAR},
    error::Result,
};
use clap::Subcommand;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::env;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the video grid, the listing and streaming API, and the animation gallery
    Serve(super::Serve),

    /// Scan a directory and list its video files, newest first
    List(super::List),

    /// Watch a directory and print a random selection of its videos
    Monitor(super::Monitor),
}

impl Commands {
    /// Execute the command
    pub async fn run(&self, cli: &super::Cli) -> Result<()> {
        let config = cli.build_config();
        setup_log(&config);
        match self {
            Self::Serve(_) => ServeCommand::new().run(&config).await?,
            Self::List(list) => ListCommand::new(list).run(&config).await?,
            Self::Monitor(monitor) => MonitorCommand::new(monitor).run(&config).await?,
        }
        Ok(())
    }
}

/// Level from the environment override, falling back to the configured one
fn log_level(config: &Config) -> LevelFilter {
    env::var(LOG_LEVEL_ENV_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(config.log_level)
}

/// Setup logging configuration
fn setup_log(config: &Config) {
    SimpleLogger::new()
        .with_level(log_level(config))
        .init()
        .unwrap_or_else(|_| eprintln!("Warning: Logger already initialized"));
}
