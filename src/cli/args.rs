//! CLI argument parsing for reelgrid
//!
//! This module contains the CLI argument definitions and parsing logic
//! using the clap crate.

use crate::config::{
    Config, DEFAULT_ANIMATIONS_DIR, DEFAULT_BIND_HOST, DEFAULT_GRID_SIZE,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_SERVER_PORT, DEFAULT_SHUFFLE_INTERVAL_MS,
};
use clap::{Args, Parser, builder::RangedU64ValueParser};
use log::LevelFilter;
use std::path::PathBuf;

/// A rotating grid of local video files served over HTTP
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level
    #[arg(long, value_name = "LEVEL", global = true, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// The command to execute
    #[command(subcommand)]
    pub command: super::Commands,
}

impl Cli {
    /// Build a Config from the global arguments and the selected command
    pub fn build_config(&self) -> Config {
        let config = Config::new().with_log_level(self.log_level);

        match &self.command {
            super::Commands::Serve(serve) => serve
                .display
                .apply(config)
                .with_host(serve.host.clone())
                .with_port(serve.port)
                .with_animations_dir(serve.animations_dir.clone())
                .with_default_video_dir(serve.default_dir.clone()),
            super::Commands::Monitor(monitor) => monitor.display.apply(config),
            super::Commands::List(_) => config,
        }
    }
}

/// Grid and timing options shared by the server and the monitor
#[derive(Args)]
pub struct DisplayArgs {
    /// Number of videos displayed at once
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_GRID_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub grid_size: usize,

    /// Milliseconds between directory re-scans
    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_POLL_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval: u64,

    /// Milliseconds between reshuffles of the displayed videos
    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_SHUFFLE_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub shuffle_interval: u64,
}

impl DisplayArgs {
    fn apply(&self, config: Config) -> Config {
        config
            .with_grid_size(self.grid_size)
            .with_poll_interval(self.poll_interval)
            .with_shuffle_interval(self.shuffle_interval)
    }
}

/// Serve command arguments
#[derive(Args)]
pub struct Serve {
    /// The address to bind the server to
    #[arg(short = 'H', long = "host", default_value = DEFAULT_BIND_HOST)]
    pub host: String,

    /// The port to listen on
    #[arg(short = 'P', long = "port", default_value_t = DEFAULT_SERVER_PORT)]
    pub port: u16,

    /// Directory of the animations shown at /gifs
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ANIMATIONS_DIR)]
    pub animations_dir: PathBuf,

    /// Directory pre-filled in the video grid page (monitoring starts on load)
    #[arg(short, long = "dir", value_name = "DIR")]
    pub default_dir: Option<PathBuf>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// List command arguments
#[derive(Args)]
pub struct List {
    /// The directory to scan
    pub path: PathBuf,
}

/// Monitor command arguments
#[derive(Args)]
pub struct Monitor {
    /// The directory to monitor
    pub path: PathBuf,

    #[command(flatten)]
    pub display: DisplayArgs,
}
