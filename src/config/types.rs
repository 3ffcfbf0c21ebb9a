//! Configuration types for reelgrid
//!
//! This module contains configuration structures and related types
//! used throughout the application.

use crate::error::{Error, Result};
use log::LevelFilter;
use std::{path::PathBuf, time::Duration};

use super::constants::*;

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: String,
    /// Port for the HTTP server
    pub port: u16,
    /// Directory served by the animation gallery
    pub animations_dir: PathBuf,
    /// Directory pre-filled in the display page
    pub default_video_dir: Option<PathBuf>,
    /// Number of videos displayed at once
    pub grid_size: usize,
    /// Interval between directory re-scans
    pub poll_interval_ms: u64,
    /// Interval between reshuffles of the displayed set
    pub shuffle_interval_ms: u64,
    /// Log level
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            animations_dir: PathBuf::from(DEFAULT_ANIMATIONS_DIR),
            default_video_dir: None,
            grid_size: DEFAULT_GRID_SIZE,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            shuffle_interval_ms: DEFAULT_SHUFFLE_INTERVAL_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bind host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the server port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the animations directory
    pub fn with_animations_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.animations_dir = dir.into();
        self
    }

    /// Sets the directory pre-filled in the display page
    pub fn with_default_video_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.default_video_dir = dir;
        self
    }

    /// Sets the number of displayed videos
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets the poll interval
    pub fn with_poll_interval(mut self, interval_ms: u64) -> Self {
        self.poll_interval_ms = interval_ms;
        self
    }

    /// Sets the shuffle interval
    pub fn with_shuffle_interval(mut self, interval_ms: u64) -> Self {
        self.shuffle_interval_ms = interval_ms;
        self
    }

    /// Sets the log level
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Poll interval as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Shuffle interval as a [`Duration`]
    pub fn shuffle_interval(&self) -> Duration {
        Duration::from_millis(self.shuffle_interval_ms)
    }

    /// Checks the grid and timing settings
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] when the grid size or an interval is zero
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("grid_size", self.grid_size as u64),
            ("poll_interval_ms", self.poll_interval_ms),
            ("shuffle_interval_ms", self.shuffle_interval_ms),
        ] {
            if value == 0 {
                return Err(Error::InvalidConfig {
                    field: field.to_string(),
                    reason: MUST_BE_POSITIVE_MSG.to_string(),
                });
            }
        }
        Ok(())
    }
}
