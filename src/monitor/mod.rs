//! Directory monitor for reelgrid
//!
//! The monitor is the server-side counterpart of the display page: while
//! monitoring it re-scans a directory on one interval and swaps the displayed
//! subset on another, shorter one. Every scan replaces the known list as a
//! whole; new files are only detected to be logged.

pub mod selection;

pub use selection::{new_entries, shuffle_and_take};

use crate::{
    config::{Config, LOG_MSG_MONITOR_STARTED, LOG_MSG_MONITOR_STOPPED},
    error::Result,
    media::{MediaFile, scan_directory},
};
use log::{debug, info, warn};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

/// Whether a monitor is currently polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    /// No background task is running
    Idle,
    /// The background task is polling and reshuffling
    Monitoring,
}

#[derive(Debug, Clone, Copy)]
struct MonitorSettings {
    grid_size: usize,
    poll_interval: Duration,
    shuffle_interval: Duration,
}

#[derive(Debug)]
struct Shared {
    library: watch::Sender<Vec<MediaFile>>,
    displayed: watch::Sender<Vec<MediaFile>>,
}

impl Shared {
    fn replace_library(&self, videos: Vec<MediaFile>, grid_size: usize) {
        let added = new_entries(self.library.borrow().as_slice(), &videos).len();
        if added > 0 {
            info!("Found {added} new video(s)");
        }

        self.displayed
            .send_replace(shuffle_and_take(&videos, grid_size, &mut rand::thread_rng()));
        self.library.send_replace(videos);
    }

    fn reshuffle(&self, grid_size: usize) {
        let displayed = shuffle_and_take(
            self.library.borrow().as_slice(),
            grid_size,
            &mut rand::thread_rng(),
        );
        debug!("Reshuffled {} displayed video(s)", displayed.len());
        self.displayed.send_replace(displayed);
    }
}

/// Polls a directory and keeps a random subset of it on display
#[derive(Debug)]
pub struct Monitor {
    settings: MonitorSettings,
    shared: Arc<Shared>,
    task: Option<JoinHandle<()>>,
}

impl Monitor {
    /// Creates an idle monitor using the grid and interval settings of `config`
    ///
    /// # Errors
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig) when the grid
    /// size or an interval is zero
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            settings: MonitorSettings {
                grid_size: config.grid_size,
                poll_interval: config.poll_interval(),
                shuffle_interval: config.shuffle_interval(),
            },
            shared: Arc::new(Shared {
                library: watch::Sender::new(Vec::new()),
                displayed: watch::Sender::new(Vec::new()),
            }),
            task: None,
        })
    }

    /// Current state of the monitor
    pub fn state(&self) -> MonitorState {
        match &self.task {
            Some(task) if !task.is_finished() => MonitorState::Monitoring,
            _ => MonitorState::Idle,
        }
    }

    /// Starts monitoring `dir`, restarting if already running
    ///
    /// The first scan happens before this returns and its failure is
    /// reported to the caller. Later scan failures are logged and the
    /// previous list is kept.
    pub async fn start(&mut self, dir: impl Into<PathBuf>) -> Result<()> {
        self.stop();

        let dir = dir.into();
        let videos = scan_directory(&dir).await?;
        self.shared.replace_library(videos, self.settings.grid_size);

        let shared = self.shared.clone();
        let settings = self.settings;
        info!("{LOG_MSG_MONITOR_STARTED}: {}", dir.display());
        self.task = Some(tokio::spawn(run(shared, dir, settings)));
        Ok(())
    }

    /// Stops the background task; the last known lists are kept
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("{LOG_MSG_MONITOR_STOPPED}");
        }
    }

    /// Every video found by the latest successful scan, newest first
    pub fn library(&self) -> Vec<MediaFile> {
        self.shared.library.borrow().clone()
    }

    /// The videos currently on display
    pub fn displayed(&self) -> Vec<MediaFile> {
        self.shared.displayed.borrow().clone()
    }

    /// Subscribes to changes of the displayed set
    pub fn subscribe(&self) -> watch::Receiver<Vec<MediaFile>> {
        self.shared.displayed.subscribe()
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run(shared: Arc<Shared>, dir: PathBuf, settings: MonitorSettings) {
    let mut poll = interval(settings.poll_interval);
    let mut shuffle = interval(settings.shuffle_interval);
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
    shuffle.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Both intervals fire immediately; the initial scan already covered that.
    poll.tick().await;
    shuffle.tick().await;

    loop {
        tokio::select! {
            _ = poll.tick() => match scan_directory(&dir).await {
                Ok(videos) => shared.replace_library(videos, settings.grid_size),
                Err(e) => warn!("Failed to rescan {}: {e}", dir.display()),
            },
            _ = shuffle.tick() => shared.reshuffle(settings.grid_size),
        }
    }
}
