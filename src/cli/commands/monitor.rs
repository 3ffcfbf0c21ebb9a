//! Monitor command implementation for reelgrid
//!
//! This module implements the monitor command, which runs the display loop in
//! the terminal: every reshuffle prints the newly selected videos.

use crate::{
    config::Config,
    error::Result,
    monitor::Monitor,
    utils::format_media_file,
};
use log::{info, warn};

/// Monitor command implementation
pub struct MonitorCommand<'a> {
    args: &'a super::super::Monitor,
}

impl<'a> MonitorCommand<'a> {
    /// Create a new monitor command
    pub fn new(args: &'a super::super::Monitor) -> Self {
        Self { args }
    }

    /// Execute the monitor command until Ctrl-C
    pub async fn run(&self, config: &Config) -> Result<()> {
        let mut monitor = Monitor::new(config)?;
        let mut displayed = monitor.subscribe();
        monitor.start(&self.args.path).await?;

        loop {
            let selection = displayed.borrow_and_update().clone();
            println!(
                "--- {} of {} videos ---",
                selection.len(),
                monitor.library().len()
            );
            for video in &selection {
                println!("{}", format_media_file(video));
            }

            tokio::select! {
                changed = displayed.changed() => {
                    if changed.is_err() {
                        warn!("Monitor closed unexpectedly");
                        break;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted");
                    break;
                }
            }
        }

        monitor.stop();
        Ok(())
    }
}
