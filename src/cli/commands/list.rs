//! List command implementation for reelgrid
//!
//! This module implements the list command which scans a directory and
//! prints its video files.

use crate::{
    config::{Config, LOG_MSG_LIST_VIDEOS},
    error::Result,
    media::scan_directory,
    utils::format_media_file,
};
use log::info;

/// List command implementation
pub struct ListCommand<'a> {
    args: &'a super::super::List,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command
    pub fn new(args: &'a super::super::List) -> Self {
        Self { args }
    }

    /// Execute the list command
    pub async fn run(&self, _config: &Config) -> Result<()> {
        info!("{LOG_MSG_LIST_VIDEOS}");
        for video in scan_directory(&self.args.path).await? {
            println!("{}", format_media_file(&video));
        }
        Ok(())
    }
}
