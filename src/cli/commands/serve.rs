//! Serve command implementation for reelgrid

use crate::{config::Config, error::Result, server::GridServer};
use log::info;

/// Serve command implementation
#[derive(Default)]
pub struct ServeCommand;

impl ServeCommand {
    /// Create a new serve command
    pub fn new() -> Self {
        Self
    }

    /// Execute the serve command
    pub async fn run(&self, config: &Config) -> Result<()> {
        info!("Starting video grid server...");
        GridServer::new(config.clone())?.run().await
    }
}
