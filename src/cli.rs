//! Command line interface for reelgrid

mod args;
mod commands;

pub use args::{Cli, DisplayArgs, List, Monitor, Serve};
pub use commands::{Commands, ListCommand, MonitorCommand, ServeCommand};

use crate::error::Result;

impl Cli {
    /// Runs the selected command
    pub async fn run(&self) -> Result<()> {
        self.command.run(self).await
    }
}
