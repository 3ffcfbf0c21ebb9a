//! reelgrid: a rotating grid of local video files served over HTTP
//!
//! The backend lists the video files of a directory and streams them with
//! HTTP range support; the browser page, or the [`monitor::Monitor`], polls
//! the listing and keeps a random subset on display.

pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod monitor;
pub mod server;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use media::{ByteRange, MediaFile, MediaStream, open_stream, scan_directory};
pub use monitor::{Monitor, MonitorState};
pub use server::{GridServer, router};
