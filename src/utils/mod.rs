//! Utility functions and helpers for reelgrid
//!
//! This module provides various utility functions organized by functionality:
//! - Timestamp conversion
//! - Media file classification
//! - Network address helpers
//! - Text formatting and display utilities

pub mod formatting;
pub mod media;
pub mod network;
pub mod time;

pub use formatting::{format_file_size, format_media_file};
pub use media::{is_animation_file, is_supported_video_file};
pub use network::{get_local_ip, parse_socket_addr};
pub use time::system_time_to_millis;
