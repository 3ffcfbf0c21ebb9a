//! Media handling and streaming for reelgrid
//!
//! This module provides the backend core:
//! - Directory scanning for video files and gallery animations
//! - `Range` header parsing
//! - Lazy, range-aware file streaming

pub mod library;
pub mod range;
pub mod streaming;

pub use library::{MediaFile, scan_animations, scan_directory};
pub use range::ByteRange;
pub use streaming::{MediaStream, open_stream};
