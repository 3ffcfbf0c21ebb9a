//! Media file utilities for reelgrid
//!
//! This module provides functions for classifying files by extension.

use crate::{config::ANIMATION_EXTENSION, types::VideoExtension};
use std::path::Path;

/// Validates if a file path has a supported video extension
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// Returns true if the extension is on the video allow-list, ignoring case
pub fn is_supported_video_file(path: &Path) -> bool {
    VideoExtension::from_path(path).is_some()
}

/// Validates if a file path is an animation shown by the gallery
pub fn is_animation_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ANIMATION_EXTENSION))
}
