//! Formatting utilities for reelgrid
//!
//! This module provides functions for formatting text and display strings
//! printed by the command line interface.

use crate::media::MediaFile;

/// Formats a byte count using binary units
///
/// # Arguments
/// * `bytes` - The size to format
///
/// # Returns
/// Returns a short human readable size such as `1.5 MiB`
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

/// Formats a listed media file for display
///
/// # Returns
/// Returns `[<timestamp>] <name> @ <path>`
pub fn format_media_file(file: &MediaFile) -> String {
    format!(
        "[{}] {} @ {}",
        file.timestamp(),
        file.name(),
        file.path().display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KiB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MiB");
    }
}
