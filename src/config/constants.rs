//! Configuration constants for reelgrid
//!
//! This module contains all hardcoded constants used throughout the application,
//! organized by functionality and following Rust naming conventions.

// =============================================================================
// Network and Server Constants
// =============================================================================

/// Default port for the HTTP server
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default address the HTTP server binds to
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Value of the `Server` header on every response
pub const USER_AGENT: &str = concat!("reelgrid/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Media File Support Constants
// =============================================================================

/// Video file extensions accepted by the directory lister
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "mov", "avi", "mkv"];

/// Extension of the files shown by the animation gallery
pub const ANIMATION_EXTENSION: &str = "gif";

/// Default directory holding gallery animations
pub const DEFAULT_ANIMATIONS_DIR: &str = "public/animations";

// =============================================================================
// Streaming Constants
// =============================================================================

/// Content type sent with every streamed file
pub const STREAM_CONTENT_TYPE: &str = "video/mp4";

/// Size of each chunk read from disk while streaming
pub const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// Unit prefix expected in `Range` headers
pub const RANGE_UNIT_PREFIX: &str = "bytes=";

// =============================================================================
// Display Client Constants
// =============================================================================

/// Interval between directory re-scans, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10_000;

/// Interval between reshuffles of the displayed set, in milliseconds
pub const DEFAULT_SHUFFLE_INTERVAL_MS: u64 = 5_000;

/// Number of videos shown in the grid
pub const DEFAULT_GRID_SIZE: usize = 6;

/// Number of animations shown in the gallery
pub const GALLERY_GRID_SIZE: usize = 3;

/// Interval between reshuffles of the gallery, in milliseconds
pub const GALLERY_SHUFFLE_INTERVAL_MS: u64 = 3_000;

// =============================================================================
// Logging Constants
// =============================================================================

/// Environment variable name for custom log level
pub const LOG_LEVEL_ENV_VAR: &str = "REELGRID_LOG";

// =============================================================================
// Error and Status Messages
// =============================================================================

/// Error message for invalid socket address format
pub const INVALID_SOCKET_ADDRESS_MSG: &str = "Invalid socket address format";

/// Error message when the directory parameter is missing
pub const MISSING_DIR_PATH_MSG: &str = "Directory path is required";

/// Error message when the video path parameter is missing
pub const MISSING_VIDEO_PATH_MSG: &str = "Video path is required";

/// Error message when the listed directory does not exist
pub const DIRECTORY_NOT_FOUND_MSG: &str = "Directory not found";

/// Error message when the streamed file does not exist
pub const VIDEO_NOT_FOUND_MSG: &str = "Video not found";

/// Error message for a zero grid size or interval
pub const MUST_BE_POSITIVE_MSG: &str = "must be greater than zero";

/// Error message when a query string cannot be decoded
pub const MALFORMED_QUERY_MSG: &str = "Malformed query string";

// =============================================================================
// Logging Messages
// =============================================================================

/// Log message for the list command
pub const LOG_MSG_LIST_VIDEOS: &str = "List videos";

/// Log message when monitoring starts
pub const LOG_MSG_MONITOR_STARTED: &str = "Monitoring started";

/// Log message when monitoring stops
pub const LOG_MSG_MONITOR_STOPPED: &str = "Monitoring stopped";
