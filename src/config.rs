//! Configuration module for reelgrid
//!
//! This module provides configuration constants, default values, and configuration types
//! for the reelgrid video wall server.

mod constants;
mod types;

// Re-export all constants and types
pub use constants::*;
pub use types::*;
