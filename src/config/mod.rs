//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, timeouts, fixed HTTP strings)
//! - The `Config` struct, parsed from CLI flags and environment variables

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};
