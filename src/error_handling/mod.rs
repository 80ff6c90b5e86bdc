//! Error handling.
//!
//! This module provides the error taxonomy:
//! - **Initialization errors**: logger, HTTP client, listener setup
//! - **Lookup errors**: invalid input and unexpected orchestration failures,
//!   each carrying an HTTP-equivalent status
//! - **Geo fetch errors**: provider failures, always recovered inside `geoip`

mod types;

// Re-export public API
pub use types::{GeoFetchError, InitializationError, LookupError};
