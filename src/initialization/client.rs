//! HTTP client initialization.
//!
//! This module provides the outbound client used for geo provider requests.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use reqwest::ClientBuilder;

/// Initializes the HTTP client for geo provider requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Whole-request timeout from the configuration
/// - A short connect timeout so an unreachable provider fails fast
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let connect_timeout = TCP_CONNECT_TIMEOUT_SECS.min(config.timeout_seconds);
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(connect_timeout))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
