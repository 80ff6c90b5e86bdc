//! Shared server state.

use std::sync::Arc;

use super::cors::CorsPolicy;
use crate::config::Config;
use crate::dns::HickoryReverseResolver;
use crate::error_handling::InitializationError;
use crate::geoip::GeoClient;
use crate::initialization::{init_client, init_resolver};
use crate::lookup::LookupService;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Lookup orchestrator
    pub lookup: LookupService,
    /// Origin allow-list
    pub cors: Arc<CorsPolicy>,
}

impl AppState {
    /// Assembles state from already-built parts.
    pub fn new(lookup: LookupService, cors: CorsPolicy) -> Self {
        Self {
            lookup,
            cors: Arc::new(cors),
        }
    }

    /// Builds the production state: system DNS resolver, provider HTTP client,
    /// and the configured CORS allow-list.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        let resolver = Arc::new(HickoryReverseResolver::new(init_resolver()));
        let geo = GeoClient::new(client, config.geo_provider_url.clone());

        Ok(Self::new(
            LookupService::new(resolver, geo),
            CorsPolicy::new(config.normalized_cors_origins()),
        ))
    }
}
