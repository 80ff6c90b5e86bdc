//! GeoIP lookup using a third-party JSON provider.
//!
//! This module fetches geographic and network-ownership metadata for an IP
//! address from an ipapi.co-compatible endpoint and normalizes the provider's
//! varying field names into `GeoMetadata`. The provider is best-effort: any
//! failure becomes "no data", never an error for the caller.

mod extract;
mod fetch;
mod types;

// Re-export public API
pub use extract::extract_metadata;
pub use fetch::GeoClient;
pub use types::{GeoLocation, GeoMetadata, PrivacyFlags};
