//! IP lookup orchestration.
//!
//! Validates the queried address, fans out to the reverse DNS resolver and the
//! geo provider concurrently, and merges whatever each returned into one
//! `LookupResult`. Only input validation can fail a lookup.

mod service;
mod types;

// Re-export public API
pub use service::{parse_ip, LookupService};
pub use types::{IpVersion, LookupResult};
