//! ip_lookup library: caller address reporting and IP enrichment.
//!
//! This library provides an HTTP service that reports the caller's IP address
//! and enriches any queried address with reverse DNS and third-party geo-IP
//! metadata. Enrichment is best-effort: a failing resolver or provider only
//! blanks its own fields, it never fails the request.
//!
//! # Example
//!
//! ```no_run
//! use ip_lookup::{start_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     port: 8080,
//!     ..Default::default()
//! };
//! start_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod client_ip;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
pub mod lookup;
pub mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::LookupError;
pub use lookup::{LookupResult, LookupService};
pub use server::{build_router, start_server, AppState};
