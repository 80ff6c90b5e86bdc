//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};

/// Initializes the DNS resolver used for reverse (PTR) lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` or the platform
/// equivalent) when it can be read, otherwise falls back to hickory's default
/// upstreams. Either way the timeouts are tightened so a silent reverse zone
/// cannot stall a lookup for long.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    apply_timeouts(&mut opts);
    Arc::new(TokioAsyncResolver::tokio(config, opts))
}

fn apply_timeouts(opts: &mut ResolverOpts) {
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // Reverse names are always fully qualified; never append search domains
    opts.ndots = 0;
}
