//! Reverse DNS lookup.
//!
//! PTR resolution is enrichment only: every failure is logged and folded into
//! `None`, so callers never see a resolver error.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

/// Resolves an IP address to a hostname.
///
/// Implementations must not fail: "no answer" and "lookup failed" are both
/// reported as `None`.
#[async_trait]
pub trait ReverseResolver: Send + Sync {
    /// Returns the first PTR hostname for `ip`, or `None`.
    async fn reverse(&self, ip: IpAddr) -> Option<String>;
}

/// `ReverseResolver` backed by a shared hickory resolver.
#[derive(Clone)]
pub struct HickoryReverseResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryReverseResolver {
    /// Wraps an initialized resolver (see `initialization::init_resolver`).
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl ReverseResolver for HickoryReverseResolver {
    async fn reverse(&self, ip: IpAddr) -> Option<String> {
        reverse_dns_lookup(ip, &self.resolver).await
    }
}

/// Performs a reverse DNS lookup (PTR record) for an IP address.
///
/// # Returns
///
/// The first hostname in the answer without its trailing root dot, or `None`
/// if the lookup fails or the answer is empty.
pub async fn reverse_dns_lookup(ip: IpAddr, resolver: &TokioAsyncResolver) -> Option<String> {
    match resolver.reverse_lookup(ip).await {
        Ok(response) => response
            .iter()
            .next()
            .and_then(|name| normalize_ptr_name(&name.to_utf8())),
        Err(e) => {
            log::debug!("Reverse DNS lookup for {ip} returned no result: {e}");
            None
        }
    }
}

/// Strips the trailing root label from a PTR target; an empty name is no name.
pub(crate) fn normalize_ptr_name(name: &str) -> Option<String> {
    let trimmed = name.trim_end_matches('.');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
