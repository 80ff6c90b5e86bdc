//! Reverse DNS resolution.
//!
//! This module provides async PTR lookups using `hickory-resolver` behind the
//! `ReverseResolver` trait, so the lookup orchestrator can be driven by any
//! resolver (including test doubles).

mod resolution;

// Re-export public API
pub use resolution::{reverse_dns_lookup, HickoryReverseResolver, ReverseResolver};
