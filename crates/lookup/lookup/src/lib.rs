//! # External lookups
//!
//! This crate defines the lookup service interface used by the fallback chain: a source takes the
//! user's query and either produces a ready-to-send reply or a [`LookupError`].

use async_trait::async_trait;

mod config;
mod error;

pub use config::{EnvLookupConfig, LookupConfig};
pub use error::LookupError;

/// A read-only external source that can answer a free-text query.
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Short source name used in logs (e.g. `wikipedia`).
    fn name(&self) -> &str;

    /// Queries the source once. `Ok` always carries a non-empty reply text.
    async fn lookup(&self, query: &str) -> Result<String, LookupError>;
}
