//! # Source Adapters
//!
//! Every public data provider is reached through the [`SubdomainSource`]
//! capability. The scanner only ever depends on the trait, so providers can be
//! added, removed or replaced by mocks without touching the pipeline.
//!
//! The [`registry`] lists the built-in providers; [`provider::Provider`] is the
//! one concrete implementation, configured per provider.

use std::collections::HashSet;

use async_trait::async_trait;
use subreach_common::Domain;
use tracing::{debug, warn};

pub mod http;
pub mod provider;
pub mod registry;

pub use http::HttpClient;
pub use provider::{Provider, ResponseFormat};
pub use registry::{default_sources, source_names, sources_by_name};

/// Fetches raw hostname candidates for a domain from one provider.
#[async_trait]
pub trait SubdomainSource: Send + Sync {
    fn name(&self) -> &str;

    /// Queries the provider. Candidates are unvalidated free text.
    async fn fetch(&self, domain: &Domain) -> anyhow::Result<HashSet<String>>;

    /// Like [`fetch`](Self::fetch), but any failure yields an empty set.
    async fn fetch_soft(&self, domain: &Domain) -> HashSet<String> {
        match self.fetch(domain).await {
            Ok(candidates) => {
                debug!("{} returned {} candidates for {domain}", self.name(), candidates.len());
                candidates
            }
            Err(e) => {
                warn!("{} failed for {domain}: {e:#}", self.name());
                HashSet::new()
            }
        }
    }
}
