//! # History Enrichment
//!
//! Attaches the closest Wayback Machine snapshot to live hosts, dropping
//! snapshots older than the configured recency window. Enrichment is strictly
//! best effort: every failure is reported as "no history".

use anyhow::Context;
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use reqwest::Url;
use subreach_common::EnrichmentRecord;
use subreach_plugins::HttpClient;
use subreach_protocols::wayback::{self, Snapshot};
use tracing::debug;

pub const WAYBACK_AVAILABILITY: &str = "http://archive.org/wayback/available";

/// Looks up archive history for a live URL.
#[async_trait]
pub trait HistoryLookup: Send + Sync {
    async fn lookup_history(&self, url: &str, recency_years: i32) -> Option<EnrichmentRecord>;
}

pub struct WaybackEnricher {
    client: HttpClient,
    endpoint: String,
}

impl WaybackEnricher {
    pub fn new(client: HttpClient) -> Self {
        Self::with_endpoint(client, WAYBACK_AVAILABILITY)
    }

    pub fn with_endpoint(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn closest(&self, url: &str) -> anyhow::Result<Option<Snapshot>> {
        let request = Url::parse_with_params(&self.endpoint, &[("url", url)])
            .with_context(|| format!("building availability query for {url}"))?;
        let body = self.client.get_text(request.as_str()).await?;
        wayback::parse_closest(&body)
    }
}

#[async_trait]
impl HistoryLookup for WaybackEnricher {
    async fn lookup_history(&self, url: &str, recency_years: i32) -> Option<EnrichmentRecord> {
        match self.closest(url).await {
            Ok(Some(snapshot)) => select_recent(snapshot, Utc::now().year(), recency_years),
            Ok(None) => None,
            Err(e) => {
                debug!("history lookup for {url} failed: {e:#}");
                None
            }
        }
    }
}

/// Keeps `snapshot` only if its year is within `recency_years` of `current_year`.
pub fn select_recent(
    snapshot: Snapshot,
    current_year: i32,
    recency_years: i32,
) -> Option<EnrichmentRecord> {
    let year = snapshot.year()?;
    if year < current_year - recency_years {
        return None;
    }
    Some(EnrichmentRecord {
        url: snapshot.url,
        timestamp: snapshot.timestamp,
        year,
    })
}
