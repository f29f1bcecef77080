//! # Scan Orchestration
//!
//! Drives one domain through the whole pipeline:
//!
//! 1. **Aggregation**: every source is queried at once (see [`crate::aggregator`]).
//! 2. **Probing**: hostnames are classified through a bounded worker pool.
//!    The bound is shared by every domain scanned by the same orchestrator.
//! 3. **Enrichment**: live hosts get their archive history, inside the same worker.
//!
//! The orchestrator depends only on the capability traits, so each stage can
//! be swapped for a test double.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use subreach_common::{Domain, HostReport, Hostname, ScanConfig, ScanError, ScanReport};
use subreach_plugins::{HttpClient, SubdomainSource, default_sources, sources_by_name};
use tokio::sync::Semaphore;
use tracing::info;

use crate::aggregator;
use crate::enricher::{HistoryLookup, WaybackEnricher};
use crate::prober::{HttpCheck, HttpProbe, Prober};
use crate::resolver::{DnsCheck, PublicResolver};

/// Called once per probed hostname.
pub type ProbeCallback = Arc<dyn Fn(&Domain, &HostReport) + Send + Sync>;

pub struct ScanOrchestrator {
    sources: Vec<Arc<dyn SubdomainSource>>,
    prober: Prober,
    history: Option<Arc<dyn HistoryLookup>>,
    cfg: ScanConfig,
    probe_slots: Arc<Semaphore>,
    on_probe_done: Option<ProbeCallback>,
}

impl ScanOrchestrator {
    pub fn new(
        sources: Vec<Arc<dyn SubdomainSource>>,
        dns: Arc<dyn DnsCheck>,
        http: Arc<dyn HttpCheck>,
        cfg: &ScanConfig,
    ) -> Self {
        Self {
            sources,
            prober: Prober::new(dns, http),
            history: None,
            cfg: cfg.clone(),
            probe_slots: Arc::new(Semaphore::new(cfg.probe_concurrency.max(1))),
            on_probe_done: None,
        }
    }

    /// Builds the production graph: public providers, public resolvers and the
    /// Wayback Machine, all over one shared connection pool.
    pub fn from_config(cfg: &ScanConfig) -> Result<Self, ScanError> {
        let client = HttpClient::new(cfg)?;

        let sources = match &cfg.sources {
            Some(names) => sources_by_name(&client, names)?,
            None => default_sources(&client),
        };
        let dns = Arc::new(PublicResolver::from_config(cfg));
        let http = Arc::new(HttpProbe::new(client.inner().clone(), cfg.http_timeout));

        let mut orchestrator = Self::new(sources, dns, http, cfg);
        if cfg.history {
            orchestrator = orchestrator.with_history(Arc::new(WaybackEnricher::new(client)));
        }
        Ok(orchestrator)
    }

    pub fn with_history(mut self, history: Arc<dyn HistoryLookup>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_progress(mut self, callback: ProbeCallback) -> Self {
        self.on_probe_done = Some(callback);
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Runs the full pipeline for `domain`. Never fails: every stage degrades
    /// to "nothing found" instead.
    pub async fn scan(&self, domain: &Domain) -> ScanReport {
        let started = Instant::now();
        let mut report = ScanReport::new(domain.clone());

        info!("Querying {} sources for {domain}", self.sources.len());
        let collected = aggregator::collect(domain, &self.sources, self.cfg.source_budget()).await;
        report.candidates_seen = collected.candidates_seen;

        if collected.hostnames.is_empty() {
            info!("No subdomains found for {domain}");
            report.elapsed = started.elapsed();
            return report;
        }

        info!(
            "Probing {} unique subdomains of {domain}",
            collected.hostnames.len()
        );
        let hosts: Vec<HostReport> = stream::iter(collected.hostnames)
            .map(|host| self.examine(domain, host))
            .buffer_unordered(self.cfg.probe_concurrency.max(1))
            .collect()
            .await;

        for host in hosts {
            report.insert(host);
        }
        report.elapsed = started.elapsed();

        info!(
            "{domain}: {} live, {} dns-only, {} unresolvable in {:.2?}",
            report.live().count(),
            report.dns_only().count(),
            report.unresolvable().count(),
            report.elapsed
        );
        report
    }

    /// Scans every domain, at most `domain_concurrency` at a time.
    /// Reports come back in input order.
    pub async fn scan_all(&self, domains: &[Domain]) -> Result<Vec<ScanReport>, ScanError> {
        if domains.is_empty() {
            return Err(ScanError::NoInput);
        }

        Ok(stream::iter(domains)
            .map(|domain| self.scan(domain))
            .buffered(self.cfg.domain_concurrency.max(1))
            .collect()
            .await)
    }

    async fn examine(&self, domain: &Domain, host: Hostname) -> HostReport {
        // The pool is never closed, so a permit is always granted.
        let _slot = self.probe_slots.acquire().await.ok();
        let result = self.prober.probe(&host).await;

        let history = match (&self.history, result.url()) {
            (Some(history), Some(url)) => history.lookup_history(url, self.cfg.recency_years).await,
            _ => None,
        };

        let report = HostReport::new(host, result).with_history(history);
        if let Some(callback) = &self.on_probe_done {
            callback(domain, &report);
        }
        report
    }
}
