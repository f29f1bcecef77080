use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use subreach_common::{Domain, EnrichmentRecord, Hostname, ScanConfig};
use subreach_core::{DnsCheck, HistoryLookup, HttpCheck, ScanOrchestrator};
use subreach_plugins::SubdomainSource;

pub fn domain(name: &str) -> Domain {
    Domain::from_str(name).unwrap()
}

/// A source answering from a fixed list.
pub struct ListSource {
    pub name: &'static str,
    pub names: Vec<String>,
}

pub fn list_source(name: &'static str, names: &[&str]) -> Arc<dyn SubdomainSource> {
    Arc::new(ListSource {
        name,
        names: names.iter().map(|s| s.to_string()).collect(),
    })
}

#[async_trait]
impl SubdomainSource for ListSource {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch(&self, _domain: &Domain) -> anyhow::Result<HashSet<String>> {
        Ok(self.names.iter().cloned().collect())
    }
}

/// A source that always errors.
pub struct BrokenSource;

#[async_trait]
impl SubdomainSource for BrokenSource {
    fn name(&self) -> &str {
        "broken"
    }

    async fn fetch(&self, domain: &Domain) -> anyhow::Result<HashSet<String>> {
        anyhow::bail!("upstream refused {domain}")
    }
}

/// Resolves exactly the listed hostnames.
pub struct ZoneDns(pub HashSet<String>);

impl ZoneDns {
    pub fn with(names: &[&str]) -> Arc<Self> {
        Arc::new(Self(names.iter().map(|s| s.to_string()).collect()))
    }
}

#[async_trait]
impl DnsCheck for ZoneDns {
    async fn is_resolvable(&self, host: &Hostname) -> bool {
        self.0.contains(host.as_str())
    }
}

/// Responds on exactly the listed URLs and remembers every request.
#[derive(Default)]
pub struct WebFarm {
    live: HashSet<String>,
    pub requests: Mutex<Vec<String>>,
}

impl WebFarm {
    pub fn serving(urls: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            live: urls.iter().map(|s| s.to_string()).collect(),
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl HttpCheck for WebFarm {
    async fn responds(&self, url: &str) -> bool {
        self.requests.lock().unwrap().push(url.to_string());
        self.live.contains(url)
    }
}

/// Archive with a fixed year per URL, applying the same recency rule as the real one.
#[derive(Default)]
pub struct Archive {
    years: HashMap<String, i32>,
    pub current_year: i32,
    pub lookups: Mutex<Vec<String>>,
}

impl Archive {
    pub fn with(current_year: i32, entries: &[(&str, i32)]) -> Arc<Self> {
        Arc::new(Self {
            years: entries.iter().map(|(u, y)| (u.to_string(), *y)).collect(),
            current_year,
            lookups: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl HistoryLookup for Archive {
    async fn lookup_history(&self, url: &str, recency_years: i32) -> Option<EnrichmentRecord> {
        self.lookups.lock().unwrap().push(url.to_string());
        let year = *self.years.get(url)?;
        (year >= self.current_year - recency_years).then(|| EnrichmentRecord {
            url: format!("http://web.archive.org/web/{year}0101000000/{url}"),
            timestamp: format!("{year}0101000000"),
            year,
        })
    }
}

pub fn orchestrator(
    sources: Vec<Arc<dyn SubdomainSource>>,
    dns: Arc<dyn DnsCheck>,
    http: Arc<dyn HttpCheck>,
) -> ScanOrchestrator {
    ScanOrchestrator::new(sources, dns, http, &ScanConfig::default())
}
