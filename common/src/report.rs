//! Per-domain scan output.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use serde::Serialize;

use crate::hostname::Hostname;
use crate::probe::{HostReport, ProbeResult};
use crate::target::Domain;

/// The aggregate result of one domain's pipeline run.
#[derive(Clone, Debug, Serialize)]
pub struct ScanReport {
    pub domain: Domain,
    /// Raw candidates returned by all sources, before normalization.
    pub candidates_seen: usize,
    #[serde(serialize_with = "as_secs")]
    pub elapsed: Duration,
    pub hosts: BTreeMap<Hostname, HostReport>,
}

impl ScanReport {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            candidates_seen: 0,
            elapsed: Duration::ZERO,
            hosts: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, report: HostReport) {
        self.hosts.insert(report.hostname.clone(), report);
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn get(&self, hostname: &str) -> Option<&HostReport> {
        self.hosts.get(hostname)
    }

    pub fn live(&self) -> impl Iterator<Item = &HostReport> {
        self.hosts.values().filter(|r| r.result.is_live())
    }

    pub fn dns_only(&self) -> impl Iterator<Item = &HostReport> {
        self.hosts
            .values()
            .filter(|r| matches!(r.result, ProbeResult::DnsOnly))
    }

    pub fn unresolvable(&self) -> impl Iterator<Item = &HostReport> {
        self.hosts
            .values()
            .filter(|r| matches!(r.result, ProbeResult::Unresolvable))
    }

    /// Live URLs in hostname order.
    pub fn live_urls(&self) -> Vec<String> {
        self.live()
            .filter_map(|r| r.result.url().map(str::to_string))
            .collect()
    }

    /// Live and DNS-only lines, sorted, as written to the per-domain result file.
    pub fn output_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.hosts.values().filter_map(HostReport::output_line).collect();
        lines.sort();
        lines
    }

    /// `<live url> -> <archive url>` for every live host with history, sorted.
    pub fn history_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .live()
            .filter_map(|r| match (r.result.url(), &r.history) {
                (Some(url), Some(record)) => Some(format!("{url} -> {}", record.url)),
                _ => None,
            })
            .collect();
        lines.sort();
        lines
    }
}

/// Every live URL across `reports`, sorted and deduplicated.
pub fn live_urls(reports: &[ScanReport]) -> Vec<String> {
    reports
        .iter()
        .flat_map(ScanReport::live_urls)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

fn as_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
