#![cfg(test)]
use std::sync::Arc;

use subreach_common::report::live_urls;
use subreach_common::{ProbeResult, ScanError, Scheme};
use subreach_plugins::SubdomainSource;

use crate::util::*;

#[tokio::test]
async fn https_and_http_fallback_end_to_end() {
    let scanner = orchestrator(
        vec![list_source(
            "mock",
            &["a.example.com", "*.b.example.com", "not-a-subdomain.com"],
        )],
        ZoneDns::with(&["a.example.com", "b.example.com"]),
        WebFarm::serving(&["https://a.example.com", "http://b.example.com"]),
    );

    let report = scanner.scan(&domain("example.com")).await;

    let tags: Vec<(&str, &str)> = report
        .hosts
        .values()
        .map(|h| (h.hostname.as_str(), h.result.tag()))
        .collect();
    assert_eq!(
        tags,
        vec![
            ("a.example.com", "live-https"),
            ("b.example.com", "live-http")
        ]
    );
}

/// The canonical run: one source, one host per liveness class.
#[tokio::test]
async fn scan_classifies_every_discovered_host() {
    let scanner = orchestrator(
        vec![list_source(
            "static",
            &["a.example.com", "b.example.com", "*.c.example.com", "dead.example.com", "cdn.other.net"],
        )],
        ZoneDns::with(&["a.example.com", "b.example.com", "c.example.com"]),
        WebFarm::serving(&["https://a.example.com", "http://b.example.com"]),
    );

    let report = scanner.scan(&domain("example.com")).await;

    assert_eq!(report.len(), 4, "cdn.other.net must be filtered out");
    assert_eq!(
        report.get("a.example.com").unwrap().result,
        ProbeResult::Live {
            scheme: Scheme::Https,
            url: "https://a.example.com".into()
        }
    );
    assert_eq!(
        report.get("b.example.com").unwrap().result,
        ProbeResult::Live {
            scheme: Scheme::Http,
            url: "http://b.example.com".into()
        }
    );
    assert_eq!(report.get("c.example.com").unwrap().result, ProbeResult::DnsOnly);
    assert_eq!(
        report.get("dead.example.com").unwrap().result,
        ProbeResult::Unresolvable
    );
    assert_eq!(
        report.output_lines(),
        vec![
            "dns-only://c.example.com",
            "http://b.example.com",
            "https://a.example.com"
        ]
    );
}

#[tokio::test]
async fn nothing_discovered_means_empty_report() {
    let scanner = orchestrator(
        vec![list_source("empty", &[])],
        ZoneDns::with(&[]),
        WebFarm::serving(&[]),
    );

    let report = scanner.scan(&domain("example.com")).await;
    assert!(report.is_empty());
    assert!(report.output_lines().is_empty());
}

#[tokio::test]
async fn no_live_hosts_still_lists_every_host() {
    let http = WebFarm::serving(&[]);
    let scanner = orchestrator(
        vec![list_source("static", &["a.example.com", "b.example.com"])],
        ZoneDns::with(&["a.example.com"]),
        http.clone(),
    );

    let report = scanner.scan(&domain("example.com")).await;

    assert_eq!(report.len(), 2);
    assert_eq!(report.live().count(), 0);
    assert_eq!(report.dns_only().count(), 1);
    assert_eq!(report.unresolvable().count(), 1);
    // Only the resolvable host is ever probed over HTTP.
    assert_eq!(
        *http.requests.lock().unwrap(),
        vec!["https://a.example.com", "http://a.example.com"]
    );
}

#[tokio::test]
async fn broken_source_does_not_change_the_result() {
    let dns = ZoneDns::with(&["a.example.com", "b.example.com"]);
    let http = WebFarm::serving(&["https://a.example.com"]);
    let healthy = list_source("static", &["a.example.com", "b.example.com"]);

    let alone = orchestrator(vec![healthy.clone()], dns.clone(), http.clone())
        .scan(&domain("example.com"))
        .await;
    let with_broken: Vec<Arc<dyn SubdomainSource>> = vec![Arc::new(BrokenSource), healthy];
    let together = orchestrator(with_broken, dns, http)
        .scan(&domain("example.com"))
        .await;

    assert_eq!(alone.hosts, together.hosts);
}

#[tokio::test]
async fn duplicates_across_sources_are_probed_once() {
    let http = WebFarm::serving(&["https://a.example.com"]);
    let scanner = orchestrator(
        vec![
            list_source("one", &["a.example.com", "A.Example.com."]),
            list_source("two", &["*.a.example.com", "a.example.com"]),
        ],
        ZoneDns::with(&["a.example.com"]),
        http.clone(),
    );

    let report = scanner.scan(&domain("example.com")).await;

    assert_eq!(report.len(), 1);
    assert_eq!(*http.requests.lock().unwrap(), vec!["https://a.example.com"]);
}

#[tokio::test]
async fn history_is_attached_to_recent_live_hosts_only() {
    let archive = Archive::with(
        2026,
        &[
            ("https://a.example.com", 2025),
            ("http://b.example.com", 2019),
        ],
    );
    let scanner = orchestrator(
        vec![list_source(
            "static",
            &["a.example.com", "b.example.com", "c.example.com"],
        )],
        ZoneDns::with(&["a.example.com", "b.example.com", "c.example.com"]),
        WebFarm::serving(&["https://a.example.com", "http://b.example.com"]),
    )
    .with_history(archive.clone());

    let report = scanner.scan(&domain("example.com")).await;

    assert_eq!(report.get("a.example.com").unwrap().history.as_ref().unwrap().year, 2025);
    assert!(report.get("b.example.com").unwrap().history.is_none());
    assert!(report.get("c.example.com").unwrap().history.is_none());

    let mut looked_up = archive.lookups.lock().unwrap().clone();
    looked_up.sort();
    assert_eq!(looked_up, vec!["http://b.example.com", "https://a.example.com"]);
}

#[tokio::test]
async fn several_domains_are_scanned_independently() {
    let scanner = orchestrator(
        vec![list_source(
            "static",
            &["a.example.com", "a.example.org", "b.example.org"],
        )],
        ZoneDns::with(&["a.example.com", "a.example.org", "b.example.org"]),
        WebFarm::serving(&["https://a.example.com", "https://a.example.org"]),
    );

    let reports = scanner
        .scan_all(&[domain("example.com"), domain("example.org")])
        .await
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].len(), 1);
    assert_eq!(reports[1].len(), 2);
    assert_eq!(
        live_urls(&reports),
        vec!["https://a.example.com", "https://a.example.org"]
    );
}

#[tokio::test]
async fn empty_domain_list_is_rejected() {
    let scanner = orchestrator(vec![], ZoneDns::with(&[]), WebFarm::serving(&[]));
    assert!(matches!(scanner.scan_all(&[]).await, Err(ScanError::NoInput)));
}
