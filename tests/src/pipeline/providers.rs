#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use subreach_common::ScanConfig;
use subreach_core::{HistoryLookup, WaybackEnricher};
use subreach_plugins::{HttpClient, Provider, ResponseFormat, SubdomainSource};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::util::*;

fn client() -> HttpClient {
    let cfg = ScanConfig {
        source_timeout: Duration::from_secs(2),
        source_attempts: 2,
        retry_pause: Duration::from_millis(10),
        ..ScanConfig::default()
    };
    HttpClient::new(&cfg).unwrap()
}

/// Real providers against a mock server, with DNS and HTTP doubled out.
#[tokio::test]
async fn providers_feed_the_pipeline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/crtsh"))
        .and(query_param("q", "%.example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"name_value":"a.example.com\n*.b.example.com","common_name":"example.com"}]"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hostsearch"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("c.example.com,192.0.2.10\nb.example.com,192.0.2.11\n"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let sources: Vec<Arc<dyn SubdomainSource>> = vec![
        Arc::new(Provider::new(
            "crtsh",
            format!("{}/crtsh?q=%25.{{domain}}&output=json", server.uri()),
            ResponseFormat::CrtShJson,
            client(),
        )),
        Arc::new(Provider::new(
            "hackertarget",
            format!("{}/hostsearch?q={{domain}}", server.uri()),
            ResponseFormat::DomainPattern,
            client(),
        )),
        Arc::new(Provider::new(
            "flaky",
            format!("{}/flaky?q={{domain}}", server.uri()),
            ResponseFormat::NameArrayJson,
            client(),
        )),
    ];

    let scanner = orchestrator(
        sources,
        ZoneDns::with(&["a.example.com", "b.example.com"]),
        WebFarm::serving(&["https://a.example.com"]),
    );
    let report = scanner.scan(&domain("example.com")).await;

    let hosts: Vec<&str> = report.hosts.keys().map(|h| h.as_str()).collect();
    assert_eq!(hosts, vec!["a.example.com", "b.example.com", "c.example.com"]);
    assert_eq!(report.live_urls(), vec!["https://a.example.com"]);
}

#[tokio::test]
async fn wayback_enricher_plugs_into_the_pipeline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wayback/available"))
        .and(query_param("url", "https://a.example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"archived_snapshots":{"closest":{"url":"http://web.archive.org/web/20990101000000/https://a.example.com","timestamp":"20990101000000"}}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let enricher: Arc<dyn HistoryLookup> = Arc::new(WaybackEnricher::with_endpoint(
        client(),
        format!("{}/wayback/available", server.uri()),
    ));
    let scanner = orchestrator(
        vec![list_source("static", &["a.example.com", "b.example.com"])],
        ZoneDns::with(&["a.example.com", "b.example.com"]),
        WebFarm::serving(&["https://a.example.com"]),
    )
    .with_history(enricher);

    let report = scanner.scan(&domain("example.com")).await;

    let history = report.get("a.example.com").unwrap().history.clone().unwrap();
    assert_eq!(history.year, 2099);
    assert!(report.get("b.example.com").unwrap().history.is_none());
}
