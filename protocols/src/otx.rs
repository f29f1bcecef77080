//! AlienVault OTX passive DNS (`/indicators/hostname/<d>/passive_dns`).

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PassiveDns {
    #[serde(default)]
    passive_dns: Vec<PassiveDnsRecord>,
}

#[derive(Debug, Deserialize)]
struct PassiveDnsRecord {
    #[serde(default)]
    hostname: Option<String>,
}

pub fn parse_hostnames(body: &str) -> anyhow::Result<Vec<String>> {
    let parsed: PassiveDns =
        serde_json::from_str(body).context("decoding OTX passive DNS response")?;

    Ok(parsed
        .passive_dns
        .into_iter()
        .filter_map(|record| record.hostname)
        .collect())
}
