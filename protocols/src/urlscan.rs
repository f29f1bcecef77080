//! urlscan.io search API (`/api/v1/search/?q=domain:<d>`).

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Search {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    page: Option<Section>,
    #[serde(default)]
    task: Option<Section>,
}

#[derive(Debug, Deserialize)]
struct Section {
    #[serde(default)]
    domain: Option<String>,
}

/// Collects `results[].page.domain` and `results[].task.domain`.
pub fn parse_domains(body: &str) -> anyhow::Result<Vec<String>> {
    let search: Search = serde_json::from_str(body).context("decoding urlscan response")?;

    Ok(search
        .results
        .into_iter()
        .flat_map(|r| [r.page, r.task])
        .flatten()
        .filter_map(|section| section.domain)
        .collect())
}
