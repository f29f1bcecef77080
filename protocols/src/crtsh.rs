//! crt.sh certificate-transparency search (`output=json`).

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CertEntry {
    #[serde(default)]
    name_value: Option<String>,
    #[serde(default)]
    common_name: Option<String>,
}

/// Extracts every name from the `name_value` and `common_name` fields.
///
/// Both fields may hold several names separated by newlines.
pub fn parse_names(body: &str) -> anyhow::Result<Vec<String>> {
    let entries: Vec<CertEntry> =
        serde_json::from_str(body).context("decoding crt.sh response")?;

    let names = entries
        .into_iter()
        .flat_map(|entry| [entry.name_value, entry.common_name])
        .flatten()
        .flat_map(|field| {
            field
                .lines()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    Ok(names)
}
