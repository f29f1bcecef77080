//! Anubis subdomain database: a bare JSON array of names.

use anyhow::Context;

pub fn parse_names(body: &str) -> anyhow::Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(body).context("decoding Anubis response")
}
