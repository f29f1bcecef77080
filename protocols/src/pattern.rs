//! Pattern extraction for providers that answer with HTML or plain text.

use anyhow::Context;
use regex::{Regex, RegexBuilder};

/// Matches any `name.<domain>` run inside free text, case-insensitively.
pub fn domain_anchored(domain: &str) -> anyhow::Result<Regex> {
    RegexBuilder::new(&format!(r"[a-z0-9._-]+\.{}", regex::escape(domain)))
        .case_insensitive(true)
        .build()
        .context("building domain-anchored pattern")
}

/// Matches `>name.<domain><`, the shape of a hostname alone in an HTML table cell.
pub fn cell_anchored(domain: &str) -> anyhow::Result<Regex> {
    RegexBuilder::new(&format!(r">([a-z0-9._-]+\.{})<", regex::escape(domain)))
        .case_insensitive(true)
        .build()
        .context("building cell-anchored pattern")
}

/// Every match of `pattern` in `text`. When the pattern has a capture group,
/// the first group is returned instead of the whole match.
pub fn extract(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
        .map(|m| m.as_str().to_string())
        .collect()
}
