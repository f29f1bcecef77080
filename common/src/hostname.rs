//! Candidate normalization.
//!
//! Sources hand back free text: wildcard certificate names, mixed case,
//! stray dots and plenty of garbage. [`Hostname::normalize`] is the only way to
//! turn such a candidate into a [`Hostname`], so every hostname in the pipeline
//! is a canonical, strict subdomain of its [`Domain`].

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use crate::target::Domain;

const MAX_LABEL_LEN: usize = 63;

/// A validated, lower-case, strict subdomain of some [`Domain`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Hostname(String);

impl Hostname {
    /// Canonicalizes `raw` and validates it against `domain`.
    ///
    /// Returns `None` when the candidate is not a strict subdomain of `domain`
    /// or any of its labels breaks the `[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?` grammar.
    pub fn normalize(raw: &str, domain: &Domain) -> Option<Self> {
        let lower = raw.trim().to_ascii_lowercase();
        let unwildcarded = lower.strip_prefix("*.").unwrap_or(&lower);
        let candidate = unwildcarded.trim_matches('.');

        if candidate.len() <= domain.len() || !candidate.ends_with(&domain.suffix()) {
            return None;
        }

        if !is_valid_name(candidate) {
            return None;
        }

        Some(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn https_url(&self) -> String {
        format!("https://{}", self.0)
    }

    pub fn http_url(&self) -> String {
        format!("http://{}", self.0)
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Hostname {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// True when `name` is a dot-separated sequence of valid labels.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };

    bytes.len() <= MAX_LABEL_LEN
        && first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}
