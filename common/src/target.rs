//! # Scan Target Model
//!
//! Defines the root domains a scan runs against.
//!
//! Targets come from a newline-delimited list and may be written as:
//! * A bare domain (e.g., `example.com`).
//! * A URL-ish form (e.g., `https://www.example.com/`).
//!
//! Scheme prefixes, a leading `www.` and trailing slashes are stripped so that
//! every form above yields the same [`Domain`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::error::TargetError;
use crate::hostname;

/// A root domain, lower-cased and stripped of URL decoration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `.<domain>` suffix every subdomain of this domain ends with.
    pub fn suffix(&self) -> String {
        format!(".{}", self.0)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Domain {
    type Err = TargetError;

    /// Parses a string into a `Domain`.
    ///
    /// Supported formats:
    /// * **Bare**: "example.com", "Example.COM".
    /// * **Prefixed**: "http://example.com", "https://www.example.com", "www.example.com".
    /// * **Trailing slashes**: "example.com/", "https://example.com//".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = strip_decoration(s);

        if stripped.is_empty() {
            return Err(TargetError::Empty);
        }

        if !hostname::is_valid_name(&stripped) {
            return Err(TargetError::Invalid(s.trim().to_string()));
        }

        Ok(Self(stripped))
    }
}

fn strip_decoration(s: &str) -> String {
    let lower = s.trim().to_ascii_lowercase();
    let mut rest: &str = &lower;

    for scheme in ["https://", "http://"] {
        if let Some(tail) = rest.strip_prefix(scheme) {
            rest = tail;
            break;
        }
    }

    if let Some(tail) = rest.strip_prefix("www.") {
        rest = tail;
    }

    rest.trim_end_matches('/').to_string()
}

/// Parses a newline-delimited domain list.
///
/// Blank lines and `#` comments are ignored, unparsable lines are skipped with a
/// warning, and duplicates collapse onto their first occurrence.
pub fn parse_domain_list(text: &str) -> Vec<Domain> {
    let mut seen: HashSet<Domain> = HashSet::new();
    let mut domains = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match Domain::from_str(line) {
            Ok(domain) => {
                if seen.insert(domain.clone()) {
                    domains.push(domain);
                }
            }
            Err(e) => warn!("Skipping input line '{line}': {e}"),
        }
    }

    domains
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
