//! Wayback Machine availability API (`/wayback/available?url=<url>`).

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Availability {
    #[serde(default)]
    archived_snapshots: ArchivedSnapshots,
}

#[derive(Debug, Default, Deserialize)]
struct ArchivedSnapshots {
    #[serde(default)]
    closest: Option<Snapshot>,
}

/// The closest archived snapshot of a URL.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Snapshot {
    pub url: String,
    /// `YYYYMMDDhhmmss`
    pub timestamp: String,
}

impl Snapshot {
    /// The four-digit year prefix of the timestamp.
    pub fn year(&self) -> Option<i32> {
        self.timestamp.get(..4)?.parse().ok()
    }
}

/// Decodes the availability payload. `Ok(None)` means the URL was never archived.
pub fn parse_closest(body: &str) -> anyhow::Result<Option<Snapshot>> {
    let availability: Availability =
        serde_json::from_str(body).context("decoding wayback availability response")?;
    Ok(availability.archived_snapshots.closest)
}
