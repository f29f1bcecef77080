//! # Candidate Aggregation
//!
//! Fans a domain out to every [`SubdomainSource`] at once and merges what comes
//! back into one deduplicated set of [`Hostname`]s.
//!
//! Each source runs in its own task under a hard time budget and reports over a
//! channel; the collecting task is the only owner of the merged set.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;
use std::time::Duration;

use subreach_common::{Domain, Hostname};
use subreach_plugins::SubdomainSource;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Everything gathered for one domain.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Collected {
    pub hostnames: BTreeSet<Hostname>,
    /// Raw candidates received, valid or not, duplicates included.
    pub candidates_seen: usize,
    /// Valid hostnames contributed by each source, before cross-source dedup.
    pub per_source: BTreeMap<String, usize>,
}

impl Collected {
    fn merge(&mut self, domain: &Domain, source: String, candidates: HashSet<String>) {
        self.candidates_seen += candidates.len();

        let valid: BTreeSet<Hostname> = candidates
            .iter()
            .filter_map(|raw| Hostname::normalize(raw, domain))
            .collect();

        debug!(
            "{source}: {} of {} candidates valid for {domain}",
            valid.len(),
            candidates.len()
        );
        *self.per_source.entry(source).or_default() += valid.len();
        self.hostnames.extend(valid);
    }
}

/// Queries all `sources` concurrently and merges their candidates.
///
/// Completes once every source has answered, failed, or run past `budget`.
/// Failing, hanging or panicking sources contribute nothing and never affect
/// the others.
pub async fn collect(
    domain: &Domain,
    sources: &[Arc<dyn SubdomainSource>],
    budget: Duration,
) -> Collected {
    let (tx, mut rx) = mpsc::channel::<(String, HashSet<String>)>(sources.len().max(1));
    let mut tasks = JoinSet::new();

    for source in sources {
        let source = Arc::clone(source);
        let domain = domain.clone();
        let tx = tx.clone();

        tasks.spawn(async move {
            let name = source.name().to_string();
            let candidates = match tokio::time::timeout(budget, source.fetch_soft(&domain)).await {
                Ok(candidates) => candidates,
                Err(_) => {
                    warn!("{name} timed out after {budget:?} for {domain}");
                    HashSet::new()
                }
            };
            let _ = tx.send((name, candidates)).await;
        });
    }
    drop(tx);

    let mut collected = Collected::default();
    while let Some((name, candidates)) = rx.recv().await {
        collected.merge(domain, name, candidates);
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            warn!("source task for {domain} aborted: {e}");
        }
    }

    collected
}
