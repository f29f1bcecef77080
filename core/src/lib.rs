//! # Subreach Core
//!
//! The scanning pipeline: candidate [`aggregator`], DNS [`resolver`], liveness
//! [`prober`], archive [`enricher`], and the [`scanner`] that ties them together.

pub mod aggregator;
pub mod enricher;
pub mod prober;
pub mod resolver;
pub mod scanner;

pub use enricher::{HistoryLookup, WaybackEnricher};
pub use prober::{HttpCheck, HttpProbe, Prober};
pub use resolver::{DnsCheck, PublicResolver};
pub use scanner::{ProbeCallback, ScanOrchestrator};
