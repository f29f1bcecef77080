//! # Subreach Common
//!
//! Shared data model for the discovery-and-liveness pipeline.
//!
//! * **[`target`]**: root [`Domain`]s and input-list parsing.
//! * **[`hostname`]**: the candidate normalizer and the [`Hostname`] it produces.
//! * **[`probe`]**: liveness classification and archive enrichment records.
//! * **[`report`]**: per-domain [`ScanReport`]s and cross-domain summaries.

pub mod config;
pub mod error;
pub mod hostname;
pub mod probe;
pub mod report;
pub mod target;

pub use config::ScanConfig;
pub use error::{ScanError, TargetError};
pub use hostname::Hostname;
pub use probe::{EnrichmentRecord, HostReport, ProbeResult, Scheme};
pub use report::ScanReport;
pub use target::Domain;
