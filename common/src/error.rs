use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("empty domain")]
    Empty,
    #[error("invalid domain: {0}")]
    Invalid(String),
}

/// Conditions that abort a run. Per-source and per-host failures never end up here.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no domains to scan")]
    NoInput,
    #[error("failed to read input file {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build client: {0}")]
    Client(String),
    #[error("unknown source: {0}")]
    UnknownSource(String),
}
