pub mod scan;

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use subreach_common::ScanConfig;

#[derive(Parser, Debug)]
#[command(name = "subreach")]
#[command(version)]
#[command(about = "Passive subdomain discovery with DNS and HTTP liveness probing.")]
pub struct CommandLine {
    /// File with one root domain per line
    #[arg(default_value = "domains.txt")]
    pub input: PathBuf,

    /// Directory for the result files
    #[arg(short, long, default_value = "subreach_results")]
    pub out: PathBuf,

    /// Hostnames probed at the same time per domain [default: 100]
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Domains scanned at the same time [default: 1]
    #[arg(long)]
    pub domain_concurrency: Option<usize>,

    /// Comma-separated subset of sources to query
    #[arg(short, long, value_delimiter = ',')]
    pub sources: Option<Vec<String>>,

    /// List the built-in sources and exit
    #[arg(long)]
    pub list_sources: bool,

    /// Skip the Wayback Machine lookup for live hosts
    #[arg(long)]
    pub no_history: bool,

    /// Oldest snapshot still reported, in years before the current one [default: 2]
    #[arg(long)]
    pub recency_years: Option<i32>,

    /// Liveness request timeout in seconds [default: 3]
    #[arg(long, value_name = "SECS")]
    pub http_timeout: Option<u64>,

    /// Per-request source timeout in seconds [default: 6]
    #[arg(long, value_name = "SECS")]
    pub source_timeout: Option<u64>,

    /// Per-query DNS timeout in milliseconds [default: 1000]
    #[arg(long, value_name = "MS")]
    pub dns_timeout: Option<u64>,

    /// Comma-separated nameserver addresses replacing the public defaults
    #[arg(long, value_delimiter = ',')]
    pub resolvers: Option<Vec<IpAddr>>,

    /// Accept invalid TLS certificates
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Print the reports as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Less output; repeat to hide per-host details
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Overlays the given options on the defaults.
    pub fn to_config(&self) -> ScanConfig {
        let mut cfg = ScanConfig::default();

        if let Some(n) = self.concurrency {
            cfg.probe_concurrency = n;
        }
        if let Some(n) = self.domain_concurrency {
            cfg.domain_concurrency = n;
        }
        if let Some(years) = self.recency_years {
            cfg.recency_years = years;
        }
        if let Some(secs) = self.http_timeout {
            cfg.http_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.source_timeout {
            cfg.source_timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = self.dns_timeout {
            cfg.dns_timeout = Duration::from_millis(ms);
        }
        if let Some(resolvers) = &self.resolvers {
            cfg.nameservers = resolvers.clone();
        }
        cfg.sources = self.sources.clone();
        cfg.history = !self.no_history;
        cfg.accept_invalid_certs = self.insecure;
        cfg
    }
}
