use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

pub const DEFAULT_NAMESERVERS: [IpAddr; 5] = [
    IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),
    IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)),
    IpAddr::V4(Ipv4Addr::new(8, 8, 4, 4)),
    IpAddr::V4(Ipv4Addr::new(1, 0, 0, 1)),
    IpAddr::V4(Ipv4Addr::new(9, 9, 9, 9)),
];

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Retry pauses are stretched by up to `1 / RETRY_JITTER_DIVISOR` of their base.
pub const RETRY_JITTER_DIVISOR: u32 = 4;

#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Upper bound on hostnames probed at the same time, shared across all domains.
    pub probe_concurrency: usize,
    /// Upper bound on domains scanned at the same time.
    pub domain_concurrency: usize,
    /// Per-request timeout for source providers.
    pub source_timeout: Duration,
    /// Attempts per source request, first try included.
    pub source_attempts: u32,
    pub retry_pause: Duration,
    /// Per-query DNS timeout.
    pub dns_timeout: Duration,
    pub nameservers: Vec<IpAddr>,
    /// Timeout of a single HTTPS or HTTP liveness request.
    pub http_timeout: Duration,
    /// Look up archive snapshots for live hosts.
    pub history: bool,
    pub recency_years: i32,
    pub user_agent: String,
    /// Accept self-signed or otherwise invalid certificates while probing.
    pub accept_invalid_certs: bool,
    /// Names of the sources to query. `None` queries all of them.
    pub sources: Option<Vec<String>>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            probe_concurrency: 100,
            domain_concurrency: 1,
            source_timeout: Duration::from_secs(6),
            source_attempts: 2,
            retry_pause: Duration::from_millis(500),
            dns_timeout: Duration::from_secs(1),
            nameservers: DEFAULT_NAMESERVERS.to_vec(),
            http_timeout: Duration::from_secs(3),
            history: true,
            recency_years: 2,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
            sources: None,
        }
    }
}

impl ScanConfig {
    /// Hard ceiling for one source, covering every attempt and the longest
    /// jittered pauses between them.
    pub fn source_budget(&self) -> Duration {
        let attempts = self.source_attempts.max(1);
        self.source_timeout * attempts + self.max_retry_pause() * (attempts - 1)
    }

    pub fn max_retry_pause(&self) -> Duration {
        self.retry_pause + self.retry_pause / RETRY_JITTER_DIVISOR
    }
}
