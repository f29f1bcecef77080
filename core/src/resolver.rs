use std::future::Future;
use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioResolver;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::rr::RecordType;
use subreach_common::{Hostname, ScanConfig};
use tracing::debug;

const DNS_PORT: u16 = 53;

/// Record types that count as "this name exists", in query order.
pub const RECORD_TYPES: [RecordType; 4] = [
    RecordType::A,
    RecordType::CNAME,
    RecordType::AAAA,
    RecordType::MX,
];

/// Answers whether a hostname has any DNS presence at all.
#[async_trait]
pub trait DnsCheck: Send + Sync {
    async fn is_resolvable(&self, host: &Hostname) -> bool;
}

/// DNS existence checks against a fixed pool of public resolvers.
pub struct PublicResolver {
    resolver: TokioResolver,
    query_timeout: Duration,
}

impl PublicResolver {
    pub fn new(nameservers: &[IpAddr], query_timeout: Duration) -> Self {
        let group = NameServerConfigGroup::from_ips_clear(nameservers, DNS_PORT, true);
        let config = ResolverConfig::from_parts(None, vec![], group);

        let mut opts = ResolverOpts::default();
        opts.timeout = query_timeout;
        opts.attempts = 1;

        let resolver =
            TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
                .with_options(opts)
                .build();

        Self {
            resolver,
            query_timeout,
        }
    }

    pub fn from_config(cfg: &ScanConfig) -> Self {
        Self::new(&cfg.nameservers, cfg.dns_timeout)
    }

    async fn has_records(&self, host: &Hostname, record_type: RecordType) -> bool {
        let lookup = self.resolver.lookup(host.as_str(), record_type);
        match tokio::time::timeout(self.query_timeout, lookup).await {
            Ok(Ok(answer)) => answer.iter().next().is_some(),
            Ok(Err(e)) => {
                debug!("{record_type} lookup for {host} failed: {e}");
                false
            }
            Err(_) => {
                debug!("{record_type} lookup for {host} timed out");
                false
            }
        }
    }
}

#[async_trait]
impl DnsCheck for PublicResolver {
    async fn is_resolvable(&self, host: &Hostname) -> bool {
        first_answering_type(move |record_type| self.has_records(host, record_type)).await
    }
}

/// Runs `query` over [`RECORD_TYPES`] in order, stopping at the first `true`.
async fn first_answering_type<F, Fut>(mut query: F) -> bool
where
    F: FnMut(RecordType) -> Fut,
    Fut: Future<Output = bool>,
{
    for record_type in RECORD_TYPES {
        if query(record_type).await {
            return true;
        }
    }
    false
}
