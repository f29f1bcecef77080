//! Liveness probing.
//!
//! A hostname is first gated on DNS, then tried over HTTPS and finally plain
//! HTTP. The result is always exactly one [`ProbeResult`]; network failures
//! only ever move a host to a weaker classification.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use subreach_common::{Hostname, ProbeResult, Scheme};
use tracing::debug;

use crate::resolver::DnsCheck;

/// Answers whether a URL serves a 2xx or 3xx response.
#[async_trait]
pub trait HttpCheck: Send + Sync {
    async fn responds(&self, url: &str) -> bool;
}

pub fn is_live_status(status: StatusCode) -> bool {
    (200..400).contains(&status.as_u16())
}

/// [`HttpCheck`] over a shared `reqwest` pool. Redirects follow the client's policy.
pub struct HttpProbe {
    client: Client,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    async fn status(&self, method: Method, url: &str) -> Option<StatusCode> {
        match self
            .client
            .request(method.clone(), url)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => Some(response.status()),
            Err(e) => {
                debug!("{method} {url} failed: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl HttpCheck for HttpProbe {
    async fn responds(&self, url: &str) -> bool {
        let status = match self.status(Method::HEAD, url).await {
            // Some servers refuse HEAD outright.
            Some(StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED) => {
                self.status(Method::GET, url).await
            }
            other => other,
        };
        status.is_some_and(is_live_status)
    }
}

/// Classifies hostnames as unresolvable, DNS-only or live.
#[derive(Clone)]
pub struct Prober {
    dns: Arc<dyn DnsCheck>,
    http: Arc<dyn HttpCheck>,
}

impl Prober {
    pub fn new(dns: Arc<dyn DnsCheck>, http: Arc<dyn HttpCheck>) -> Self {
        Self { dns, http }
    }

    pub async fn probe(&self, host: &Hostname) -> ProbeResult {
        if !self.dns.is_resolvable(host).await {
            return ProbeResult::Unresolvable;
        }

        for scheme in [Scheme::Https, Scheme::Http] {
            let candidate = ProbeResult::live(host, scheme);
            if let Some(url) = candidate.url()
                && self.http.responds(url).await
            {
                return candidate;
            }
        }

        ProbeResult::DnsOnly
    }
}
