use std::fmt;

use serde::Serialize;

use crate::hostname::Hostname;

/// The scheme a live hostname answered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Https,
    Http,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Liveness classification of one hostname.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProbeResult {
    /// No A, CNAME, AAAA or MX record answered.
    Unresolvable,
    /// Resolves, but neither HTTPS nor HTTP produced a 2xx/3xx response.
    DnsOnly,
    /// Answered with a status in `[200, 400)`.
    Live { scheme: Scheme, url: String },
}

impl ProbeResult {
    pub fn live(host: &Hostname, scheme: Scheme) -> Self {
        let url = match scheme {
            Scheme::Https => host.https_url(),
            Scheme::Http => host.http_url(),
        };
        ProbeResult::Live { scheme, url }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, ProbeResult::Live { .. })
    }

    pub fn is_resolvable(&self) -> bool {
        !matches!(self, ProbeResult::Unresolvable)
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ProbeResult::Live { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ProbeResult::Unresolvable => "unresolvable",
            ProbeResult::DnsOnly => "dns-only",
            ProbeResult::Live { scheme: Scheme::Https, .. } => "live-https",
            ProbeResult::Live { scheme: Scheme::Http, .. } => "live-http",
        }
    }
}

/// The closest archived snapshot of a live URL, kept only when recent enough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnrichmentRecord {
    pub url: String,
    pub timestamp: String,
    pub year: i32,
}

/// Everything the pipeline learned about one hostname.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HostReport {
    pub hostname: Hostname,
    pub result: ProbeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<EnrichmentRecord>,
}

impl HostReport {
    pub fn new(hostname: Hostname, result: ProbeResult) -> Self {
        Self {
            hostname,
            result,
            history: None,
        }
    }

    /// Attaches archive history. Ignored unless the host is live.
    pub fn with_history(mut self, history: Option<EnrichmentRecord>) -> Self {
        if self.result.is_live() {
            self.history = history;
        }
        self
    }

    /// Output form: the live URL, `dns-only://<host>`, or `None` when unresolvable.
    pub fn output_line(&self) -> Option<String> {
        match &self.result {
            ProbeResult::Live { url, .. } => Some(url.clone()),
            ProbeResult::DnsOnly => Some(format!("dns-only://{}", self.hostname)),
            ProbeResult::Unresolvable => None,
        }
    }
}
