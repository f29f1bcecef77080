//! Shared HTTP client.
//!
//! A single connection pool is built once per run and cloned into every
//! source and probe worker. Cloning is cheap: `reqwest::Client` is an `Arc`
//! around the pool.

use std::time::Duration;

use anyhow::{Context, anyhow, bail};
use rand::Rng;
use reqwest::{Client, StatusCode, redirect::Policy};
use subreach_common::config::RETRY_JITTER_DIVISOR;
use subreach_common::{ScanConfig, ScanError};
use tracing::debug;

const MAX_REDIRECTS: usize = 10;
const POOL_IDLE_PER_HOST: usize = 32;
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
    attempts: u32,
    retry_pause: Duration,
}

impl HttpClient {
    pub fn new(cfg: &ScanConfig) -> Result<Self, ScanError> {
        let client = Client::builder()
            .user_agent(cfg.user_agent.clone())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .danger_accept_invalid_certs(cfg.accept_invalid_certs)
            .pool_max_idle_per_host(POOL_IDLE_PER_HOST)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| ScanError::Client(e.to_string()))?;

        Ok(Self::from_client(client, cfg))
    }

    pub fn from_client(client: Client, cfg: &ScanConfig) -> Self {
        Self {
            client,
            timeout: cfg.source_timeout,
            attempts: cfg.source_attempts.max(1),
            retry_pause: cfg.retry_pause,
        }
    }

    /// The underlying pool, for callers that issue their own requests.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// GETs `url` and returns the body.
    ///
    /// Transport errors and 5xx answers are retried up to the attempt budget;
    /// any other non-2xx status fails immediately.
    pub async fn get_text(&self, url: &str) -> anyhow::Result<String> {
        let mut last_error = anyhow!("no attempt made for {url}");

        for attempt in 1..=self.attempts {
            if attempt > 1 {
                tokio::time::sleep(self.pause_with_jitter()).await;
            }

            debug!("GET {url} (attempt {attempt}/{})", self.attempts);
            let response = match self.client.get(url).timeout(self.timeout).send().await {
                Ok(response) => response,
                Err(e) => {
                    last_error = anyhow::Error::new(e).context(format!("requesting {url}"));
                    continue;
                }
            };

            let status: StatusCode = response.status();
            if status.is_server_error() {
                last_error = anyhow!("{url} answered {status}");
                continue;
            }
            if !status.is_success() {
                bail!("{url} answered {status}");
            }

            return response
                .text()
                .await
                .with_context(|| format!("reading body of {url}"));
        }

        Err(last_error)
    }

    fn pause_with_jitter(&self) -> Duration {
        let base = self.retry_pause.as_millis() as u64;
        let jitter = rand::rng().random_range(0..=base / u64::from(RETRY_JITTER_DIVISOR));
        Duration::from_millis(base + jitter)
    }
}
