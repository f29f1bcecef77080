//! A data provider configured by endpoint template and response format.
//!
//! Providers differ only in where they live and how their answer is decoded,
//! so one [`Provider`] type covers all of them and the registry supplies the
//! per-provider configuration.

use std::collections::HashSet;

use async_trait::async_trait;
use subreach_common::Domain;
use subreach_protocols::{anubis, crtsh, otx, pattern, urlscan};

use crate::SubdomainSource;
use crate::http::HttpClient;

/// Placeholder substituted with the scanned domain in endpoint templates.
pub const DOMAIN_PLACEHOLDER: &str = "{domain}";

/// How a provider's response body is turned into raw candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseFormat {
    /// crt.sh JSON array with `name_value` / `common_name`.
    CrtShJson,
    /// AlienVault OTX `passive_dns[].hostname`.
    OtxJson,
    /// urlscan.io `results[].page.domain` / `results[].task.domain`.
    UrlScanJson,
    /// JSON array of names.
    NameArrayJson,
    /// Names alone in an HTML table cell (`>name<`).
    CellPattern,
    /// Any domain-anchored run in free text.
    DomainPattern,
}

impl ResponseFormat {
    pub fn parse(&self, body: &str, domain: &Domain) -> anyhow::Result<Vec<String>> {
        match self {
            ResponseFormat::CrtShJson => crtsh::parse_names(body),
            ResponseFormat::OtxJson => otx::parse_hostnames(body),
            ResponseFormat::UrlScanJson => urlscan::parse_domains(body),
            ResponseFormat::NameArrayJson => anubis::parse_names(body),
            ResponseFormat::CellPattern => {
                let re = pattern::cell_anchored(domain.as_str())?;
                Ok(pattern::extract(&re, body))
            }
            ResponseFormat::DomainPattern => {
                let re = pattern::domain_anchored(domain.as_str())?;
                Ok(pattern::extract(&re, body))
            }
        }
    }
}

/// Static description of a provider, as listed in the registry.
#[derive(Clone, Copy, Debug)]
pub struct ProviderSpec {
    pub name: &'static str,
    pub url_template: &'static str,
    pub format: ResponseFormat,
}

#[derive(Clone, Debug)]
pub struct Provider {
    name: &'static str,
    url_template: String,
    format: ResponseFormat,
    client: HttpClient,
}

impl Provider {
    pub fn new(
        name: &'static str,
        url_template: impl Into<String>,
        format: ResponseFormat,
        client: HttpClient,
    ) -> Self {
        Self {
            name,
            url_template: url_template.into(),
            format,
            client,
        }
    }

    pub fn from_spec(spec: &ProviderSpec, client: HttpClient) -> Self {
        Self::new(spec.name, spec.url_template, spec.format, client)
    }

    pub fn url_for(&self, domain: &Domain) -> String {
        self.url_template.replace(DOMAIN_PLACEHOLDER, domain.as_str())
    }
}

#[async_trait]
impl SubdomainSource for Provider {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch(&self, domain: &Domain) -> anyhow::Result<HashSet<String>> {
        let body = self.client.get_text(&self.url_for(domain)).await?;
        let names = self.format.parse(&body, domain)?;
        Ok(names.into_iter().collect())
    }
}
