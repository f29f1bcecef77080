use std::sync::Arc;

use subreach_common::ScanError;

use crate::SubdomainSource;
use crate::http::HttpClient;
use crate::provider::{Provider, ProviderSpec, ResponseFormat};

pub const PROVIDERS: [ProviderSpec; 7] = [
    ProviderSpec {
        name: "crtsh",
        url_template: "https://crt.sh/?q=%25.{domain}&output=json",
        format: ResponseFormat::CrtShJson,
    },
    ProviderSpec {
        name: "rapiddns",
        url_template: "https://rapiddns.io/subdomain/{domain}?full=1",
        format: ResponseFormat::CellPattern,
    },
    ProviderSpec {
        name: "hackertarget",
        url_template: "https://api.hackertarget.com/hostsearch/?q={domain}",
        format: ResponseFormat::DomainPattern,
    },
    ProviderSpec {
        name: "alienvault",
        url_template: "https://otx.alienvault.com/api/v1/indicators/hostname/{domain}/passive_dns",
        format: ResponseFormat::OtxJson,
    },
    ProviderSpec {
        name: "urlscan",
        url_template: "https://urlscan.io/api/v1/search/?q=domain:{domain}&size=10000",
        format: ResponseFormat::UrlScanJson,
    },
    ProviderSpec {
        name: "anubis",
        url_template: "https://jldc.me/anubis/subdomains/{domain}",
        format: ResponseFormat::NameArrayJson,
    },
    ProviderSpec {
        name: "wayback",
        url_template: "http://web.archive.org/cdx/search/cdx?url=*.{domain}/*&output=txt&fl=original&collapse=urlkey",
        format: ResponseFormat::DomainPattern,
    },
];

pub fn source_names() -> impl Iterator<Item = &'static str> {
    PROVIDERS.iter().map(|spec| spec.name)
}

/// Every built-in provider, sharing `client`.
pub fn default_sources(client: &HttpClient) -> Vec<Arc<dyn SubdomainSource>> {
    PROVIDERS
        .iter()
        .map(|spec| Arc::new(Provider::from_spec(spec, client.clone())) as Arc<dyn SubdomainSource>)
        .collect()
}

/// The built-in providers named in `names`, in registry order.
pub fn sources_by_name(
    client: &HttpClient,
    names: &[String],
) -> Result<Vec<Arc<dyn SubdomainSource>>, ScanError> {
    if let Some(unknown) = names
        .iter()
        .find(|name| !PROVIDERS.iter().any(|spec| spec.name.eq_ignore_ascii_case(name)))
    {
        return Err(ScanError::UnknownSource(unknown.clone()));
    }

    Ok(PROVIDERS
        .iter()
        .filter(|spec| names.iter().any(|name| spec.name.eq_ignore_ascii_case(name)))
        .map(|spec| Arc::new(Provider::from_spec(spec, client.clone())) as Arc<dyn SubdomainSource>)
        .collect())
}
