//! Search endpoint configuration.

use anyhow::Context;
use common::search_const::{DEFAULT_SEARCH_ENDPOINT, SEARCH_ENDPOINT_ENV};
use reqwest::Url;


#[derive(Debug, Clone, PartialEq)]
pub struct SearchEndpointConfig {
    pub url: Url,
}

impl SearchEndpointConfig {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let url = Url::parse(url).with_context(|| format!("invalid search endpoint url: {url:?}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("search endpoint must be http or https, got {:?}", url.scheme());
        }
        Ok(Self { url })
    }

    /// Reads `PRODUCT_SEARCH_ENDPOINT`, falling back to the local development service.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_env_value(std::env::var(SEARCH_ENDPOINT_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> anyhow::Result<Self> {
        let raw = value.unwrap_or(DEFAULT_SEARCH_ENDPOINT.to_string());
        Self::new(raw.trim()).with_context(|| format!("{SEARCH_ENDPOINT_ENV} is not usable"))
    }
}
