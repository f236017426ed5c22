//! Suggestion trait and the Ahunter HTTP client.

use std::time::Duration;

use addrbook_core::SuggestionsResponse;
use async_trait::async_trait;
use reqwest::Url;

use crate::{Error, Result};

/// Default Ahunter suggest endpoint.
pub const DEFAULT_BASE_URL: &str = "http://ahunter.ru/site/suggest/address";

/// Source of canonical address suggestions.
#[async_trait]
pub trait AddressSuggester: Send + Sync {
    /// Suggestions for `query`, in the order the service returned them.
    async fn suggestions(&self, query: &str) -> Result<Vec<String>>;

    /// `true` iff `candidate` is among its own suggestions.
    async fn is_valid(&self, candidate: &str) -> Result<bool> {
        let suggestions = self.suggestions(candidate).await?;
        Ok(suggestions.iter().any(|s| s == candidate))
    }
}

/// Client for the Ahunter address suggest API.
///
/// One GET per call; no caching or retries. Response status is not checked,
/// so an error page fails at JSON decoding.
#[derive(Clone, Debug)]
pub struct AhunterClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AhunterClient {
    /// Create a client for `base_url`. `timeout` of `None` waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    /// Build the request URL: `{base}?output=json;query={query}`.
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(Some(&format!("output=json;query={query}")));
        url
    }
}

#[async_trait]
impl AddressSuggester for AhunterClient {
    async fn suggestions(&self, query: &str) -> Result<Vec<String>> {
        let url = self.request_url(query);
        log::debug!("Requesting address suggestions: {url}");

        let response = self.http.get(url).send().await.map_err(|e| {
            log::warn!("Suggestion service unreachable: {e}");
            Error::Http(e)
        })?;

        let body: SuggestionsResponse = response.json().await.map_err(|e| {
            log::warn!("Suggestion service returned an unreadable body: {e}");
            Error::Http(e)
        })?;

        Ok(body.into_values())
    }
}
