//! DuckDuckGo news search client
//!
//! Fetching news is a two-step flow: request the search page to obtain the
//! `vqd` request token for the query, then call the `news.js` JSON endpoint
//! with that token. Region is pinned to worldwide and safe search is on.

use regex::Regex;
use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::error::SearchError;
use crate::types::{DdgNewsResponse, DdgNewsResult};

const REGION_WORLDWIDE: &str = "wt-wt";
const SAFE_SEARCH_ON: &str = "1";

/// DuckDuckGo news client
pub struct DuckDuckGoClient {
    client: Client,
    base_url: String,
}

impl DuckDuckGoClient {
    /// Create a new client with the provider defaults
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .user_agent("Mozilla/5.0 (compatible; Newsdesk/1.0)")
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: "https://duckduckgo.com".to_string(),
        }
    }

    /// Override the provider base url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search recent news for a query
    ///
    /// Returns at most `max_results` raw records. Fields arrive exactly as
    /// the provider sent them; normalization happens downstream.
    #[instrument(skip(self))]
    pub async fn news(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<DdgNewsResult>, SearchError> {
        let vqd = self.fetch_vqd(query).await?;

        let url = format!(
            "{}/news.js?l={}&o=json&noamp=1&q={}&vqd={}&p={}",
            self.base_url,
            REGION_WORLDWIDE,
            urlencoding::encode(query),
            vqd,
            SAFE_SEARCH_ON
        );

        debug!("Fetching DuckDuckGo news: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let payload: DdgNewsResponse = response
            .json()
            .await
            .map_err(|e| SearchError::ParseError(e.to_string()))?;

        info!(
            "DuckDuckGo returned {} news results for '{}'",
            payload.results.len(),
            query
        );

        let mut results = payload.results;
        results.truncate(max_results);

        // The provider wraps some addresses in redirect links.
        for result in &mut results {
            result.url = result.url.take().map(unwrap_redirect);
            result.link = result.link.take().map(unwrap_redirect);
        }

        Ok(results)
    }

    /// Obtain the `vqd` request token for a query
    async fn fetch_vqd(&self, query: &str) -> Result<String, SearchError> {
        let url = format!(
            "{}/?q={}&iar=news&ia=news",
            self.base_url,
            urlencoding::encode(query)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::ApiError {
                status: response.status().as_u16(),
                message: format!("token page returned status {}", response.status()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        extract_vqd(&body).ok_or_else(|| SearchError::TokenMissing(query.to_string()))
    }
}

impl Default for DuckDuckGoClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the `vqd` token from a search page
fn extract_vqd(body: &str) -> Option<String> {
    let pattern = Regex::new(r#"vqd=["']?([\d-]+)"#).ok()?;
    pattern
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Unwrap DuckDuckGo redirect links
///
/// Results sometimes arrive as `//duckduckgo.com/l/?uddg=<encoded>&rut=...`;
/// the real destination is the percent-encoded `uddg` parameter.
fn unwrap_redirect(address: String) -> String {
    let Some(pos) = address.find("uddg=") else {
        return address;
    };
    let start = pos + 5;
    let end = address[start..]
        .find('&')
        .map(|i| start + i)
        .unwrap_or(address.len());
    match urlencoding::decode(&address[start..end]) {
        Ok(decoded) if !decoded.is_empty() => decoded.into_owned(),
        _ => address,
    }
}
