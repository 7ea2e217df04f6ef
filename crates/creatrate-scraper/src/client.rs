//! Best-effort brand lookup against a public search page.

use std::time::Duration;

use creatrate_core::{BrandDetails, BrandLookupConfig};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use crate::classify::classify_text;
use crate::error::ScraperError;

/// Literal suffix appended to the encoded brand name in the search query.
const QUERY_SUFFIX: &str = "+brand+overview";

/// Classifies brands by scanning a search result page for size and niche
/// keywords.
///
/// One GET per lookup, bounded by the configured timeout, never retried.
/// Results depend on live third-party content and on whether the search
/// engine serves a real page or an anti-bot interstitial, so the same brand
/// can classify differently from one call to the next.
#[derive(Debug, Clone)]
pub struct BrandClassifier {
    client: Client,
    search_url: String,
}

impl BrandClassifier {
    /// Builds the HTTP client with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &BrandLookupConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            search_url: config.search_url.trim_end_matches('?').to_string(),
        })
    }

    pub(crate) fn query_url(&self, brand_name: &str) -> String {
        let encoded = utf8_percent_encode(brand_name, NON_ALPHANUMERIC);
        format!("{}?q={encoded}{QUERY_SUFFIX}", self.search_url)
    }

    /// Fetches the raw search result page for `brand_name`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on connection failure, timeout, or an
    ///   unreadable body.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx response.
    pub async fn fetch_search_page(&self, brand_name: &str) -> Result<String, ScraperError> {
        let url = self.query_url(brand_name);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }

    /// Estimates a brand's size and niche. Never fails: any lookup error
    /// yields [`BrandDetails::default`] (`startup`, `general`).
    pub async fn estimate_brand_details(&self, brand_name: &str) -> BrandDetails {
        match self.fetch_search_page(brand_name).await {
            Ok(body) => {
                let details = classify_text(&body);
                tracing::debug!(
                    brand = brand_name,
                    brand_size = %details.brand_size,
                    niche = %details.niche,
                    "brand classified"
                );
                details
            }
            Err(e) => {
                tracing::warn!(
                    brand = brand_name,
                    timeout = e.is_timeout(),
                    error = %e,
                    "brand lookup failed; using default classification"
                );
                BrandDetails::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
