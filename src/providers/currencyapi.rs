use crate::core::config::load_api_key;
use crate::core::currency::{BASE_CURRENCY, QUOTE_CURRENCY, RateFetcher};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Url;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

// CurrencyApiProvider implementation for RateFetcher
pub struct CurrencyApiProvider {
    base_url: String,
    api_key_path: PathBuf,
}

impl CurrencyApiProvider {
    pub fn new<P: AsRef<Path>>(base_url: &str, api_key_path: P) -> Self {
        CurrencyApiProvider {
            base_url: base_url.to_string(),
            api_key_path: api_key_path.as_ref().to_path_buf(),
        }
    }

    fn latest_url(&self, api_key: &str) -> Result<Url> {
        let endpoint = format!("{}/v3/latest", self.base_url);
        Url::parse_with_params(
            &endpoint,
            &[
                ("apikey", api_key),
                ("currencies", QUOTE_CURRENCY.code()),
                ("base_currency", BASE_CURRENCY.code()),
            ],
        )
        .with_context(|| format!("Invalid rate endpoint: {endpoint}"))
    }
}

#[async_trait]
impl RateFetcher for CurrencyApiProvider {
    #[instrument(name = "CurrencyApiFetch", skip(self))]
    async fn fetch_latest(&self) -> Result<String> {
        let api_key = load_api_key(&self.api_key_path)?;
        let url = self.latest_url(&api_key)?;
        debug!(
            "Requesting {}/{} rate from {}/v3/latest",
            BASE_CURRENCY, QUOTE_CURRENCY, self.base_url
        );

        let client = reqwest::Client::builder().user_agent("xchg/1.0").build()?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for {}", e.without_url(), self.base_url))?;

        debug!(status = %response.status(), "Received rate response");

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for {}/{} rate",
                response.status(),
                BASE_CURRENCY,
                QUOTE_CURRENCY
            ));
        }

        let text = response
            .text()
            .await
            .context("Failed to get response text")?;
        Ok(text)
    }
}
