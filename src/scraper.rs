use reqwest::{Client, Url};
use std::time::Duration;

use crate::parser::parse_standings;
use crate::types::Standing;

/// The relay performs the actual page retrieval on our behalf; the target
/// serves a bot-check interstitial to plain clients.
const RELAY_URL: &str = "http://api.scraperapi.com/";

/// Fixed desktop browser identification, kept stable so the relay's target
/// fetch looks like an ordinary page view.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Failed to build relay URL: {0}")]
    RelayUrl(String),
    #[error("Page retrieved but no standings rows matched")]
    NoRows,
}

#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
    api_key: String,
}

impl WebScraper {
    pub fn new(api_key: String) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, api_key })
    }

    /// One fetch through the relay, then straight-line extraction.
    ///
    /// No retries: any transport failure, non-success status, or empty
    /// extraction fails the run before either sink is touched.
    pub async fn fetch_standings(&self) -> Result<Vec<Standing>, ScraperError> {
        let url = self.relay_url()?;
        log::info!("Fetching {} via relay...", crate::TARGET_URL);
        let html = self.get_html(url).await?;

        let standings = parse_standings(&html);
        if standings.is_empty() {
            return Err(ScraperError::NoRows);
        }
        log::info!("Extracted {} standings rows", standings.len());
        Ok(standings)
    }

    fn relay_url(&self) -> Result<Url, ScraperError> {
        Url::parse_with_params(
            RELAY_URL,
            &[("api_key", self.api_key.as_str()), ("url", crate::TARGET_URL)],
        )
        .map_err(|e| ScraperError::RelayUrl(e.to_string()))
    }

    async fn get_html(&self, url: Url) -> Result<String, ScraperError> {
        Ok(self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| log::error!("HTTP error: {e:?}"))?
            .error_for_status()?
            .text()
            .await
            .inspect_err(|e| log::error!("Decode error: {e:?}"))?)
    }
}
