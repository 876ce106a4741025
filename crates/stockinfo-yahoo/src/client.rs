use crate::error::{LookupError, ProviderError};
use crate::provider::MarketData;
use crate::schema::{
    info::{QuoteSummaryResponse, TickerInfo},
    prices::{PriceBar, PriceHistory},
};
use crate::www;
use async_trait::async_trait;
use log::{debug, error, trace};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Where, and as whom, the client talks to Yahoo.
#[derive(Debug, Clone)]
pub struct YahooConfig {
    /// Page that hands out the session cookie the crumb is bound to.
    pub consent_url: String,
    pub query1: String,
    pub query2: String,
    pub user_agent: String,
    /// Whole-request timeout; `None` waits as long as the provider does.
    pub timeout: Option<Duration>,
}

impl Default for YahooConfig {
    fn default() -> Self {
        YahooConfig {
            consent_url: www::CONSENT_URL.to_string(),
            query1: www::QUERY1_URL.to_string(),
            query2: www::QUERY2_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// [`MarketData`] backed by the public Yahoo! Finance endpoints.
#[derive(Debug, Clone)]
pub struct YahooFinance {
    client: reqwest::Client,
    config: YahooConfig,
}

impl YahooFinance {
    pub fn new(config: YahooConfig) -> Result<Self, ProviderError> {
        let mut builder = reqwest::ClientBuilder::new()
            .user_agent(&config.user_agent)
            .cookie_store(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(YahooFinance {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &YahooConfig {
        &self.config
    }

    /// Run the cookie/crumb handshake quoteSummary requires.
    async fn crumb(&self) -> Result<String, ProviderError> {
        // the consent host answers 404 but still sets the cookie
        let consent = self.client.get(&self.config.consent_url).send().await?;
        trace!("Consent cookie request answered {}", consent.status());

        let url = www::crumb_url(&self.config.query1)?;
        let crumb = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                error!("crumb request rejected: {e}\nURL: {url}");
                e
            })?
            .text()
            .await?;

        let crumb = crumb.trim();
        if crumb.is_empty() || crumb.contains('<') || crumb.contains(char::is_whitespace) {
            return Err(ProviderError::Session(format!(
                "unusable crumb received from {url}"
            )));
        }
        Ok(crumb.to_string())
    }

    /// GET `url` and deserialize the body, whatever the status code.
    ///
    /// Yahoo reports unknown tickers as 404s carrying a JSON error object, so the
    /// status only matters once the body fails to decode.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        ticker: &str,
    ) -> Result<T, ProviderError> {
        trace!("[{ticker}] GET {url}");
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            error!("[{ticker}] fetching error: {e}\nURL: {url}");
            e
        })?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            error!("[{ticker}] byte transformation error: {e}\nURL: {url}");
            e
        })?;

        match serde_json::from_slice::<T>(&body) {
            Ok(data) => Ok(data),
            Err(e) if !status.is_success() => {
                error!("[{ticker}] {status} with undecodable body: {e}\nURL: {url}");
                Err(ProviderError::Api {
                    code: status.as_u16().to_string(),
                    description: status.canonical_reason().unwrap_or_default().to_string(),
                })
            }
            Err(e) => {
                error!("[{ticker}] deserialization error: {e}\nURL: {url}");
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl MarketData for YahooFinance {
    async fn ticker_info(&self, ticker: &str) -> Result<TickerInfo, LookupError> {
        debug!("[{ticker}] fetching metadata from Yahoo Finance");
        let crumb = self.crumb().await?;
        let url = www::info_url(&self.config.query2, ticker, &crumb)?;
        let response: QuoteSummaryResponse = self.get_json(url, ticker).await?;
        let info = response.into_info(ticker)?;
        trace!("[{ticker}] metadata fetched with {} fields", info.len());
        Ok(info)
    }

    async fn price_history(&self, ticker: &str) -> Result<Vec<PriceBar>, LookupError> {
        debug!("[{ticker}] fetching {} of {} prices from Yahoo Finance", www::RANGE, www::INTERVAL);
        let url = www::price_url(&self.config.query2, ticker)?;
        let response: PriceHistory = self.get_json(url, ticker).await?;
        let bars = response.into_bars(ticker)?;
        trace!("[{ticker}] {} bars transformed", bars.len());
        Ok(bars)
    }
}
