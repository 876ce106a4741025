//! Provider contract between the web layer and a market-data source.

use crate::error::LookupError;
use crate::schema::{info::TickerInfo, prices::PriceBar};
use async_trait::async_trait;

#[async_trait]
pub trait MarketData: Send + Sync {
    /// Full metadata mapping for `ticker`, exactly as the provider reports it.
    async fn ticker_info(&self, ticker: &str) -> Result<TickerInfo, LookupError>;

    /// Daily bars over the trailing three months, oldest first.
    async fn price_history(&self, ticker: &str) -> Result<Vec<PriceBar>, LookupError>;

    /// Metadata of a ticker that carries a non-empty `longName`.
    async fn validated_info(&self, ticker: &str) -> Result<TickerInfo, LookupError> {
        let info = self.ticker_info(ticker).await?;
        if !info.is_valid() {
            return Err(LookupError::not_found(ticker));
        }
        Ok(info)
    }

    /// Price history, fetched only once the ticker passes [`validated_info`].
    ///
    /// [`validated_info`]: MarketData::validated_info
    async fn validated_history(&self, ticker: &str) -> Result<Vec<PriceBar>, LookupError> {
        self.validated_info(ticker).await?;
        self.price_history(ticker).await
    }
}
