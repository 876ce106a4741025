//! Yahoo! Finance market-data client.
//!
//! The [`MarketData`] trait is the seam the web layer talks to; [`YahooFinance`]
//! is the production implementation. Responses are reshaped into a flat
//! [`TickerInfo`] mapping and a chronological list of daily [`PriceBar`]s.

pub mod client;
pub mod error;
pub mod provider;
pub mod schema;
pub mod www;

pub use crate::client::{YahooConfig, YahooFinance};
pub use crate::error::{LookupError, ProviderError};
pub use crate::provider::MarketData;
pub use crate::schema::info::TickerInfo;
pub use crate::schema::prices::PriceBar;
