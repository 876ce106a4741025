use super::ErrorBody;
use crate::error::{LookupError, ProviderError};
use chrono::{DateTime, FixedOffset, NaiveTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use log::{trace, warn};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Output: one row per trading day
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

/// A single daily OHLCV bar.
///
/// ```json
/// {
///     "Date": "2024-01-02T05:00:00.000Z",
///     "Open": 187.15,
///     "High": 188.44,
///     "Low": 183.89,
///     "Close": 185.64,
///     "Volume": 82488700
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PriceBar {
    #[serde(serialize_with = "ser_iso_millis", deserialize_with = "de_iso")]
    #[schema(value_type = String, format = DateTime, example = "2024-01-02T05:00:00.000Z")]
    pub date: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

pub fn ser_iso_millis<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn de_iso<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Deserialization
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

// `price` schema
#[derive(Deserialize, Debug)]
pub struct PriceHistory {
    pub chart: PriceResponse,
}

#[derive(Deserialize, Debug)]
pub struct PriceResponse {
    pub result: Option<Vec<PriceCategories>>,
    pub error: Option<ErrorBody>,
}

#[derive(Deserialize, Debug)]
pub struct PriceCategories {
    #[serde(default)]
    pub meta: Meta,
    // absent when the window holds no trading days
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub exchange_timezone_name: Option<String>,
    #[serde(default)]
    pub gmtoffset: i32,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

impl PriceHistory {
    pub fn into_bars(self, ticker: &str) -> Result<Vec<PriceBar>, LookupError> {
        let chart = self.chart;
        if let Some(error) = chart.error {
            // no bars in the window, e.g. a delisted symbol; validity is decided by ticker_info
            if error.is_not_found() {
                warn!(
                    "[{ticker}] chart reported \"{}\"; filling with an empty array instead",
                    error.description.as_deref().unwrap_or(&error.code)
                );
                return Ok(vec![]);
            }
            return Err(error.into_lookup_error(ticker));
        }

        match chart.result.and_then(|result| result.into_iter().next()) {
            Some(base) => Ok(base.into_bars(ticker)?),
            None => {
                warn!("[{ticker}] no \"chart.result\" object; filling with an empty array instead");
                Ok(vec![])
            }
        }
    }
}

impl PriceCategories {
    fn into_bars(self, ticker: &str) -> Result<Vec<PriceBar>, ProviderError> {
        let session = SessionZone::from_meta(&self.meta);
        let price = self.indicators.quote.into_iter().next().unwrap_or_default();
        let timestamps = self.timestamp;

        let n = timestamps.len();
        let columns = [
            price.open.len(),
            price.high.len(),
            price.low.len(),
            price.close.len(),
            price.volume.len(),
        ];
        if columns.iter().any(|len| *len != n) {
            return Err(ProviderError::Malformed(format!(
                "[{ticker}] {n} timestamps but OHLCV columns of lengths {columns:?}"
            )));
        }

        // keyed by session date; a repeated date keeps its last bar
        let mut rows = BTreeMap::new();
        for (((((timestamp, open), high), low), close), volume) in timestamps
            .into_iter()
            .zip(price.open)
            .zip(price.high)
            .zip(price.low)
            .zip(price.close)
            .zip(price.volume)
        {
            let (Some(open), Some(high), Some(low), Some(close), Some(volume)) =
                (open, high, low, close, volume)
            else {
                trace!("[{ticker}] skipping incomplete bar at {timestamp}");
                continue;
            };
            let date = session.session_start(timestamp).ok_or_else(|| {
                ProviderError::Malformed(format!("[{ticker}] invalid timestamp {timestamp}"))
            })?;
            rows.insert(
                date,
                PriceBar {
                    date,
                    open,
                    high,
                    low,
                    close,
                    volume,
                },
            );
        }

        Ok(rows.into_values().collect())
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Exchange time zone
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

/// Time zone that daily bars are stamped in.
#[derive(Debug, Clone, Copy)]
enum SessionZone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl SessionZone {
    fn from_meta(meta: &Meta) -> Self {
        if let Some(tz) = meta
            .exchange_timezone_name
            .as_deref()
            .and_then(|name| name.parse::<Tz>().ok())
        {
            return SessionZone::Named(tz);
        }
        let offset = FixedOffset::east_opt(meta.gmtoffset)
            .or_else(|| FixedOffset::east_opt(0))
            .map(SessionZone::Fixed);
        offset.unwrap_or(SessionZone::Named(Tz::UTC))
    }

    /// Midnight, exchange-local, of the trading day `timestamp` falls in.
    fn session_start(&self, timestamp: i64) -> Option<DateTime<Utc>> {
        let instant = DateTime::from_timestamp(timestamp, 0)?;
        Some(match self {
            SessionZone::Named(tz) => local_midnight(tz, instant),
            SessionZone::Fixed(offset) => local_midnight(offset, instant),
        })
    }
}

fn local_midnight<T: TimeZone>(tz: &T, instant: DateTime<Utc>) -> DateTime<Utc> {
    let day = instant.with_timezone(tz).date_naive();
    tz.from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
        .map(|midnight| midnight.with_timezone(&Utc))
        // midnight skipped by a DST jump; keep the bar's own instant
        .unwrap_or(instant)
}
