use super::ErrorBody;
use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Output: flat metadata mapping
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

/// Metadata of a single ticker, as one flat JSON object.
///
/// ```json
/// {
///     "longName": "Apple Inc.",
///     "sector": "Technology",
///     "currentPrice": 189.3,
///     "marketCap": 2950000000000,
///     // ...
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, utoipa::ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct TickerInfo(Map<String, Value>);

impl TickerInfo {
    /// Merge quoteSummary modules into one mapping.
    ///
    /// Modules are visited in key order and a later module overwrites a clashing key.
    /// `maxAge` bookkeeping is dropped, `{ "raw": .., "fmt": .. }` pairs collapse to
    /// `raw`, and empty objects are skipped.
    pub fn from_modules(modules: Map<String, Value>) -> Self {
        let mut flat = Map::new();
        for (_module, body) in modules {
            let Value::Object(fields) = body else {
                continue;
            };
            for (key, value) in fields {
                if key == "maxAge" {
                    continue;
                }
                match unwrap_raw(value) {
                    Value::Object(obj) if obj.is_empty() => {}
                    value => {
                        flat.insert(key, value);
                    }
                }
            }
        }
        TickerInfo(flat)
    }

    pub fn long_name(&self) -> Option<&str> {
        self.0.get("longName").and_then(Value::as_str)
    }

    /// A ticker is only considered real when it carries a non-empty `longName`.
    pub fn is_valid(&self) -> bool {
        matches!(self.long_name(), Some(name) if !name.is_empty())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for TickerInfo {
    fn from(map: Map<String, Value>) -> Self {
        TickerInfo(map)
    }
}

fn unwrap_raw(value: Value) -> Value {
    match value {
        Value::Object(mut obj) if obj.contains_key("raw") => {
            obj.remove("raw").unwrap_or(Value::Null)
        }
        other => other,
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Deserialization
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Deserialize, Debug)]
pub struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummary,
}

#[derive(Deserialize, Debug)]
pub struct QuoteSummary {
    pub result: Option<Vec<Map<String, Value>>>,
    pub error: Option<ErrorBody>,
}

impl QuoteSummaryResponse {
    pub fn into_info(self, ticker: &str) -> Result<TickerInfo, LookupError> {
        let summary = self.quote_summary;
        if let Some(error) = summary.error {
            return Err(error.into_lookup_error(ticker));
        }

        let modules = summary
            .result
            .and_then(|result| result.into_iter().next())
            .ok_or_else(|| LookupError::not_found(ticker))?;

        Ok(TickerInfo::from_modules(modules))
    }
}
