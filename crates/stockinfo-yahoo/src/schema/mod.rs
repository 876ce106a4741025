pub mod info;
pub mod prices;

use crate::error::{LookupError, ProviderError};
use serde::Deserialize;

/// Error object Yahoo embeds in both the `chart` and `quoteSummary` envelopes.
///
/// ```json
/// { "code": "Not Found", "description": "Quote not found for symbol: ZZZZZZ9999" }
/// ```
#[derive(Deserialize, Debug, Clone)]
pub struct ErrorBody {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ErrorBody {
    pub(crate) fn is_not_found(&self) -> bool {
        self.code == "Not Found"
    }

    pub(crate) fn into_lookup_error(self, ticker: &str) -> LookupError {
        if self.is_not_found() {
            return LookupError::not_found(ticker);
        }
        ProviderError::Api {
            code: self.code,
            description: self.description.unwrap_or_default(),
        }
        .into()
    }
}
