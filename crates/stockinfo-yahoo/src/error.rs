use thiserror::Error;

/// Failures while talking to, or decoding answers from, the provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure or an unexpected HTTP status.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with its own error object.
    #[error("provider error {code}: {description}")]
    Api { code: String, description: String },

    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The cookie/crumb handshake did not yield a usable crumb.
    #[error("session handshake failed: {0}")]
    Session(String),

    #[error("invalid provider url: {0}")]
    Url(#[from] url::ParseError),
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::Malformed(e.to_string())
    }
}

/// Outcome of a failed ticker lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The symbol does not exist, or carries no company name.
    #[error("ticker not found: {symbol}")]
    NotFound { symbol: String },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl LookupError {
    pub fn not_found(symbol: &str) -> Self {
        LookupError::NotFound {
            symbol: symbol.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Provider(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_are_not_not_found() {
        let err: LookupError = ProviderError::Api {
            code: "Internal Server Error".to_string(),
            description: "try again".to_string(),
        }
        .into();
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "provider error Internal Server Error: try again"
        );
    }

    #[test]
    fn not_found_names_the_symbol() {
        let err = LookupError::not_found("ZZZZZZ9999");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "ticker not found: ZZZZZZ9999");
    }

    #[test]
    fn decode_failures_become_malformed() {
        let decode = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert!(matches!(
            ProviderError::from(decode),
            ProviderError::Malformed(_)
        ));
    }
}
