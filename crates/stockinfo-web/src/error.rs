use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use clap::ValueEnum;
use log::{error, warn};
use serde::{Deserialize, Serialize};
use stockinfo_yahoo::LookupError;

/// Body of every non-2xx answer.
///
/// ```json
/// { "error": "Invalid ticker" }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid ticker")]
    InvalidTicker,

    #[error("Upstream provider unavailable")]
    UpstreamUnavailable,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidTicker => StatusCode::NOT_FOUND,
            ApiError::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// How provider failures reach the client.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpstreamErrorPolicy {
    /// Every failed lookup is a 404 `Invalid ticker`.
    #[default]
    Conflate,
    /// Unknown tickers stay 404; provider failures become 502.
    Split,
}

impl UpstreamErrorPolicy {
    /// Log the lookup failure and pick the response the client gets.
    pub fn reject(self, ticker: &str, err: LookupError) -> ApiError {
        match &err {
            LookupError::NotFound { .. } => warn!("[{ticker}] {err}"),
            LookupError::Provider(_) => error!("[{ticker}] provider lookup failed: {err}"),
        }

        match (self, err) {
            (UpstreamErrorPolicy::Split, LookupError::Provider(_)) => ApiError::UpstreamUnavailable,
            _ => ApiError::InvalidTicker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use stockinfo_yahoo::ProviderError;

    fn outage() -> LookupError {
        ProviderError::Malformed("truncated".to_string()).into()
    }

    #[test]
    fn conflate_hides_provider_failures() {
        let policy = UpstreamErrorPolicy::Conflate;
        assert_eq!(policy.reject("AAPL", outage()), ApiError::InvalidTicker);
        assert_eq!(
            policy.reject("ZZZZ", LookupError::not_found("ZZZZ")),
            ApiError::InvalidTicker
        );
    }

    #[test]
    fn split_separates_provider_failures() {
        let policy = UpstreamErrorPolicy::Split;
        assert_eq!(policy.reject("AAPL", outage()), ApiError::UpstreamUnavailable);
        assert_eq!(
            policy.reject("ZZZZ", LookupError::not_found("ZZZZ")),
            ApiError::InvalidTicker
        );
    }

    #[actix_web::test]
    async fn invalid_ticker_envelope() {
        let response = ApiError::InvalidTicker.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Invalid ticker" }));
    }

    #[test]
    fn upstream_unavailable_is_bad_gateway() {
        assert_eq!(
            ApiError::UpstreamUnavailable.status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
