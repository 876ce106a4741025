use crate::error::{ApiError, ErrorBody};
use crate::AppState;
use actix_web::{get, web, HttpResponse};
use log::debug;
use stockinfo_yahoo::{PriceBar, TickerInfo};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Full metadata of a single ticker
///
/// ```json
/// {
///     "longName": "Apple Inc.",
///     "sector": "Technology",
///     "currentPrice": 189.3,
///     // ...
/// }
/// ```
#[utoipa::path(
    get,
    path = "/stock_info/{ticker}",
    responses(
        (
            status = 200, description = "Every metadata field the provider reports for the ticker",
            body = TickerInfo, content_type = "application/json",
            example = json!({
                "symbol": "AAPL",
                "longName": "Apple Inc.",
                "sector": "Technology",
                "currentPrice": 189.3
            })
        ),
        (
            status = 404, description = "Unknown ticker, or the lookup failed",
            body = ErrorBody, content_type = "application/json",
            example = json!({ "error": "Invalid ticker" })
        ),
        (
            status = 502, description = "Provider failure, only with `--upstream-errors split`",
            body = ErrorBody, content_type = "application/json",
            example = json!({ "error": "Upstream provider unavailable" })
        )
    ),
    params(
        ("ticker" = String, Path, description = "Stock ticker symbol")
    )
)]
#[get("/stock_info/{ticker}")]
pub async fn info(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let ticker = path.into_inner();
    let info = state
        .provider
        .validated_info(&ticker)
        .await
        .map_err(|e| state.policy.reject(&ticker, e))?;

    debug!("[{ticker}] {} metadata fields served", info.len());
    Ok(HttpResponse::Ok().json(info))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Daily prices of a single ticker over the trailing three months
///
/// ```json
/// [
///     {
///         "Date": "2024-01-02T05:00:00.000Z",
///         "Open": 187.15,
///         "High": 188.44,
///         "Low": 183.89,
///         "Close": 185.64,
///         "Volume": 82488700
///     },
///     // ...
/// ]
/// ```
#[utoipa::path(
    get,
    path = "/stock_history/{ticker}",
    responses(
        (
            status = 200, description = "Daily OHLCV bars, oldest first; empty without sessions",
            body = [PriceBar], content_type = "application/json",
            example = json!([
                {
                    "Date": "2024-01-02T05:00:00.000Z",
                    "Open": 187.15,
                    "High": 188.44,
                    "Low": 183.89,
                    "Close": 185.64,
                    "Volume": 82488700
                }
            ])
        ),
        (
            status = 404, description = "Unknown ticker, or the lookup failed",
            body = ErrorBody, content_type = "application/json",
            example = json!({ "error": "Invalid ticker" })
        ),
        (
            status = 502, description = "Provider failure, only with `--upstream-errors split`",
            body = ErrorBody, content_type = "application/json",
            example = json!({ "error": "Upstream provider unavailable" })
        )
    ),
    params(
        ("ticker" = String, Path, description = "Stock ticker symbol")
    )
)]
#[get("/stock_history/{ticker}")]
pub async fn history(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let ticker = path.into_inner();
    let bars = state
        .provider
        .validated_history(&ticker)
        .await
        .map_err(|e| state.policy.reject(&ticker, e))?;

    debug!("[{ticker}] {} price bars served", bars.len());
    Ok(HttpResponse::Ok().json(bars))
}
