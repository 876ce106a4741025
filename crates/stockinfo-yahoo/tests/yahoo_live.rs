//! Requests against the real Yahoo! Finance endpoints.
//!
//! Ignored by default; run with `cargo test -p stockinfo-yahoo --test yahoo_live -- --ignored`.

use stockinfo_yahoo::{MarketData, YahooConfig, YahooFinance};

fn provider() -> YahooFinance {
    YahooFinance::new(YahooConfig::default()).expect("build client")
}

#[tokio::test]
#[ignore] // Requires network access
async fn aapl_has_a_long_name() {
    let info = provider().validated_info("AAPL").await.expect("AAPL lookup");
    assert!(!info.long_name().unwrap_or_default().is_empty());
}

#[tokio::test]
#[ignore] // Requires network access
async fn nonsense_ticker_is_not_found() {
    let err = provider().validated_info("ZZZZZZ9999").await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err:?}");
}

#[tokio::test]
#[ignore] // Requires network access
async fn aapl_history_is_chronological() {
    let bars = provider().validated_history("AAPL").await.expect("AAPL history");
    assert!(bars.len() > 40, "three months should hold 40+ sessions");
    assert!(bars.windows(2).all(|w| w[0].date <= w[1].date));
    assert!(bars.iter().all(|bar| bar.high >= bar.low));
}
