use crate::error::ProviderError;
use url::Url;

pub const INTERVAL: &str = "1d";
pub const RANGE: &str = "3mo";

/// quoteSummary modules merged into a single metadata mapping.
pub const INFO_MODULES: &str =
    "financialData,quoteType,defaultKeyStatistics,assetProfile,summaryDetail";

pub const CONSENT_URL: &str = "https://fc.yahoo.com";
pub const QUERY1_URL: &str = "https://query1.finance.yahoo.com";
pub const QUERY2_URL: &str = "https://query2.finance.yahoo.com";

// `segments` are percent-encoded one by one, so a ticker can never leave its own segment
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, ProviderError> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| ProviderError::Malformed(format!("{base} cannot be a base url")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub fn crumb_url(query1: &str) -> Result<Url, ProviderError> {
    endpoint(query1, &["v1", "test", "getcrumb"])
}

pub fn info_url(query2: &str, ticker: &str, crumb: &str) -> Result<Url, ProviderError> {
    let mut url = endpoint(query2, &["v10", "finance", "quoteSummary", ticker])?;
    url.query_pairs_mut()
        .append_pair("modules", INFO_MODULES)
        .append_pair("formatted", "false")
        .append_pair("corsDomain", "finance.yahoo.com")
        .append_pair("crumb", crumb);
    Ok(url)
}

pub fn price_url(query2: &str, ticker: &str) -> Result<Url, ProviderError> {
    let mut url = endpoint(query2, &["v8", "finance", "chart", ticker])?;
    url.query_pairs_mut()
        .append_pair("range", RANGE)
        .append_pair("interval", INTERVAL)
        .append_pair("includePrePost", "false")
        .append_pair("events", "div,splits");
    Ok(url)
}
