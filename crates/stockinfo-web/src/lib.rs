pub mod api;
pub mod cli;
pub mod error;

use std::path::PathBuf;
use std::sync::Arc;
use stockinfo_yahoo::MarketData;

pub use crate::api::{configure, ApiDoc};
pub use crate::error::{ApiError, ErrorBody, UpstreamErrorPolicy};

/// Read-only configuration every handler sees.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MarketData>,
    pub policy: UpstreamErrorPolicy,
    /// Holds `index.html` and the assets under `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn MarketData>,
        policy: UpstreamErrorPolicy,
        static_dir: PathBuf,
    ) -> Self {
        AppState {
            provider,
            policy,
            static_dir,
        }
    }
}
