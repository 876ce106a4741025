use crate::error::UpstreamErrorPolicy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use stockinfo_yahoo::{client::DEFAULT_USER_AGENT, YahooConfig};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory holding `index.html` and its assets.
    #[arg(long, env = "STATIC_DIR", default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/static"))]
    pub static_dir: PathBuf,

    /// User-Agent sent to Yahoo! Finance.
    #[arg(long, env = "USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// How provider failures are reported to clients.
    #[arg(long, env = "UPSTREAM_ERRORS", value_enum, default_value_t = UpstreamErrorPolicy::Conflate)]
    pub upstream_errors: UpstreamErrorPolicy,

    /// Give up on a provider request after this many seconds.
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Sets the level of logging, overriding `RUST_LOG`.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    pub fn yahoo_config(&self) -> YahooConfig {
        YahooConfig {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..Default::default()
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}
