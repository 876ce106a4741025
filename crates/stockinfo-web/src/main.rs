use actix_web::{middleware::Logger, App, HttpServer};
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use stockinfo_web::{cli::Cli, configure, AppState};
use stockinfo_yahoo::YahooFinance;

fn preprocess(cli: &Cli) {
    // initialise logger
    let env = env_logger::Env::default().default_filter_or("info,actix_web=info");
    let mut logger = env_logger::Builder::from_env(env);
    if let Some(level) = cli.log_level {
        logger.filter_level(level.into());
    }
    logger.init();
}

#[actix_web::main]
async fn main() -> Result<()> {
    // grant access to .env before clap reads its env fallbacks
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    preprocess(&cli);
    log::debug!("Command line input recorded: {cli:#?}");

    let provider = YahooFinance::new(cli.yahoo_config())?;
    let state = AppState::new(Arc::new(provider), cli.upstream_errors, cli.static_dir.clone());

    log::info!(
        "stockinfo v{} listening on {}:{} ({:?} upstream errors)",
        env!("CARGO_PKG_VERSION"),
        cli.host,
        cli.port,
        cli.upstream_errors
    );

    // run server
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| configure(&state, cfg))
    })
    .bind((cli.host.as_str(), cli.port))?
    .run()
    .await?;

    Ok(())
}
