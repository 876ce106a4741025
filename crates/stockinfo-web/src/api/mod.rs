pub mod index;
pub mod stock;

use crate::AppState;
use actix_files::Files;
use actix_web::web;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};

#[derive(OpenApi)]
#[openapi(
    paths(stock::info, stock::history),
    info(
        title = "stockinfo",
        description = "Ticker metadata and three months of daily prices, proxied from Yahoo! Finance"
    )
)]
pub struct ApiDoc;

/// Register every route, with `state` as shared application data.
pub fn configure(state: &AppState, cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::new(state.clone()))
        // page
        .service(index::root)
        .service(Files::new("/static", state.static_dir.clone()))
        // api endpoints
        .service(stock::info)
        .service(stock::history)
        // api documentation
        .service(RapiDoc::with_openapi("/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .service(Redoc::with_url("/redoc", ApiDoc::openapi()));
}
