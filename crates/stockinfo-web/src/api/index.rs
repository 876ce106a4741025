use crate::AppState;
use actix_files::NamedFile;
use actix_web::{get, web};

// home
#[get("/")]
pub async fn root(state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    let page = NamedFile::open_async(state.static_dir.join("index.html")).await?;
    Ok(page)
}
