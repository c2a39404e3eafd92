//! Uploaded files and the browser client.

use std::path::{Path, PathBuf};

use rocket::{fs::NamedFile, get, routes, tokio::fs, Route, State};

use super::Cfg;

pub fn routes() -> Vec<Route> {
    routes![get_upload, get_file]
}

async fn open_file(path: &Path) -> Option<NamedFile> {
    let is_file = fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        return None;
    }
    NamedFile::open(path).await.ok()
}

#[get("/uploads/<file..>")]
pub async fn get_upload(cfg: &State<Cfg>, file: PathBuf) -> Option<NamedFile> {
    open_file(&cfg.upload_dir.join(file)).await
}

/// Unknown paths are routes of the client and get its `index.html`.
#[get("/<file..>", rank = 20)]
pub async fn get_file(cfg: &State<Cfg>, file: PathBuf) -> Option<NamedFile> {
    if file.starts_with("api") {
        return None;
    }
    let dir = cfg.static_dir.as_ref()?;
    match open_file(&dir.join(&file)).await {
        Some(named) => Some(named),
        None => open_file(&dir.join("index.html")).await,
    }
}
