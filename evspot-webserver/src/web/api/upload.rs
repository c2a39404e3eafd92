use std::path::Path;

use rocket::{fs::TempFile, tokio::fs, FromForm};

use super::ApiError;
use crate::core::entities::{Id, Timestamp};

#[derive(FromForm)]
pub struct Upload<'r> {
    pub file: TempFile<'r>,
}

/// `<unix-millis>-<file-name>[.<ext>]`
fn stored_file_name(millis: i64, name: Option<&str>, ext: Option<&str>) -> String {
    let name = name.filter(|n| !n.is_empty()).unwrap_or("upload");
    match ext {
        Some(ext) => format!("{millis}-{name}.{ext}"),
        None => format!("{millis}-{name}"),
    }
}

/// Copy an uploaded file below the directory of its owner
/// and return its public path.
pub async fn store(
    upload_dir: &Path,
    owner: &Id,
    file: &mut TempFile<'_>,
) -> Result<String, ApiError> {
    let ext = file
        .content_type()
        .and_then(|ct| ct.extension())
        .map(|ext| ext.as_str().to_owned());
    let file_name = stored_file_name(
        Timestamp::now().as_millis(),
        file.name(),
        ext.as_deref(),
    );
    let dir = upload_dir.join(owner.as_str());
    fs::create_dir_all(&dir).await?;
    file.copy_to(dir.join(&file_name)).await?;
    debug!("Stored upload {file_name} of user {owner}");
    Ok(format!("/uploads/{owner}/{file_name}"))
}
