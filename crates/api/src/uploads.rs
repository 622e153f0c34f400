//! Cover-art storage under the public images directory.
//!
//! Filenames are a nanosecond UNIX timestamp plus the original extension,
//! so concurrent uploads cannot collide with existing files. Removal is
//! best-effort: the database is the source of truth and an orphaned file
//! is a low-cost leak, so failures are logged and never fail the request.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// The directory uploaded images are written to.
pub fn images_dir(public_dir: &Path) -> PathBuf {
    public_dir.join("images")
}

/// Write an uploaded image and return its browser-facing relative path
/// (`/images/<name>`).
pub async fn store_image(
    public_dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> std::io::Result<String> {
    let dir = images_dir(public_dir);
    tokio::fs::create_dir_all(&dir).await?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
        .as_nanos();

    let filename = match Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) => format!("{nanos}.{ext}"),
        None => nanos.to_string(),
    };

    tokio::fs::write(dir.join(&filename), bytes).await?;
    Ok(format!("/images/{filename}"))
}

/// Best-effort removal of a previously stored image.
///
/// Accepts only `/images/<name>` paths and resolves just the final file
/// name, so a stored path can never reach outside the images directory.
pub async fn remove_image(public_dir: &Path, image_url: &str) {
    let Some(name) = image_url
        .strip_prefix("/images/")
        .map(Path::new)
        .and_then(Path::file_name)
    else {
        tracing::warn!(image_url, "Refusing to remove image outside /images");
        return;
    };

    let path = images_dir(public_dir).join(name);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => tracing::debug!(path = %path.display(), "Removed image file"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Failed to remove image file");
        }
    }
}
