use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::ImageFormat;
use tracing::info;

use crate::encoding::{EncodedImage, MimeType};
use crate::error::Result;

/// Download name for the `index`-th (zero-based) result variation.
pub fn result_file_name(index: usize, timestamp: u128) -> String {
    format!("zenspace-variation-{}-{timestamp}.png", index + 1)
}

/// Milliseconds since the Unix epoch, for [`result_file_name`].
pub fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Write every result into `dir` as PNG. Returns the written paths in order.
pub fn save_results(dir: &Path, images: &[EncodedImage], timestamp: u128) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(images.len());
    for (i, encoded) in images.iter().enumerate() {
        let path = dir.join(result_file_name(i, timestamp));
        if encoded.mime_type == MimeType::Png {
            std::fs::write(&path, encoded.to_bytes()?)?;
        } else {
            encoded.decode()?.save_with_format(&path, ImageFormat::Png)?;
        }
        info!(path = %path.display(), "Saved result");
        written.push(path);
    }
    Ok(written)
}
