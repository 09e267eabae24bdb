use std::fmt;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::encoding::{decode_oriented, EncodedImage, MimeType};
use crate::error::Result;

/// Reference to an image: a file on disk or an inline encoded image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Encoded(EncodedImage),
}

impl ImageSource {
    /// Decode the referenced image at its native resolution, upright.
    pub fn decode(&self) -> Result<DynamicImage> {
        match self {
            Self::Path(path) => decode_oriented(ImageReader::open(path)?.with_guessed_format()?),
            Self::Encoded(encoded) => encoded.decode(),
        }
    }

    /// Produce the encoded form, reading and tagging the file when needed.
    pub fn to_encoded(&self) -> Result<EncodedImage> {
        match self {
            Self::Encoded(encoded) => Ok(encoded.clone()),
            Self::Path(path) => {
                let bytes = std::fs::read(path)?;
                let format = image::guess_format(&bytes).or_else(|_| ImageFormat::from_path(path))?;
                let mime = MimeType::from_image_format(format)?;
                Ok(EncodedImage::from_bytes(mime, &bytes))
            }
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<EncodedImage> for ImageSource {
    fn from(encoded: EncodedImage) -> Self {
        Self::Encoded(encoded)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Encoded(encoded) => write!(
                f,
                "inline {} ({} base64 chars)",
                encoded.mime_type,
                encoded.data.len()
            ),
        }
    }
}
