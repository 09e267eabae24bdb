//! Compressed, base64-encoded raster images tagged with a MIME type.
//!
//! This is the wire shape the generation service accepts and returns, and the
//! shape the mask painter exports.

use std::fmt;
use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader, Rgb, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_JPEG_QUALITY, FALLBACK_MIME};
use crate::error::{Result, ZenspaceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MimeType {
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/webp")]
    Webp,
}

impl MimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    /// Parse `image/png`, `image/jpeg`, `image/jpg` or `image/webp`.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image/png" => Ok(Self::Png),
            "image/jpeg" | "image/jpg" => Ok(Self::Jpeg),
            "image/webp" => Ok(Self::Webp),
            other => Err(ZenspaceError::UnsupportedMime(other.to_string())),
        }
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Webp => ImageFormat::WebP,
        }
    }

    pub fn from_image_format(format: ImageFormat) -> Result<Self> {
        match format {
            ImageFormat::Png => Ok(Self::Png),
            ImageFormat::Jpeg => Ok(Self::Jpeg),
            ImageFormat::WebP => Ok(Self::Webp),
            other => Err(ZenspaceError::UnsupportedMime(format!("{other:?}"))),
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compression used when flattening a raster for export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    Jpeg,
    Png,
}

impl ExportFormat {
    pub fn mime(&self) -> MimeType {
        match self {
            Self::Jpeg => MimeType::Jpeg,
            Self::Png => MimeType::Png,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jpeg => write!(f, "JPEG"),
            Self::Png => write!(f, "PNG"),
        }
    }
}

/// A compressed image as base64 text plus its MIME type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    pub mime_type: MimeType,
    /// Base64 payload without any `data:` prefix.
    pub data: String,
}

impl EncodedImage {
    pub fn from_bytes(mime_type: MimeType, bytes: &[u8]) -> Self {
        Self {
            mime_type,
            data: STANDARD.encode(bytes),
        }
    }

    /// Compress an RGBA raster. JPEG has no alpha, so pixels are composited
    /// onto black first.
    pub fn encode(img: &RgbaImage, format: ExportFormat, quality: u8) -> Result<Self> {
        let (w, h) = img.dimensions();
        if w == 0 || h == 0 {
            return Err(ZenspaceError::InvalidDimensions {
                width: w,
                height: h,
            });
        }

        let mut bytes = Vec::new();
        match format {
            ExportFormat::Jpeg => {
                let rgb = RgbImage::from_fn(w, h, |x, y| {
                    let [r, g, b, a] = img.get_pixel(x, y).0;
                    Rgb([over_black(r, a), over_black(g, a), over_black(b, a)])
                });
                let quality = quality.clamp(1, 100);
                JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(&rgb)?;
            }
            ExportFormat::Png => {
                img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
            }
        }
        Ok(Self::from_bytes(format.mime(), &bytes))
    }

    /// JPEG at the default export quality.
    pub fn encode_jpeg(img: &RgbaImage) -> Result<Self> {
        Self::encode(img, ExportFormat::Jpeg, DEFAULT_JPEG_QUALITY)
    }

    /// Parse a `data:image/...;base64,` URL. A bare base64 string is accepted
    /// and assumed to be JPEG.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let url = url.trim();
        let Some(rest) = url.strip_prefix("data:") else {
            let mime_type = MimeType::parse(FALLBACK_MIME)?;
            STANDARD.decode(url)?;
            return Ok(Self {
                mime_type,
                data: url.to_string(),
            });
        };

        let (mime, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| ZenspaceError::InvalidDataUrl("missing ';base64,' marker".into()))?;
        if !mime.starts_with("image/") {
            return Err(ZenspaceError::InvalidDataUrl(format!(
                "not an image MIME type: {mime}"
            )));
        }
        let mime_type = MimeType::parse(mime)?;
        STANDARD.decode(payload)?;

        Ok(Self {
            mime_type,
            data: payload.to_string(),
        })
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(&self.data)?)
    }

    pub fn decode(&self) -> Result<DynamicImage> {
        let bytes = self.to_bytes()?;
        decode_oriented(ImageReader::with_format(
            Cursor::new(bytes),
            self.mime_type.image_format(),
        ))
    }
}

fn over_black(channel: u8, alpha: u8) -> u8 {
    ((channel as u16 * alpha as u16 + 127) / 255) as u8
}

/// Decode and apply the EXIF orientation, so camera photos come out upright
/// with their displayed width and height.
pub(crate) fn decode_oriented<R>(reader: ImageReader<R>) -> Result<DynamicImage>
where
    R: std::io::BufRead + std::io::Seek,
{
    let mut decoder = reader.into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut image = DynamicImage::from_decoder(decoder)?;
    image.apply_orientation(orientation);
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_black() {
        assert_eq!(over_black(255, 0), 0);
        assert_eq!(over_black(255, 255), 255);
        assert_eq!(over_black(200, 128), 100);
    }

    #[test]
    fn test_mime_parse_accepts_jpg_alias() {
        assert_eq!(MimeType::parse("image/jpg").unwrap(), MimeType::Jpeg);
        assert_eq!(MimeType::parse(" IMAGE/PNG ").unwrap(), MimeType::Png);
        assert!(MimeType::parse("image/gif").is_err());
    }

    #[test]
    fn test_encode_rejects_empty_raster() {
        let img = RgbaImage::new(0, 4);
        assert!(matches!(
            EncodedImage::encode_jpeg(&img),
            Err(ZenspaceError::InvalidDimensions { .. })
        ));
    }
}
