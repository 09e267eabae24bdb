#[allow(dead_code)]
mod common;

use tempfile::TempDir;

use zenspace_core::encoding::{EncodedImage, ExportFormat, MimeType};
use zenspace_core::error::ZenspaceError;
use zenspace_core::source::ImageSource;

use common::{encode_png, gradient_image, solid_image, write_png, BLUE};

#[test]
fn test_data_url_round_trip() {
    let encoded = encode_png(&gradient_image(16, 8));
    let url = encoded.to_data_url();
    assert!(url.starts_with("data:image/png;base64,"));
    assert_eq!(EncodedImage::from_data_url(&url).unwrap(), encoded);
}

#[test]
fn test_bare_base64_defaults_to_jpeg() {
    let parsed = EncodedImage::from_data_url("aGVsbG8=").unwrap();
    assert_eq!(parsed.mime_type, MimeType::Jpeg);
    assert_eq!(parsed.data, "aGVsbG8=");
    assert_eq!(parsed.to_bytes().unwrap(), b"hello");
}

#[test]
fn test_jpg_alias_in_data_url() {
    let parsed = EncodedImage::from_data_url("data:image/jpg;base64,aGVsbG8=").unwrap();
    assert_eq!(parsed.mime_type, MimeType::Jpeg);
}

#[test]
fn test_data_url_errors() {
    assert!(matches!(
        EncodedImage::from_data_url("data:image/png,aGVsbG8="),
        Err(ZenspaceError::InvalidDataUrl(_))
    ));
    assert!(matches!(
        EncodedImage::from_data_url("data:text/plain;base64,aGVsbG8="),
        Err(ZenspaceError::InvalidDataUrl(_))
    ));
    assert!(matches!(
        EncodedImage::from_data_url("data:image/gif;base64,aGVsbG8="),
        Err(ZenspaceError::UnsupportedMime(_))
    ));
    assert!(matches!(
        EncodedImage::from_data_url("data:image/png;base64,***"),
        Err(ZenspaceError::Base64(_))
    ));
}

#[test]
fn test_jpeg_export_drops_alpha_and_keeps_size() {
    let mut img = solid_image(33, 17, BLUE);
    img.get_pixel_mut(0, 0).0 = [10, 20, 30, 0];
    let encoded = EncodedImage::encode(&img, ExportFormat::Jpeg, 90).unwrap();
    assert_eq!(encoded.mime_type, MimeType::Jpeg);

    let decoded = encoded.decode().unwrap();
    assert_eq!((decoded.width(), decoded.height()), (33, 17));
    assert!(decoded.to_rgba8().pixels().all(|p| p.0[3] == 255));
}

#[test]
fn test_jpeg_export_composites_alpha_onto_black() {
    let mut img = solid_image(16, 16, [255, 255, 255, 0]);
    for x in 8..16 {
        for y in 0..16 {
            img.get_pixel_mut(x, y).0 = [255, 255, 255, 255];
        }
    }
    let decoded = EncodedImage::encode(&img, ExportFormat::Jpeg, 100)
        .unwrap()
        .decode()
        .unwrap()
        .to_rgb8();

    let clear = decoded.get_pixel(2, 8).0;
    let opaque = decoded.get_pixel(13, 8).0;
    assert!(clear.iter().all(|&c| c < 16), "transparent pixel should be black, got {clear:?}");
    assert!(opaque.iter().all(|&c| c > 239), "opaque pixel should stay white, got {opaque:?}");
}

/// Insert an APP1 EXIF segment carrying only an orientation tag right after SOI.
fn with_exif_orientation(jpeg: &[u8], orientation: u8) -> Vec<u8> {
    let mut app1 = vec![0xFF, 0xE1, 0x00, 0x22];
    app1.extend_from_slice(b"Exif\0\0");
    // Big-endian TIFF header, first IFD at offset 8.
    app1.extend_from_slice(&[b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]);
    // One entry: tag 0x0112 (Orientation), SHORT, count 1, value.
    app1.extend_from_slice(&[0x00, 0x01]);
    app1.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, orientation, 0x00, 0x00]);
    app1.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    let mut out = jpeg[..2].to_vec();
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    out
}

#[test]
fn test_decode_applies_exif_orientation() {
    let landscape = EncodedImage::encode(&gradient_image(40, 20), ExportFormat::Jpeg, 90).unwrap();
    let rotated = with_exif_orientation(&landscape.to_bytes().unwrap(), 6);

    let inline = EncodedImage::from_bytes(MimeType::Jpeg, &rotated).decode().unwrap();
    assert_eq!((inline.width(), inline.height()), (20, 40));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portrait.jpg");
    std::fs::write(&path, &rotated).unwrap();
    let from_disk = ImageSource::Path(path).decode().unwrap();
    assert_eq!((from_disk.width(), from_disk.height()), (20, 40));
}

#[test]
fn test_higher_quality_is_larger() {
    let img = gradient_image(128, 128);
    let low = EncodedImage::encode(&img, ExportFormat::Jpeg, 10).unwrap();
    let high = EncodedImage::encode(&img, ExportFormat::Jpeg, 100).unwrap();
    assert!(high.data.len() > low.data.len());
}

#[test]
fn test_path_source_detects_format() {
    let dir = TempDir::new().unwrap();
    let img = gradient_image(20, 10);
    let path = write_png(dir.path(), "photo.png", &img);

    let source = ImageSource::from(path.as_path());
    let encoded = source.to_encoded().unwrap();
    assert_eq!(encoded.mime_type, MimeType::Png);
    assert_eq!(encoded.decode().unwrap().to_rgba8(), img);
    assert_eq!(source.decode().unwrap().to_rgba8(), img);
}

#[test]
fn test_missing_file_is_io_error() {
    let source = ImageSource::from(std::path::PathBuf::from("/nonexistent/zenspace/room.png"));
    assert!(matches!(source.to_encoded(), Err(ZenspaceError::Io(_))));
}

#[test]
fn test_encoded_image_serializes_camel_case() {
    let encoded = EncodedImage::from_bytes(MimeType::Webp, b"abc");
    let json = serde_json::to_value(&encoded).unwrap();
    assert_eq!(json["mimeType"], "image/webp");
    assert_eq!(json["data"], "YWJj");
}
