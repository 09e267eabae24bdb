use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use zenspace_core::config::EditorConfig;
use zenspace_core::encoding::{EncodedImage, ExportFormat};
use zenspace_core::geometry::DisplayRect;
use zenspace_core::gesture::{PointerEvent, PointerKind, PointerPhase};
use zenspace_core::mask::MaskPainter;

pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const GREEN: [u8; 4] = [0, 200, 0, 255];

/// Uniform opaque image.
pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Horizontal gradient so different columns are distinguishable.
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let v = ((x * 255) / width.max(1)) as u8;
        Rgba([v, (y % 256) as u8, 255 - v, 255])
    })
}

/// Lossless inline encoding of `img`.
pub fn encode_png(img: &RgbaImage) -> EncodedImage {
    EncodedImage::encode(img, ExportFormat::Png, 90).unwrap()
}

/// Save `img` as PNG under `dir`.
pub fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// A painter loaded synchronously with `img`, using default config.
pub fn loaded_painter(img: &RgbaImage) -> MaskPainter {
    let mut painter = MaskPainter::new(encode_png(img), &EditorConfig::default());
    painter.load_blocking().unwrap();
    painter
}

/// Down at the first point, move through the rest, then up.
pub fn drag(painter: &mut MaskPainter, display: &DisplayRect, kind: PointerKind, points: &[(f32, f32)]) {
    let event = |phase, (x, y): (f32, f32)| {
        PointerEvent::new(kind, phase, zenspace_core::geometry::Point::new(x, y))
    };
    let (first, rest) = points.split_first().unwrap();
    painter.handle_event(&event(PointerPhase::Down, *first), display);
    for p in rest {
        painter.handle_event(&event(PointerPhase::Move, *p), display);
    }
    let last = rest.last().unwrap_or(first);
    painter.handle_event(&event(PointerPhase::Up, *last), display);
}

/// Sum of absolute channel differences between two pixels.
pub fn pixel_diff(a: [u8; 4], b: [u8; 4]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as i32 - *y as i32).unsigned_abs())
        .sum()
}
