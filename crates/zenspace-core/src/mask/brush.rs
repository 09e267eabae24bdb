//! Round-capped brush rasterization.
//!
//! A stroke is the union of capsules (segments thickened to `width`), which
//! gives round caps and round joins. Each stroke carries a coverage bitmap so
//! a pixel is blended at most once per stroke: overlapping segments of the
//! same stroke do not darken, while separate strokes do accumulate.

use crate::config::BrushConfig;
use crate::geometry::{PixelRect, Point};

use super::surface::RasterSurface;

/// Paint style of the mask brush.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushStyle {
    pub color: [u8; 3],
    /// Opacity in [0.0, 1.0].
    pub opacity: f32,
    /// Line width in surface pixels.
    pub width: f32,
}

impl BrushStyle {
    /// Brush for a surface of the given width: `max(min_width, width / divisor)`.
    pub fn for_surface(surface_width: u32, config: &BrushConfig) -> Self {
        Self {
            color: config.color,
            opacity: config.opacity.clamp(0.0, 1.0),
            width: brush_width(surface_width, config),
        }
    }

    pub fn radius(&self) -> f32 {
        self.width / 2.0
    }
}

pub fn brush_width(surface_width: u32, config: &BrushConfig) -> f32 {
    (surface_width as f32 / config.width_divisor).max(config.min_width)
}

/// Per-stroke record of pixels already blended.
#[derive(Clone, Debug)]
pub struct Coverage {
    width: u32,
    bits: Vec<u64>,
}

impl Coverage {
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize * height as usize).div_ceil(64);
        Self {
            width,
            bits: vec![0; len],
        }
    }

    /// Mark the pixel; returns true if it was not yet covered.
    fn insert(&mut self, x: u32, y: u32) -> bool {
        let idx = y as usize * self.width as usize + x as usize;
        let (word, bit) = (idx / 64, idx % 64);
        let mask = 1u64 << bit;
        let fresh = self.bits[word] & mask == 0;
        self.bits[word] |= mask;
        fresh
    }

    pub fn count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Paint the capsule from `a` to `b` into the surface. Returns the touched region.
pub fn paint_segment(
    surface: &mut RasterSurface,
    coverage: &mut Coverage,
    a: Point,
    b: Point,
    style: &BrushStyle,
) -> Option<PixelRect> {
    let (w, h) = surface.dimensions();
    let r = style.radius();
    if r <= 0.0 || !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
        return None;
    }

    let x0 = (a.x.min(b.x) - r).floor().max(0.0);
    let y0 = (a.y.min(b.y) - r).floor().max(0.0);
    let x1 = (a.x.max(b.x) + r).ceil().min(w as f32);
    let y1 = (a.y.max(b.y) + r).ceil().min(h as f32);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    let (x0, y0, x1, y1) = (x0 as u32, y0 as u32, x1 as u32, y1 as u32);

    let r2 = r * r;
    let alpha = style.opacity;
    let canvas = surface.canvas_mut();
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            if distance_sq_to_segment(p, a, b) > r2 || !coverage.insert(x, y) {
                continue;
            }
            let px = canvas.get_pixel_mut(x, y);
            px.0 = blend_over(px.0, style.color, alpha);
        }
    }

    let rect = PixelRect {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    };
    surface.mark_dirty(rect);
    Some(rect)
}

fn distance_sq_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (dx, dy) = (p.x - (a.x + t * abx), p.y - (a.y + t * aby));
    dx * dx + dy * dy
}

/// Source-over blend of an RGB colour at `alpha` onto an RGBA pixel.
fn blend_over(dst: [u8; 4], color: [u8; 3], alpha: f32) -> [u8; 4] {
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = alpha + dst_a * (1.0 - alpha);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }
    let mut out = [0u8; 4];
    for c in 0..3 {
        let v = (color[c] as f32 * alpha + dst[c] as f32 * dst_a * (1.0 - alpha)) / out_a;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    out
}
