//! Display-space and surface-space geometry.
//!
//! Input events arrive in display coordinates (the on-screen, possibly scaled
//! layout of a widget). Raster work happens in surface pixels. [`DisplayRect`]
//! carries the widget's on-screen bounding box for a single event and performs
//! the mapping between the two spaces.

use serde::{Deserialize, Serialize};

/// A 2D point. Used for both display and surface coordinates; the owning API
/// says which space a given point lives in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<[f32; 2]> for Point {
    fn from(p: [f32; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

/// On-screen bounding box of an interactive surface, measured at event time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayRect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect anchored at the origin.
    pub const fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// True when both dimensions are finite and positive.
    pub fn is_measurable(&self) -> bool {
        is_measurable(self.width) && is_measurable(self.height)
    }

    /// Map a display-space point into surface pixels of a `surface_w` x `surface_h` raster.
    ///
    /// X and Y are scaled independently. An axis whose displayed size cannot
    /// be measured maps as identity (offset from the rect origin, unscaled).
    pub fn to_surface(&self, p: Point, surface_w: u32, surface_h: u32) -> Point {
        Point::new(
            map_axis(p.x - self.left, self.width, surface_w as f32),
            map_axis(p.y - self.top, self.height, surface_h as f32),
        )
    }

    /// Horizontal offset of `x` from the left edge, clamped to `[0, width]`.
    pub fn clamped_offset_x(&self, x: f32) -> f32 {
        if !is_measurable(self.width) {
            return 0.0;
        }
        let offset = x - self.left;
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.width)
    }
}

fn is_measurable(extent: f32) -> bool {
    extent.is_finite() && extent > 0.0
}

fn map_axis(offset: f32, displayed: f32, native: f32) -> f32 {
    if is_measurable(displayed) {
        offset * (native / displayed)
    } else {
        offset
    }
}

/// Integer pixel rectangle in surface coordinates (half-open: `[x, x+width)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Smallest rect containing both.
    pub fn union(&self, other: &PixelRect) -> PixelRect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        PixelRect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_axis_unmeasurable_is_identity() {
        assert_eq!(map_axis(12.5, 0.0, 800.0), 12.5);
        assert_eq!(map_axis(12.5, -3.0, 800.0), 12.5);
        assert_eq!(map_axis(12.5, f32::NAN, 800.0), 12.5);
        assert_eq!(map_axis(12.5, f32::INFINITY, 800.0), 12.5);
    }

    #[test]
    fn test_pixel_rect_union() {
        let a = PixelRect { x: 2, y: 3, width: 4, height: 4 };
        let b = PixelRect { x: 0, y: 5, width: 2, height: 10 };
        let u = a.union(&b);
        assert_eq!(u, PixelRect { x: 0, y: 3, width: 6, height: 12 });
    }
}
