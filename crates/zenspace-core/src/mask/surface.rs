use image::{DynamicImage, RgbaImage};

use crate::error::{Result, ZenspaceError};
use crate::geometry::PixelRect;

/// RGBA raster at the source photo's native resolution.
///
/// Dimensions are fixed at construction. A pristine copy of the source is
/// kept so the painted canvas can be reset without reloading.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    source: RgbaImage,
    canvas: RgbaImage,
    dirty: Option<PixelRect>,
}

impl RasterSurface {
    pub fn new(source: RgbaImage) -> Result<Self> {
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(ZenspaceError::InvalidDimensions { width, height });
        }
        let canvas = source.clone();
        Ok(Self {
            source,
            canvas,
            dirty: Some(PixelRect {
                x: 0,
                y: 0,
                width,
                height,
            }),
        })
    }

    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        Self::new(image.to_rgba8())
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    pub fn full_rect(&self) -> PixelRect {
        PixelRect {
            x: 0,
            y: 0,
            width: self.width(),
            height: self.height(),
        }
    }

    /// Current composite: source pixels plus paint.
    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// The unpainted source pixels.
    pub fn source(&self) -> &RgbaImage {
        &self.source
    }

    /// Whether the canvas still equals the source.
    pub fn is_pristine(&self) -> bool {
        self.canvas.as_raw() == self.source.as_raw()
    }

    /// Redraw the source over the whole canvas, discarding paint.
    pub fn reset(&mut self) {
        self.canvas.copy_from_slice(self.source.as_raw());
        self.dirty = Some(self.full_rect());
    }

    pub(crate) fn canvas_mut(&mut self) -> &mut RgbaImage {
        &mut self.canvas
    }

    pub(crate) fn mark_dirty(&mut self, rect: PixelRect) {
        self.dirty = Some(match self.dirty {
            Some(existing) => existing.union(&rect),
            None => rect,
        });
    }

    /// Region changed since the last call, if any.
    pub fn take_dirty(&mut self) -> Option<PixelRect> {
        self.dirty.take()
    }
}
