//! The mask painter: a photo at native resolution that the user paints over
//! with a translucent brush to mark regions for removal.
//!
//! Lifecycle:
//! 1. **Loading**: constructed with an [`ImageSource`]; no surface, strokes refused.
//!    A host decodes the source (on a worker thread or via
//!    [`MaskPainter::load_blocking`]) and hands it to [`MaskPainter::complete_load`].
//! 2. **Ready**: pointer events paint strokes. Each stroke goes
//!    idle → painting on down, extends and renders on every move, and returns
//!    to idle on up or leave.
//!
//! Event positions are in display coordinates; the [`DisplayRect`] passed with
//! each event is used to map them into surface pixels at that moment.

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::config::{BrushConfig, EditorConfig, ExportConfig};
use crate::encoding::EncodedImage;
use crate::error::Result;
use crate::geometry::{DisplayRect, PixelRect, Point};
use crate::gesture::{Disposition, DragGesture, PointerEvent, PointerKind, PointerPhase};
use crate::source::ImageSource;

use super::brush::{paint_segment, BrushStyle, Coverage};
use super::stroke::Stroke;
use super::surface::RasterSurface;

/// A pending asynchronous load. Hand the decoded image back together with
/// `generation` so that loads for a replaced source are discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub source: ImageSource,
}

struct ActiveStroke {
    stroke: Stroke,
    coverage: Coverage,
}

pub struct MaskPainter {
    source: ImageSource,
    brush_config: BrushConfig,
    export_config: ExportConfig,
    generation: u64,
    surface: Option<RasterSurface>,
    gesture: DragGesture,
    active: Option<ActiveStroke>,
    /// Strokes painted since the last clear, oldest first.
    strokes: Vec<Stroke>,
    has_mask: bool,
}

impl MaskPainter {
    pub fn new(source: impl Into<ImageSource>, config: &EditorConfig) -> Self {
        Self {
            source: source.into(),
            brush_config: config.brush.clone(),
            export_config: config.export.clone(),
            generation: 0,
            surface: None,
            gesture: DragGesture::Inactive,
            active: None,
            strokes: Vec::new(),
            has_mask: false,
        }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn load_request(&self) -> LoadRequest {
        LoadRequest {
            generation: self.generation,
            source: self.source.clone(),
        }
    }

    /// Replace the photo. The painter returns to the loading state.
    pub fn set_source(&mut self, source: impl Into<ImageSource>) {
        self.source = source.into();
        self.generation += 1;
        self.surface = None;
        self.abort_stroke();
        self.strokes.clear();
        self.has_mask = false;
        debug!(generation = self.generation, source = %self.source, "Mask source replaced");
    }

    /// Load-completion callback. Returns `Ok(false)` when the load was for a
    /// source that has since been replaced.
    pub fn complete_load(&mut self, generation: u64, image: &DynamicImage) -> Result<bool> {
        if generation != self.generation {
            warn!(
                stale = generation,
                current = self.generation,
                "Discarding stale mask source load"
            );
            return Ok(false);
        }

        let surface = RasterSurface::from_image(image)?;
        info!(
            width = surface.width(),
            height = surface.height(),
            brush = brush_width_for(&surface, &self.brush_config),
            "Mask surface ready"
        );
        self.surface = Some(surface);
        self.abort_stroke();
        self.strokes.clear();
        self.has_mask = false;
        Ok(true)
    }

    /// Decode the current source on this thread and complete the load.
    pub fn load_blocking(&mut self) -> Result<()> {
        let request = self.load_request();
        let image = request.source.decode()?;
        self.complete_load(request.generation, &image)?;
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    pub fn is_painting(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn has_mask(&self) -> bool {
        self.has_mask
    }

    pub fn surface(&self) -> Option<&RasterSurface> {
        self.surface.as_ref()
    }

    /// Native surface size, once loaded.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(RasterSurface::dimensions)
    }

    /// Completed strokes since the last clear.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The stroke currently being painted.
    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.active.as_ref().map(|a| &a.stroke)
    }

    /// Brush for the loaded surface.
    pub fn brush(&self) -> Option<BrushStyle> {
        self.surface
            .as_ref()
            .map(|s| BrushStyle::for_surface(s.width(), &self.brush_config))
    }

    /// Surface region changed since the last call.
    pub fn take_dirty(&mut self) -> Option<PixelRect> {
        self.surface.as_mut().and_then(RasterSurface::take_dirty)
    }

    /// Route a unified pointer event.
    ///
    /// Down only starts a stroke inside `display`. A mouse moving outside
    /// `display` mid-stroke counts as leaving the surface; touch moves keep
    /// painting (clipped to the raster) until the touch ends.
    pub fn handle_event(&mut self, event: &PointerEvent, display: &DisplayRect) -> Disposition {
        match event.phase {
            PointerPhase::Down => {
                if !display.contains(event.position) {
                    return Disposition::Ignored;
                }
                self.pointer_down(event.position, event.kind, display)
            }
            PointerPhase::Move => {
                if event.kind == PointerKind::Mouse
                    && self.is_painting()
                    && !display.contains(event.position)
                {
                    return self.pointer_leave();
                }
                self.pointer_move(event.position, display)
            }
            PointerPhase::Up | PointerPhase::Cancel => self.pointer_up(),
            PointerPhase::Leave => self.pointer_leave(),
        }
    }

    /// idle → painting.
    pub fn pointer_down(&mut self, pos: Point, kind: PointerKind, display: &DisplayRect) -> Disposition {
        let Some((w, h)) = self.dimensions() else {
            debug!("Ignoring stroke start before the mask surface is ready");
            return Disposition::Ignored;
        };
        if self.is_painting() {
            self.finish_stroke();
        }

        let start = display.to_surface(pos, w, h);
        let style = BrushStyle::for_surface(w, &self.brush_config);

        self.has_mask = true;
        self.gesture.begin(kind);
        self.active = Some(ActiveStroke {
            stroke: Stroke::begin(start, style, kind),
            coverage: Coverage::new(w, h),
        });
        debug!(x = start.x, y = start.y, width = style.width, ?kind, "Stroke started");
        Disposition::Handled
    }

    /// painting → painting: extend the path and render the new segment now.
    pub fn pointer_move(&mut self, pos: Point, display: &DisplayRect) -> Disposition {
        let (Some(surface), Some(active)) = (self.surface.as_mut(), self.active.as_mut()) else {
            return Disposition::Ignored;
        };

        let (w, h) = surface.dimensions();
        let p = display.to_surface(pos, w, h);
        let (a, b) = active.stroke.extend(p);
        let style = *active.stroke.style();
        paint_segment(surface, &mut active.coverage, a, b, &style);

        match active.stroke.kind() {
            PointerKind::Touch => Disposition::PreventDefault,
            PointerKind::Mouse => Disposition::Handled,
        }
    }

    /// painting → idle. No-op when idle.
    pub fn pointer_up(&mut self) -> Disposition {
        if self.finish_stroke() {
            Disposition::Handled
        } else {
            Disposition::Ignored
        }
    }

    /// The pointer left the surface: same as releasing it.
    pub fn pointer_leave(&mut self) -> Disposition {
        self.pointer_up()
    }

    /// Discard all paint by redrawing the source. Idempotent.
    pub fn clear(&mut self) {
        self.abort_stroke();
        self.strokes.clear();
        self.has_mask = false;
        if let Some(surface) = self.surface.as_mut() {
            surface.reset();
            info!("Mask cleared");
        }
    }

    /// Flattened source + paint, compressed per the export config.
    ///
    /// Before the surface is loaded this returns the original source
    /// reference. Never mutates the surface.
    pub fn export(&self) -> ImageSource {
        match self.export_encoded() {
            Ok(Some(encoded)) => ImageSource::Encoded(encoded),
            Ok(None) => self.source.clone(),
            Err(e) => {
                warn!(error = %e, "Mask export failed; falling back to source image");
                self.source.clone()
            }
        }
    }

    /// Like [`MaskPainter::export`] but reports encoding failures and returns
    /// `None` before the surface is loaded.
    pub fn export_encoded(&self) -> Result<Option<EncodedImage>> {
        let Some(surface) = self.surface.as_ref() else {
            return Ok(None);
        };
        let encoded = EncodedImage::encode(
            surface.canvas(),
            self.export_config.format,
            self.export_config.quality,
        )?;
        debug!(
            format = %self.export_config.format,
            bytes = encoded.data.len(),
            strokes = self.strokes.len(),
            "Mask exported"
        );
        Ok(Some(encoded))
    }

    fn finish_stroke(&mut self) -> bool {
        if !self.gesture.end() {
            return false;
        }
        if let Some(active) = self.active.take() {
            debug!(
                points = active.stroke.points().len(),
                length = active.stroke.length(),
                "Stroke finished"
            );
            self.strokes.push(active.stroke);
        }
        true
    }

    fn abort_stroke(&mut self) {
        self.gesture.end();
        self.active = None;
    }
}

fn brush_width_for(surface: &RasterSurface, config: &BrushConfig) -> f32 {
    BrushStyle::for_surface(surface.width(), config).width
}
