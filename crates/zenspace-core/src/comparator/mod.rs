//! Before/after split comparator.
//!
//! Two same-framed images are overlaid: "after" is the base layer, "before"
//! is clipped to the region left of a vertical boundary. Pressing anywhere on
//! the surface starts a drag without moving the boundary; while dragging,
//! moves anywhere (including outside the surface) set the boundary, and a
//! release anywhere ends it.

pub mod render;

use tracing::debug;

use crate::capture::{CaptureGuard, PointerCapture};
use crate::config::ComparatorConfig;
use crate::consts::{BOUNDARY_MAX, BOUNDARY_MIN, DEFAULT_BOUNDARY, LABEL_INSET};
use crate::geometry::{DisplayRect, Point};
use crate::gesture::{Disposition, DragGesture, PointerEvent, PointerKind, PointerPhase};
use crate::source::ImageSource;

pub use render::{compose_split, split_column};

/// Divider position as a percentage of the surface width, always in [0, 100].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Boundary(f32);

impl Boundary {
    /// Clamp into range. NaN maps to the centre.
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self(DEFAULT_BOUNDARY);
        }
        Self(percent.clamp(BOUNDARY_MIN, BOUNDARY_MAX))
    }

    /// Boundary under display-space `x`, for a surface spanning `display`.
    /// Offsets outside the surface clamp to its edges.
    pub fn from_display_x(x: f32, display: &DisplayRect) -> Option<Self> {
        if !display.is_measurable() {
            return None;
        }
        let offset = display.clamped_offset_x(x);
        Some(Self::new(offset / display.width * 100.0))
    }

    pub fn percent(&self) -> f32 {
        self.0
    }

    pub fn fraction(&self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self(DEFAULT_BOUNDARY)
    }
}

/// Display-space layout of the comparator for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitLayout {
    /// Region where the "before" image is visible.
    pub before_clip: DisplayRect,
    /// X coordinate of the divider.
    pub divider_x: f32,
    /// The thin visual handle, centred on the divider.
    pub handle: DisplayRect,
    /// Larger touch target around the handle.
    pub grab: DisplayRect,
    /// Top-left anchor of the "before" label.
    pub before_label_anchor: Point,
    /// Top-right anchor of the "after" label.
    pub after_label_anchor: Point,
}

pub struct SplitComparator {
    before: ImageSource,
    after: ImageSource,
    boundary: Boundary,
    initial: Boundary,
    gesture: DragGesture,
    capture: PointerCapture,
    guard: Option<CaptureGuard>,
    config: ComparatorConfig,
}

impl SplitComparator {
    pub fn new(before: ImageSource, after: ImageSource, capture: &PointerCapture) -> Self {
        Self::with_config(before, after, capture, &ComparatorConfig::default())
    }

    pub fn with_config(
        before: ImageSource,
        after: ImageSource,
        capture: &PointerCapture,
        config: &ComparatorConfig,
    ) -> Self {
        let initial = Boundary::new(config.default_boundary);
        Self {
            before,
            after,
            boundary: initial,
            initial,
            gesture: DragGesture::Inactive,
            capture: capture.clone(),
            guard: None,
            config: config.clone(),
        }
    }

    pub fn before(&self) -> &ImageSource {
        &self.before
    }

    pub fn after(&self) -> &ImageSource {
        &self.after
    }

    /// Keep the "before" image and compare it against another result.
    pub fn set_after(&mut self, after: ImageSource) {
        let before = self.before.clone();
        self.set_images(before, after);
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    /// Whether this comparator currently holds a pointer capture.
    pub fn has_capture(&self) -> bool {
        self.guard
            .as_ref()
            .is_some_and(|g| self.capture.holds(g.id()))
    }

    pub fn before_label(&self) -> &str {
        &self.config.before_label
    }

    pub fn after_label(&self) -> &str {
        &self.config.after_label
    }

    /// Swap in a new image pair. The boundary does not carry over.
    pub fn set_images(&mut self, before: ImageSource, after: ImageSource) {
        self.release();
        self.before = before;
        self.after = after;
        self.boundary = self.initial;
    }

    /// Route a unified pointer event. Down counts only inside `display`;
    /// move and release are global while a drag is active.
    pub fn handle_event(&mut self, event: &PointerEvent, display: &DisplayRect) -> Disposition {
        match event.phase {
            PointerPhase::Down => {
                if !display.contains(event.position) {
                    return Disposition::Ignored;
                }
                self.pointer_down(event.kind)
            }
            PointerPhase::Move => self.pointer_move(event.position, display),
            PointerPhase::Up | PointerPhase::Cancel => self.pointer_up(),
            // Leaving the surface does not end a comparator drag.
            PointerPhase::Leave => Disposition::Ignored,
        }
    }

    /// inactive → active. Captures the pointer; the boundary moves on the next move.
    pub fn pointer_down(&mut self, kind: PointerKind) -> Disposition {
        self.gesture.begin(kind);
        if self.guard.is_none() {
            self.guard = Some(self.capture.acquire());
        }
        debug!(boundary = self.boundary.percent(), "Comparator drag started");
        Disposition::Handled
    }

    /// Global move: updates the boundary only while active.
    pub fn pointer_move(&mut self, pos: Point, display: &DisplayRect) -> Disposition {
        let Some(kind) = self.gesture.kind() else {
            return Disposition::Ignored;
        };
        self.track(pos, display);
        match kind {
            PointerKind::Touch => Disposition::PreventDefault,
            PointerKind::Mouse => Disposition::Handled,
        }
    }

    /// Global release: active → inactive, capture released.
    pub fn pointer_up(&mut self) -> Disposition {
        if self.release() {
            debug!(boundary = self.boundary.percent(), "Comparator drag ended");
            Disposition::Handled
        } else {
            Disposition::Ignored
        }
    }

    pub fn layout(&self, display: &DisplayRect) -> SplitLayout {
        let width = if display.is_measurable() { display.width } else { 0.0 };
        let height = if display.height.is_finite() { display.height.max(0.0) } else { 0.0 };
        let divider_x = display.left + width * self.boundary.fraction();

        let centred = |w: f32| DisplayRect::new(divider_x - w / 2.0, display.top, w, height);

        SplitLayout {
            before_clip: DisplayRect::new(display.left, display.top, divider_x - display.left, height),
            divider_x,
            handle: centred(self.config.handle_width),
            grab: centred(self.config.grab_width.max(self.config.handle_width)),
            before_label_anchor: Point::new(display.left + LABEL_INSET, display.top + LABEL_INSET),
            after_label_anchor: Point::new(display.left + width - LABEL_INSET, display.top + LABEL_INSET),
        }
    }

    fn track(&mut self, pos: Point, display: &DisplayRect) {
        if let Some(boundary) = Boundary::from_display_x(pos.x, display) {
            self.boundary = boundary;
        }
    }

    fn release(&mut self) -> bool {
        self.guard = None;
        self.gesture.end()
    }
}
