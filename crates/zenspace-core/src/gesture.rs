//! Unified pointer/touch input and the two-phase drag gesture.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Device that produced a pointer event. Mouse and touch input are handled
/// identically except that touch moves during a gesture suppress page scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Mouse button pressed or first touch started.
    Down,
    Move,
    /// Mouse button released or touch ended.
    Up,
    /// Pointer left the interactive surface.
    Leave,
    /// Platform cancelled the touch sequence.
    Cancel,
}

/// A single input event in display coordinates.
///
/// For multi-touch input only the first touch point is reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, phase: PointerPhase, position: Point) -> Self {
        Self {
            kind,
            phase,
            position,
        }
    }

    pub fn mouse(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self::new(PointerKind::Mouse, phase, Point::new(x, y))
    }

    pub fn touch(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self::new(PointerKind::Touch, phase, Point::new(x, y))
    }
}

/// What a component did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// The event had no effect.
    Ignored,
    /// The event changed component state.
    Handled,
    /// Handled, and the host must suppress its default scroll/pan for this event.
    PreventDefault,
}

/// Two-phase drag state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragGesture {
    #[default]
    Inactive,
    Active { kind: PointerKind },
}

impl DragGesture {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn kind(&self) -> Option<PointerKind> {
        match self {
            Self::Active { kind } => Some(*kind),
            Self::Inactive => None,
        }
    }

    pub fn begin(&mut self, kind: PointerKind) {
        *self = Self::Active { kind };
    }

    /// End the gesture. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        let was_active = self.is_active();
        *self = Self::Inactive;
        was_active
    }
}
