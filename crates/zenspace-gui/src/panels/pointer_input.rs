//! Translate egui input events into the core's unified pointer events.

use zenspace_core::geometry::Point;
use zenspace_core::gesture::{PointerEvent, PointerKind, PointerPhase};

fn point(pos: egui::Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

/// Pointer events for this frame, in screen coordinates.
///
/// While a touch is down, egui also synthesizes mouse events for it; those are
/// dropped so every contact is reported once, as touch.
pub fn collect_events(ctx: &egui::Context, touch_active: &mut bool) -> Vec<PointerEvent> {
    let raw = ctx.input(|i| i.events.clone());
    let mut events = Vec::new();

    for event in raw {
        match event {
            egui::Event::Touch { phase, pos, .. } => {
                let phase = match phase {
                    egui::TouchPhase::Start => {
                        *touch_active = true;
                        PointerPhase::Down
                    }
                    egui::TouchPhase::Move => PointerPhase::Move,
                    egui::TouchPhase::End => {
                        *touch_active = false;
                        PointerPhase::Up
                    }
                    egui::TouchPhase::Cancel => {
                        *touch_active = false;
                        PointerPhase::Cancel
                    }
                };
                events.push(PointerEvent::new(PointerKind::Touch, phase, point(pos)));
            }
            _ if *touch_active => {}
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => {
                let phase = if pressed { PointerPhase::Down } else { PointerPhase::Up };
                events.push(PointerEvent::new(PointerKind::Mouse, phase, point(pos)));
            }
            egui::Event::PointerMoved(pos) => {
                events.push(PointerEvent::new(PointerKind::Mouse, PointerPhase::Move, point(pos)));
            }
            egui::Event::PointerGone => {
                let pos = ctx.input(|i| i.pointer.latest_pos()).unwrap_or_default();
                events.push(PointerEvent::new(PointerKind::Mouse, PointerPhase::Leave, point(pos)));
            }
            _ => {}
        }
    }
    events
}

/// Stop touch drags from scrolling or zooming anything else this frame.
pub fn suppress_scroll(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.smooth_scroll_delta = egui::Vec2::ZERO;
        i.raw_scroll_delta = egui::Vec2::ZERO;
    });
}
