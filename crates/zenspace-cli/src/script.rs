//! Scripted pointer gestures for headless masking.
//!
//! ```toml
//! [display]            # optional; defaults to the photo's native size
//! left = 0.0
//! top = 0.0
//! width = 400.0
//! height = 300.0
//!
//! [[gesture]]
//! kind = "mouse"       # or "touch"
//! points = [[100.0, 100.0], [200.0, 100.0], [200.0, 200.0]]
//! end = "up"           # or "leave"
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use zenspace_core::geometry::{DisplayRect, Point};
use zenspace_core::gesture::{PointerEvent, PointerKind, PointerPhase};

#[derive(Debug, Deserialize)]
pub struct GestureScript {
    pub display: Option<DisplayRect>,
    #[serde(default, rename = "gesture")]
    pub gestures: Vec<ScriptedGesture>,
}

#[derive(Debug, Deserialize)]
pub struct ScriptedGesture {
    #[serde(default)]
    pub kind: PointerKind,
    pub points: Vec<[f32; 2]>,
    #[serde(default)]
    pub end: GestureEnd,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureEnd {
    #[default]
    Up,
    Leave,
}

impl GestureScript {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read gesture script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid gesture script {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let script: Self = toml::from_str(text)?;
        if let Some(i) = script.gestures.iter().position(|g| g.points.is_empty()) {
            bail!("gesture {} has no points", i + 1);
        }
        Ok(script)
    }

    /// Display rect to use, falling back to the surface's native size.
    pub fn display_for(&self, width: u32, height: u32) -> DisplayRect {
        self.display
            .unwrap_or_else(|| DisplayRect::sized(width as f32, height as f32))
    }

    /// Flatten every gesture into down, moves, then up or leave.
    pub fn events(&self) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        for gesture in &self.gestures {
            let points: Vec<Point> = gesture.points.iter().copied().map(Point::from).collect();
            let Some((first, rest)) = points.split_first() else {
                continue;
            };
            events.push(PointerEvent::new(gesture.kind, PointerPhase::Down, *first));
            for p in rest {
                events.push(PointerEvent::new(gesture.kind, PointerPhase::Move, *p));
            }
            let last = rest.last().unwrap_or(first);
            let phase = match gesture.end {
                GestureEnd::Up => PointerPhase::Up,
                GestureEnd::Leave => PointerPhase::Leave,
            };
            events.push(PointerEvent::new(gesture.kind, phase, *last));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_flatten() {
        let script = GestureScript::parse(
            r#"
            [display]
            left = 0.0
            top = 0.0
            width = 400.0
            height = 300.0

            [[gesture]]
            points = [[100.0, 100.0], [200.0, 100.0], [200.0, 200.0]]

            [[gesture]]
            kind = "touch"
            points = [[10.0, 10.0]]
            end = "leave"
            "#,
        )
        .unwrap();

        let events = script.events();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0].phase, PointerPhase::Down);
        assert_eq!(events[0].kind, PointerKind::Mouse);
        assert_eq!(events[3].phase, PointerPhase::Up);
        assert_eq!(events[3].position, Point::new(200.0, 200.0));
        assert_eq!(events[4].kind, PointerKind::Touch);
        assert_eq!(events[5].phase, PointerPhase::Leave);
        assert_eq!(script.display_for(1, 1).width, 400.0);
    }

    #[test]
    fn test_display_defaults_to_native() {
        let script = GestureScript::parse("").unwrap();
        assert!(script.events().is_empty());
        assert_eq!(script.display_for(800, 600), DisplayRect::sized(800.0, 600.0));
    }

    #[test]
    fn test_empty_gesture_rejected() {
        assert!(GestureScript::parse("[[gesture]]\npoints = []").is_err());
    }
}
