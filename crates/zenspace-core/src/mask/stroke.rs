use crate::geometry::Point;
use crate::gesture::PointerKind;

use super::brush::BrushStyle;

/// One continuous paint gesture, in surface-pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    style: BrushStyle,
    kind: PointerKind,
}

impl Stroke {
    pub fn begin(start: Point, style: BrushStyle, kind: PointerKind) -> Self {
        Self {
            points: vec![start],
            style,
            kind,
        }
    }

    /// Append a point; returns the segment to render.
    pub fn extend(&mut self, p: Point) -> (Point, Point) {
        let last = self.last();
        self.points.push(p);
        (last, p)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last(&self) -> Point {
        // Never empty: constructed with a start point.
        self.points[self.points.len() - 1]
    }

    pub fn style(&self) -> &BrushStyle {
        &self.style
    }

    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    /// Path length in surface pixels.
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}
