use crate::core::{Point, Rect};
use crate::render::{Canvas, Color, LineStyle};

/// View of another canvas restricted to a sub-rectangle.
///
/// Draw calls pass straight through to the parent surface; only `bounds`
/// (and therefore clipping and containment) change.
pub struct SubCanvas<'a> {
    parent: &'a mut dyn Canvas,
    bounds: Rect,
}

impl<'a> SubCanvas<'a> {
    pub fn new(parent: &'a mut dyn Canvas, bounds: Rect) -> Self {
        Self { parent, bounds }
    }
}

impl Canvas for SubCanvas<'_> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn stroke_polyline(&mut self, style: &LineStyle, points: &[Point]) {
        self.parent.stroke_polyline(style, points);
    }

    fn fill_polygon(&mut self, color: Color, points: &[Point]) {
        self.parent.fill_polygon(color, points);
    }
}
