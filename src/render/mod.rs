mod frame;
mod null_renderer;
mod primitives;
mod sub_canvas;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LineStyle, PolygonPrimitive, PolylinePrimitive, Primitive};
pub use sub_canvas::SubCanvas;

use crate::core::{Point, Polyline, Rect, clip_polygon_y, clip_polyline_y};
use crate::error::ChartResult;

/// Drawing surface chart layers render onto.
///
/// Implementors provide the rectangular extent and the two raw drawing
/// operations; clipping and containment come from the provided methods.
/// Horizontal clipping is left to the implementor.
pub trait Canvas {
    fn bounds(&self) -> Rect;

    fn stroke_polyline(&mut self, style: &LineStyle, points: &[Point]);

    fn fill_polygon(&mut self, color: Color, points: &[Point]);

    fn stroke_line(&mut self, style: &LineStyle, from: Point, to: Point) {
        self.stroke_polyline(style, &[from, to]);
    }

    /// Strokes the outline of an implicitly closed polygon.
    fn stroke_polygon(&mut self, style: &LineStyle, points: &[Point]) {
        let Some(&first) = points.first() else {
            return;
        };
        let mut ring: Polyline = points.iter().copied().collect();
        if points.last() != Some(&first) {
            ring.push(first);
        }
        self.stroke_polyline(style, &ring);
    }

    fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    fn clip_lines_y(&self, points: &[Point]) -> Vec<Polyline> {
        let bounds = self.bounds();
        clip_polyline_y(points, bounds.min.y, bounds.max.y)
    }

    fn clip_polygon_y(&self, points: &[Point]) -> Vec<Point> {
        let bounds = self.bounds();
        clip_polygon_y(points, bounds.min.y, bounds.max.y)
    }
}

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully recorded `RenderFrame`, so chart geometry stays
/// independent of the rasterizer.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
