use crate::core::{Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::{Canvas, Color, LineStyle, PolygonPrimitive, PolylinePrimitive, Primitive};

/// Recording canvas: every draw call becomes a backend-agnostic primitive.
///
/// Primitives are kept in call order and backends replay them in that order,
/// so a later fill covers earlier strokes where they overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub bounds: Rect,
    pub primitives: Vec<Primitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            primitives: Vec::new(),
        }
    }

    /// Frame covering `0..width x 0..height`.
    #[must_use]
    pub fn with_size(width: f64, height: f64) -> Self {
        Self::new(Rect::from_ltwh(0.0, 0.0, width, height))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.bounds.is_empty()
            || !self.bounds.width().is_finite()
            || !self.bounds.height().is_finite()
        {
            return Err(ChartError::InvalidData(format!(
                "frame bounds must be finite and non-empty: {:?}",
                self.bounds
            )));
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }

        Ok(())
    }

    /// Stroked polylines in call order.
    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Polyline(polyline) => Some(polyline),
            Primitive::Polygon(_) => None,
        })
    }

    /// Filled polygons in call order.
    pub fn polygons(&self) -> impl Iterator<Item = &PolygonPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Polygon(polygon) => Some(polygon),
            Primitive::Polyline(_) => None,
        })
    }

    #[must_use]
    pub fn polyline_count(&self) -> usize {
        self.polylines().count()
    }

    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

impl Canvas for RenderFrame {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn stroke_polyline(&mut self, style: &LineStyle, points: &[Point]) {
        if points.len() < 2 {
            return;
        }
        self.primitives.push(Primitive::Polyline(PolylinePrimitive {
            points: points.iter().copied().collect(),
            style: style.clone(),
        }));
    }

    fn fill_polygon(&mut self, color: Color, points: &[Point]) {
        if points.len() < 3 {
            return;
        }
        self.primitives.push(Primitive::Polygon(PolygonPrimitive {
            points: points.to_vec(),
            fill: color,
        }));
    }
}
