use std::fmt;

use tracing::debug;

use crate::core::{AxisDomain, ChartLayer, LinearScale, Padding, Rect};
use crate::error::ChartResult;
use crate::render::{Canvas, SubCanvas};

/// Minimal plot host: a pair of axes auto-ranged from the layers it holds.
///
/// Tick marks, labels and titles are not drawn; the plot only maps its axes
/// onto the data area of a canvas and renders every layer there.
#[derive(Default)]
pub struct Plot {
    x: AxisDomain,
    y: AxisDomain,
    layers: Vec<Box<dyn ChartLayer + Send + Sync>>,
}

impl fmt::Debug for Plot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plot")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl Plot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer and widens both axes to cover its data extent.
    pub fn add<L>(&mut self, layer: L)
    where
        L: ChartLayer + Send + Sync + 'static,
    {
        let extent = layer.data_extent();
        if !extent.is_empty() {
            self.x.include(extent.min_x, extent.max_x);
            self.y.include(extent.min_y, extent.max_y);
        }
        self.layers.push(Box::new(layer));
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn x_axis(&self) -> AxisDomain {
        self.x
    }

    pub fn x_axis_mut(&mut self) -> &mut AxisDomain {
        &mut self.x
    }

    #[must_use]
    pub fn y_axis(&self) -> AxisDomain {
        self.y
    }

    pub fn y_axis_mut(&mut self) -> &mut AxisDomain {
        &mut self.y
    }

    /// Largest edge reservation of any layer, as device margins.
    #[must_use]
    pub fn edge_padding(&self) -> Padding {
        let mut padding = Padding::default();
        for glyph_box in self.layers.iter().flat_map(|layer| layer.edge_reservation()) {
            padding.left = padding.left.max(-glyph_box.offset.min.x);
            padding.top = padding.top.max(-glyph_box.offset.min.y);
            padding.right = padding.right.max(glyph_box.offset.max.x);
            padding.bottom = padding.bottom.max(glyph_box.offset.max.y);
        }
        padding
    }

    /// Shrinks `bounds` by `edge_padding`, so marks drawn at the axis extremes
    /// stay inside `bounds`.
    #[must_use]
    pub fn data_area(&self, bounds: Rect) -> Rect {
        inset(bounds, self.edge_padding())
    }

    /// Time and value transforms onto `area`; larger values sit higher.
    pub fn transforms(&self, area: Rect) -> ChartResult<(LinearScale, LinearScale)> {
        let x = self.x.scale_onto(area.min.x, area.max.x)?;
        let y = self.y.scale_onto(area.max.y, area.min.y)?;
        Ok((x, y))
    }

    /// Renders every layer into the data area of `canvas`.
    pub fn draw(&self, canvas: &mut dyn Canvas) -> ChartResult<()> {
        self.draw_with_padding(canvas, self.edge_padding())
    }

    /// Like `draw`, but with caller-chosen margins around the data area.
    ///
    /// Plots stacked on a shared time axis must use the same left and right
    /// margins, otherwise equal times land on different x positions.
    pub fn draw_with_padding(&self, canvas: &mut dyn Canvas, padding: Padding) -> ChartResult<()> {
        let area = inset(canvas.bounds(), padding);
        if area.is_empty() {
            debug!(?area, "plot data area is empty, nothing drawn");
            return Ok(());
        }

        let (x, y) = self.transforms(area)?;
        let mut data_canvas = SubCanvas::new(canvas, area);
        for layer in &self.layers {
            layer.render(&mut data_canvas, &x, &y);
        }
        Ok(())
    }
}

fn inset(bounds: Rect, padding: Padding) -> Rect {
    bounds.inset(padding.left, padding.top, padding.right, padding.bottom)
}
