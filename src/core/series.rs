use serde::{Deserialize, Serialize};

use crate::core::{AxisTransform, DataExtent, MarketDataset, MarketRecord, Point, Rect};
use crate::error::ChartResult;
use crate::render::{Canvas, Color, LineStyle};

/// A renderable view of one market dataset.
///
/// `render` only draws; it never fails for finite input and never touches the
/// dataset. `data_extent` and `edge_reservation` feed host auto-ranging.
pub trait ChartLayer {
    fn render(&self, canvas: &mut dyn Canvas, x: &dyn AxisTransform, y: &dyn AxisTransform);

    fn data_extent(&self) -> DataExtent;

    /// Boxes anchored at the lowest and highest data corners, sized to how far
    /// the layer draws beyond a data point horizontally.
    fn edge_reservation(&self) -> [GlyphBox; 2];
}

/// Device-space margin reserved around a data-space anchor.
///
/// `offset` is relative to the device position of `(anchor_x, anchor_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphBox {
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub offset: Rect,
}

impl GlyphBox {
    /// Absolute device rectangle of this box under the given transforms.
    #[must_use]
    pub fn device_rect(&self, x: &dyn AxisTransform, y: &dyn AxisTransform) -> Rect {
        let dx = x.to_device(self.anchor_x);
        let dy = y.to_device(self.anchor_y);
        Rect::from_ltrb(
            dx + self.offset.min.x,
            dy + self.offset.min.y,
            dx + self.offset.max.x,
            dy + self.offset.max.y,
        )
    }
}

/// Up/down colors plus the line style shared by every record of a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    /// Used when `close >= open`.
    pub up_color: Color,
    /// Used when `close < open`.
    pub down_color: Color,
    pub line: LineStyle,
}

impl LayerStyle {
    #[must_use]
    pub fn new(up_color: Color, down_color: Color) -> Self {
        Self {
            up_color,
            down_color,
            line: LineStyle::default(),
        }
    }

    #[must_use]
    pub fn tone(&self, record: &MarketRecord) -> Color {
        if record.is_bullish() {
            self.up_color
        } else {
            self.down_color
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.up_color.validate()?;
        self.down_color.validate()?;
        self.line.validate()
    }
}

/// Colors resolved for one record.
#[derive(Debug, Clone, Copy)]
pub struct RecordPaint<'a> {
    /// Up or down color of the record.
    pub tone: Color,
    /// The layer's line style as configured.
    pub line: &'a LineStyle,
    /// The layer's line style recolored with `tone`.
    pub toned_line: &'a LineStyle,
}

/// Per-variant geometry of a `SeriesLayer`.
pub trait Glyph {
    /// Draws one record whose time maps to device `x`.
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        record: &MarketRecord,
        x: f64,
        y: &dyn AxisTransform,
        paint: RecordPaint<'_>,
    );

    /// Folds one record into the running `(min_y, max_y)`.
    fn fold_vertical(&self, (min_y, max_y): (f64, f64), record: &MarketRecord) -> (f64, f64) {
        (min_y.min(record.low), max_y.max(record.high))
    }

    /// Horizontal distance drawn beyond a data point on either side.
    fn reach(&self, line: &LineStyle) -> f64;
}

/// Dataset snapshot + style + glyph; the three chart variants are aliases of this.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLayer<G> {
    data: MarketDataset,
    style: LayerStyle,
    glyph: G,
}

impl<G: Glyph> SeriesLayer<G> {
    pub(crate) fn from_parts(data: MarketDataset, style: LayerStyle, glyph: G) -> Self {
        Self { data, style, glyph }
    }

    #[must_use]
    pub fn data(&self) -> &MarketDataset {
        &self.data
    }

    #[must_use]
    pub fn style(&self) -> &LayerStyle {
        &self.style
    }

    #[must_use]
    pub fn glyph(&self) -> &G {
        &self.glyph
    }

    pub(crate) fn glyph_mut(&mut self) -> &mut G {
        &mut self.glyph
    }

    pub fn set_style(&mut self, style: LayerStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    pub fn with_style(mut self, style: LayerStyle) -> ChartResult<Self> {
        self.set_style(style)?;
        Ok(self)
    }

    pub fn with_colors(self, up_color: Color, down_color: Color) -> ChartResult<Self> {
        let style = LayerStyle {
            up_color,
            down_color,
            ..self.style.clone()
        };
        self.with_style(style)
    }

    pub fn with_line_style(self, line: LineStyle) -> ChartResult<Self> {
        let style = LayerStyle {
            line,
            ..self.style.clone()
        };
        self.with_style(style)
    }
}

impl<G: Glyph> ChartLayer for SeriesLayer<G> {
    fn render(&self, canvas: &mut dyn Canvas, x: &dyn AxisTransform, y: &dyn AxisTransform) {
        render_records(&self.data, &self.style, &self.glyph, canvas, x, y);
    }

    fn data_extent(&self) -> DataExtent {
        let mut extent = DataExtent::EMPTY;
        for record in &self.data {
            extent.min_x = extent.min_x.min(record.time);
            extent.max_x = extent.max_x.max(record.time);
            (extent.min_y, extent.max_y) = self
                .glyph
                .fold_vertical((extent.min_y, extent.max_y), record);
        }
        extent
    }

    fn edge_reservation(&self) -> [GlyphBox; 2] {
        let extent = self.data_extent();
        let reach = self.glyph.reach(&self.style.line);
        [
            GlyphBox {
                anchor_x: extent.min_x,
                anchor_y: extent.min_y,
                offset: Rect::from_ltrb(-reach, 0.0, 0.0, 0.0),
            },
            GlyphBox {
                anchor_x: extent.max_x,
                anchor_y: extent.max_y,
                offset: Rect::from_ltrb(0.0, 0.0, reach, 0.0),
            },
        ]
    }
}

/// Shared per-record loop: resolves the up/down color and the time transform,
/// then hands geometry to the glyph.
fn render_records<G: Glyph>(
    data: &MarketDataset,
    style: &LayerStyle,
    glyph: &G,
    canvas: &mut dyn Canvas,
    x: &dyn AxisTransform,
    y: &dyn AxisTransform,
) {
    let up_line = style.line.clone().with_color(style.up_color);
    let down_line = style.line.clone().with_color(style.down_color);

    for record in data {
        let paint = RecordPaint {
            tone: style.tone(record),
            line: &style.line,
            toned_line: if record.is_bullish() {
                &up_line
            } else {
                &down_line
            },
        };
        glyph.draw(canvas, record, x.to_device(record.time), y, paint);
    }
}

/// Strokes the parts of a polyline that fall inside the canvas vertical extent.
pub(crate) fn stroke_clipped(canvas: &mut dyn Canvas, style: &LineStyle, points: &[Point]) {
    for piece in canvas.clip_lines_y(points) {
        canvas.stroke_polyline(style, &piece);
    }
}
