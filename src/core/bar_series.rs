use serde::{Deserialize, Serialize};

use crate::core::series::{Glyph, LayerStyle, RecordPaint, SeriesLayer, stroke_clipped};
use crate::core::{AxisTransform, MarketDataSource, MarketDataset, MarketRecord, Point};
use crate::error::{ChartError, ChartResult};
use crate::render::{Canvas, Color, LineStyle};

/// Default length of the open/close ticks in device units.
pub const DEFAULT_TICK_WIDTH: f64 = 2.0;

/// OHLC bar layer: a low-high stem with open (left) and close (right) ticks.
pub type OhlcBars = SeriesLayer<OhlcTicks>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcTicks {
    tick_width: f64,
}

impl Default for OhlcTicks {
    fn default() -> Self {
        Self {
            tick_width: DEFAULT_TICK_WIDTH,
        }
    }
}

impl OhlcTicks {
    #[must_use]
    pub fn tick_width(self) -> f64 {
        self.tick_width
    }
}

impl Glyph for OhlcTicks {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        record: &MarketRecord,
        x: f64,
        y: &dyn AxisTransform,
        paint: RecordPaint<'_>,
    ) {
        let stroke = paint.toned_line;
        stroke_clipped(
            canvas,
            stroke,
            &[
                Point::new(x, y.to_device(record.low)),
                Point::new(x, y.to_device(record.high)),
            ],
        );

        // Ticks are all-or-nothing: drawn only when their anchor is visible.
        let open = Point::new(x, y.to_device(record.open));
        if canvas.contains(open) {
            canvas.stroke_line(stroke, open, Point::new(x - self.tick_width, open.y));
        }

        let close = Point::new(x, y.to_device(record.close));
        if canvas.contains(close) {
            canvas.stroke_line(stroke, close, Point::new(x + self.tick_width, close.y));
        }
    }

    fn reach(&self, _line: &LineStyle) -> f64 {
        self.tick_width
    }
}

impl SeriesLayer<OhlcTicks> {
    /// Snapshots `source` with the default bar colors (green / red).
    pub fn new<S: MarketDataSource + ?Sized>(source: &S) -> ChartResult<Self> {
        let data = MarketDataset::clone_from_source(source)?;
        Ok(Self::from_parts(
            data,
            LayerStyle::new(Color::rgb8(0, 128, 0), Color::rgb8(196, 0, 0)),
            OhlcTicks::default(),
        ))
    }

    pub fn with_tick_width(mut self, tick_width: f64) -> ChartResult<Self> {
        if !tick_width.is_finite() || tick_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "tick width must be finite and > 0".to_owned(),
            ));
        }
        self.glyph_mut().tick_width = tick_width;
        Ok(self)
    }
}
