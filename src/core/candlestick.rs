use serde::{Deserialize, Serialize};

use crate::core::series::{Glyph, LayerStyle, RecordPaint, SeriesLayer, stroke_clipped};
use crate::core::{AxisTransform, MarketDataSource, MarketDataset, MarketRecord, Point};
use crate::error::{ChartError, ChartResult};
use crate::render::{Canvas, Color, LineStyle};

/// Default candle body width relative to the default line width.
pub const DEFAULT_CANDLE_WIDTH_FACTOR: f64 = 3.0;

/// Candlestick layer: wicks plus a filled open/close body per record.
pub type Candlesticks = SeriesLayer<CandleBody>;

/// Candle geometry: body width and whether outlines keep the line color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleBody {
    width: f64,
    fixed_line_color: bool,
}

impl Default for CandleBody {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANDLE_WIDTH_FACTOR * LineStyle::default().width,
            fixed_line_color: true,
        }
    }
}

impl CandleBody {
    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    /// When `false`, wicks and outlines take the candle's up/down color.
    #[must_use]
    pub fn fixed_line_color(self) -> bool {
        self.fixed_line_color
    }
}

impl Glyph for CandleBody {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        record: &MarketRecord,
        x: f64,
        y: &dyn AxisTransform,
        paint: RecordPaint<'_>,
    ) {
        let stroke = if self.fixed_line_color {
            paint.line
        } else {
            paint.toned_line
        };

        let y_high = y.to_device(record.high);
        let y_low = y.to_device(record.low);
        let y_body_max = y.to_device(record.open.max(record.close));
        let y_body_min = y.to_device(record.open.min(record.close));

        stroke_clipped(
            canvas,
            stroke,
            &[Point::new(x, y_high), Point::new(x, y_body_max)],
        );
        stroke_clipped(
            canvas,
            stroke,
            &[Point::new(x, y_low), Point::new(x, y_body_min)],
        );

        let half = self.width / 2.0;
        let body = canvas.clip_polygon_y(&[
            Point::new(x - half, y_body_max),
            Point::new(x + half, y_body_max),
            Point::new(x + half, y_body_min),
            Point::new(x - half, y_body_min),
        ]);
        if body.is_empty() {
            return;
        }
        canvas.fill_polygon(paint.tone, &body);
        canvas.stroke_polygon(stroke, &body);
    }

    fn reach(&self, line: &LineStyle) -> f64 {
        (self.width + line.width) / 2.0
    }
}

impl SeriesLayer<CandleBody> {
    /// Snapshots `source` with the default candle colors (soft green / soft red).
    pub fn new<S: MarketDataSource + ?Sized>(source: &S) -> ChartResult<Self> {
        let data = MarketDataset::clone_from_source(source)?;
        Ok(Self::from_parts(
            data,
            LayerStyle::new(Color::rgb8(128, 192, 128), Color::rgb8(255, 128, 128)),
            CandleBody::default(),
        ))
    }

    pub fn with_body_width(mut self, width: f64) -> ChartResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "candle body width must be finite and > 0".to_owned(),
            ));
        }
        self.glyph_mut().width = width;
        Ok(self)
    }

    #[must_use]
    pub fn with_fixed_line_color(mut self, fixed: bool) -> Self {
        self.glyph_mut().fixed_line_color = fixed;
        self
    }
}
