use serde::{Deserialize, Serialize};

use crate::core::series::{Glyph, LayerStyle, RecordPaint, SeriesLayer, stroke_clipped};
use crate::core::{AxisTransform, MarketDataSource, MarketDataset, MarketRecord, Point};
use crate::error::ChartResult;
use crate::render::{Canvas, Color, LineStyle};

/// Volume bar layer: one stem from zero to the record volume.
pub type VolumeBars = SeriesLayer<VolumeStem>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeStem;

impl Glyph for VolumeStem {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        record: &MarketRecord,
        x: f64,
        y: &dyn AxisTransform,
        paint: RecordPaint<'_>,
    ) {
        stroke_clipped(
            canvas,
            paint.toned_line,
            &[
                Point::new(x, y.to_device(0.0)),
                Point::new(x, y.to_device(record.volume)),
            ],
        );
    }

    /// The volume axis always starts at zero.
    fn fold_vertical(&self, (_, max_y): (f64, f64), record: &MarketRecord) -> (f64, f64) {
        (0.0, max_y.max(record.volume))
    }

    fn reach(&self, line: &LineStyle) -> f64 {
        line.width / 2.0
    }
}

impl SeriesLayer<VolumeStem> {
    /// Snapshots `source` with the default bar colors (green / red).
    pub fn new<S: MarketDataSource + ?Sized>(source: &S) -> ChartResult<Self> {
        let data = MarketDataset::clone_from_source(source)?;
        Ok(Self::from_parts(
            data,
            LayerStyle::new(Color::rgb8(0, 128, 0), Color::rgb8(196, 0, 0)),
            VolumeStem,
        ))
    }
}
