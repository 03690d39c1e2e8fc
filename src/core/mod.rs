pub mod axis;
pub mod bar_series;
pub mod candlestick;
pub mod geometry;
pub mod layout;
pub mod market_data;
pub mod scale;
pub mod series;
pub mod volume_series;

pub use axis::{AxisBounds, AxisDomain, DataExtent, unify_axis_ranges};
pub use bar_series::{DEFAULT_TICK_WIDTH, OhlcBars, OhlcTicks};
pub use candlestick::{CandleBody, Candlesticks, DEFAULT_CANDLE_WIDTH_FACTOR};
pub use geometry::{Point, Polyline, Rect, clip_polygon_y, clip_polyline_y};
pub use layout::{GridLayout, Padding};
pub use market_data::{MarketDataSource, MarketDataset, MarketRecord, RecordField};
pub use scale::{AxisTransform, LinearScale};
pub use series::{ChartLayer, Glyph, GlyphBox, LayerStyle, RecordPaint, SeriesLayer};
pub use volume_series::{VolumeBars, VolumeStem};
