//! ohlcv-plot: candlestick, OHLC bar and volume bar chart layers.
//!
//! The crate covers the geometry between validated market data and a drawing
//! surface: per-record marks with vertical clipping, edge reservation for axis
//! auto-ranging, a weighted grid layout for stacked panels, and axis-range
//! unification so those panels share one time domain.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Plot, draw_aligned};
pub use core::{
    Candlesticks, ChartLayer, GridLayout, MarketDataSource, MarketDataset, MarketRecord, OhlcBars,
    VolumeBars, unify_axis_ranges,
};
pub use error::{ChartError, ChartResult};
