use std::path::PathBuf;

use ohlcv_plot::core::{GridLayout, MarketRecord};
use ohlcv_plot::render::{CairoRenderer, RenderFrame, Renderer};
use ohlcv_plot::{Candlesticks, ChartResult, Plot, VolumeBars, draw_aligned};
use tracing::info;

const WIDTH: i32 = 1450;
const HEIGHT: i32 = 300;
const RECORDS: usize = 260;

fn main() -> ChartResult<()> {
    let _ = ohlcv_plot::telemetry::init_default_tracing();

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("aligned.png"));

    let records = synthetic_records(RECORDS);

    let mut prices = Plot::new();
    prices.add(Candlesticks::new(&records)?);
    let mut volume = Plot::new();
    volume.add(VolumeBars::new(&records)?);

    // 2/3 of the height for candles, 1/3 for volume.
    let layout = GridLayout::new(vec![2.0, 1.0], vec![1.0])?;
    let mut plots = vec![vec![prices], vec![volume]];

    let mut frame = RenderFrame::with_size(f64::from(WIDTH), f64::from(HEIGHT));
    draw_aligned(&layout, &mut plots, &mut frame, true)?;

    let mut renderer = CairoRenderer::new(WIDTH, HEIGHT)?;
    renderer.render(&frame)?;
    renderer.write_png(&output)?;

    let stats = renderer.last_stats();
    info!(
        path = %output.display(),
        polylines = stats.polylines_drawn,
        polygons = stats.polygons_drawn,
        "wrote aligned chart"
    );
    Ok(())
}

/// Deterministic one-minute bars wandering around 100.
fn synthetic_records(count: usize) -> Vec<MarketRecord> {
    let start = 1_730_271_845.0;
    let mut price = 100.0_f64;
    (0..count)
        .map(|i| {
            let t = i as f64;
            let open = price;
            let close = open + (t * 0.37).sin() * 1.5 + (t * 0.05).cos() * 0.4;
            let high = open.max(close) + 0.3 + (t * 0.91).sin().abs();
            let low = open.min(close) - 0.3 - (t * 0.73).cos().abs();
            price = close;
            let volume = (high - low + (close - open).abs()) * 100.0;
            MarketRecord::new(start + t * 60.0, open, high, low, close, volume)
        })
        .collect()
}
