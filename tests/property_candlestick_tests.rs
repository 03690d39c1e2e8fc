use ohlcv_plot::core::{Candlesticks, ChartLayer, MarketRecord, OhlcBars, Rect, VolumeBars};
use ohlcv_plot::render::RenderFrame;
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = MarketRecord> {
    (
        -1_000.0f64..1_000.0,
        0.01f64..500.0,
        0.0f64..1.0,
        0.0f64..1.0,
        0.0f64..10_000.0,
    )
        .prop_map(|(low, span, open_factor, close_factor, volume)| {
            let high = low + span;
            MarketRecord::new(
                0.0,
                low + open_factor * span,
                high,
                low,
                low + close_factor * span,
                volume,
            )
        })
}

proptest! {
    #[test]
    fn candle_body_stays_inside_the_wick(
        record in record_strategy(),
        body_width in 1.0f64..20.0
    ) {
        let records = vec![record];
        let candles = Candlesticks::new(&records)
            .and_then(|c| c.with_body_width(body_width))
            .expect("candles");

        let (low, high) = (record.low, record.high);
        let x = |_: f64| 500.0;
        let y = move |price: f64| 700.0 - (price - low) / (high - low) * 600.0;

        let mut frame = RenderFrame::with_size(1_000.0, 800.0);
        candles.render(&mut frame, &x, &y);

        let wick_top = y(high);
        let wick_bottom = y(low);
        for polygon in frame.polygons() {
            for point in &polygon.points {
                prop_assert!(point.y >= wick_top - 1e-9);
                prop_assert!(point.y <= wick_bottom + 1e-9);
                prop_assert!((point.x - 500.0).abs() <= body_width / 2.0 + 1e-9);
            }
        }
    }

    #[test]
    fn clipped_primitives_never_leave_the_band(
        records in prop::collection::vec(record_strategy(), 1..24),
        top in 0.0f64..400.0,
        height in 1.0f64..400.0
    ) {
        let records: Vec<MarketRecord> = records
            .into_iter()
            .enumerate()
            .map(|(i, r)| MarketRecord { time: i as f64, ..r })
            .collect();
        let bounds = Rect::from_ltwh(0.0, top, 1_000.0, height);
        let x = |t: f64| 20.0 + t * 30.0;
        let y = |value: f64| 400.0 - value * 0.2;

        let layers: Vec<Box<dyn ChartLayer>> = vec![
            Box::new(Candlesticks::new(&records).expect("candles")),
            Box::new(OhlcBars::new(&records).expect("bars")),
            Box::new(VolumeBars::new(&records).expect("volume")),
        ];

        for layer in &layers {
            let mut frame = RenderFrame::new(bounds);
            layer.render(&mut frame, &x, &y);

            for polygon in frame.polygons() {
                prop_assert!(polygon.points.len() >= 3);
                for point in &polygon.points {
                    prop_assert!(bounds.contains_y(point.y), "polygon {:?}", point);
                }
            }
            for polyline in frame.polylines() {
                prop_assert!(polyline.points.len() >= 2);
                for point in &polyline.points {
                    prop_assert!(bounds.contains_y(point.y), "polyline {:?}", point);
                }
            }
        }
    }

    #[test]
    fn extent_contains_every_record(records in prop::collection::vec(record_strategy(), 1..32)) {
        let candles = Candlesticks::new(&records).expect("candles");
        let volume = VolumeBars::new(&records).expect("volume");
        let price_extent = candles.data_extent();
        let volume_extent = volume.data_extent();

        prop_assert_eq!(volume_extent.min_y, 0.0);
        for record in &records {
            prop_assert!(price_extent.min_y <= record.low);
            prop_assert!(price_extent.max_y >= record.high);
            prop_assert!(volume_extent.max_y >= record.volume);
        }
    }
}
