use ohlcv_plot::core::{ChartLayer, MarketRecord, Point, Rect, VolumeBars};
use ohlcv_plot::render::{Color, LineStyle, RenderFrame};

fn two_records() -> Vec<MarketRecord> {
    vec![
        MarketRecord::new(0.0, 10.0, 12.0, 9.0, 11.0, 100.0),
        MarketRecord::new(1.0, 11.0, 11.5, 8.0, 9.0, 200.0),
    ]
}

fn x_transform(t: f64) -> f64 {
    50.0 + t * 100.0
}

fn y_transform(volume: f64) -> f64 {
    200.0 - volume * 0.5
}

#[test]
fn extent_starts_at_zero_volume() {
    let volume = VolumeBars::new(&two_records()).expect("volume");
    assert_eq!(volume.data_extent().as_tuple(), (0.0, 1.0, 0.0, 200.0));
}

#[test]
fn empty_volume_extent_is_empty() {
    let empty: Vec<MarketRecord> = Vec::new();
    let volume = VolumeBars::new(&empty).expect("volume");
    let extent = volume.data_extent();
    assert!(extent.is_empty());
    assert_eq!(extent.min_x, f64::INFINITY);
    assert_eq!(extent.max_y, f64::NEG_INFINITY);
}

#[test]
fn one_stem_per_record_from_zero() {
    let volume = VolumeBars::new(&two_records()).expect("volume");
    let mut frame = RenderFrame::with_size(200.0, 200.0);
    volume.render(&mut frame, &x_transform, &y_transform);
    let polylines: Vec<_> = frame.polylines().collect();

    assert_eq!(frame.polyline_count(), 2);
    assert_eq!(
        polylines[0].points.as_slice(),
        &[Point::new(50.0, 200.0), Point::new(50.0, 150.0)]
    );
    assert_eq!(
        polylines[1].points.as_slice(),
        &[Point::new(150.0, 200.0), Point::new(150.0, 100.0)]
    );
    assert_eq!(polylines[0].style.color, Color::rgb8(0, 128, 0));
    assert_eq!(polylines[1].style.color, Color::rgb8(196, 0, 0));
}

#[test]
fn stems_are_clipped_at_the_canvas_edge() {
    let volume = VolumeBars::new(&two_records()).expect("volume");
    let mut frame = RenderFrame::new(Rect::from_ltwh(0.0, 0.0, 200.0, 175.0));
    volume.render(&mut frame, &x_transform, &y_transform);
    let polylines: Vec<_> = frame.polylines().collect();

    assert_eq!(frame.polyline_count(), 2);
    assert_eq!(polylines[0].points[0], Point::new(50.0, 175.0));
    assert_eq!(polylines[1].points[0], Point::new(150.0, 175.0));
}

#[test]
fn reservation_is_half_the_line_width() {
    let volume = VolumeBars::new(&two_records())
        .and_then(|v| v.with_line_style(LineStyle::solid(Color::BLACK, 6.0)))
        .expect("volume");
    let [low, high] = volume.edge_reservation();
    assert_eq!(low.offset.min.x, -3.0);
    assert_eq!(high.offset.max.x, 3.0);
    assert_eq!(low.anchor_y, 0.0);
    assert_eq!(high.anchor_y, 200.0);
}
