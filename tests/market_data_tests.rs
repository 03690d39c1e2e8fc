use chrono::{TimeZone, Utc};
use ohlcv_plot::core::{MarketDataSource, MarketDataset, MarketRecord, RecordField};
use ohlcv_plot::{Candlesticks, ChartError};
use rust_decimal::Decimal;

fn sample_records() -> Vec<MarketRecord> {
    vec![
        MarketRecord::new(0.0, 10.0, 12.0, 9.0, 11.0, 100.0),
        MarketRecord::new(1.0, 11.0, 11.5, 8.0, 9.0, 200.0),
        MarketRecord::new(2.0, 9.0, 10.0, 8.5, 9.5, 150.0),
    ]
}

#[test]
fn clone_preserves_order_and_values() {
    let records = sample_records();
    let dataset = MarketDataset::clone_from_source(&records).expect("valid dataset");

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.records(), records.as_slice());
    assert_eq!(dataset.get(1), Some(&records[1]));
    assert_eq!(dataset.get(3), None);
}

#[test]
fn zero_records_is_a_valid_dataset() {
    let empty: Vec<MarketRecord> = Vec::new();
    let dataset = MarketDataset::clone_from_source(&empty).expect("empty dataset");
    assert!(dataset.is_empty());
    assert_eq!(dataset.iter().count(), 0);
}

#[test]
fn each_non_finite_field_is_reported_with_its_index() {
    let cases = [
        (RecordField::Open, MarketRecord::new(5.0, f64::NAN, 1.0, 1.0, 1.0, 1.0)),
        (RecordField::High, MarketRecord::new(5.0, 1.0, f64::INFINITY, 1.0, 1.0, 1.0)),
        (RecordField::Low, MarketRecord::new(5.0, 1.0, 1.0, f64::NEG_INFINITY, 1.0, 1.0)),
        (RecordField::Close, MarketRecord::new(5.0, 1.0, 1.0, 1.0, f64::NAN, 1.0)),
        (RecordField::Volume, MarketRecord::new(5.0, 1.0, 1.0, 1.0, 1.0, f64::INFINITY)),
    ];

    for (expected_field, bad) in cases {
        let mut records = sample_records();
        records.insert(2, bad);

        let err = MarketDataset::clone_from_source(&records).expect_err("must reject");
        match err {
            ChartError::DataValidation { index, field, .. } => {
                assert_eq!(index, 2);
                assert_eq!(field, expected_field);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn first_bad_field_wins_when_several_are_invalid() {
    let records = [MarketRecord::new(0.0, 1.0, f64::NAN, 1.0, 1.0, f64::NAN)];
    let err = MarketDataset::clone_from_source(&records[..]).expect_err("must reject");
    assert!(matches!(
        err,
        ChartError::DataValidation {
            index: 0,
            field: RecordField::High,
            ..
        }
    ));
}

#[test]
fn time_is_not_validated() {
    let records = vec![
        MarketRecord::new(3.0, 1.0, 2.0, 0.5, 1.5, 10.0),
        MarketRecord::new(1.0, 1.0, 2.0, 0.5, 1.5, 10.0),
        MarketRecord::new(1.0, 1.0, 2.0, 0.5, 1.5, 10.0),
    ];
    let dataset = MarketDataset::clone_from_source(&records).expect("unordered times accepted");
    let times: Vec<f64> = dataset.iter().map(|r| r.time).collect();
    assert_eq!(times, vec![3.0, 1.0, 1.0]);
}

#[test]
fn tuple_slices_act_as_a_source() {
    let tuples = [(0.0, 10.0, 12.0, 9.0, 11.0, 100.0), (1.0, 11.0, 11.5, 8.0, 9.0, 200.0)];
    assert_eq!(tuples[..].count(), 2);
    assert_eq!(
        tuples[..].record_at(1),
        MarketRecord::new(1.0, 11.0, 11.5, 8.0, 9.0, 200.0)
    );

    let dataset = MarketDataset::clone_from_source(&tuples[..]).expect("tuple source");
    assert_eq!(dataset.len(), 2);
}

#[test]
fn layers_keep_their_own_snapshot() {
    let mut records = sample_records();
    let candles = Candlesticks::new(&records).expect("candles");

    records[0].high = 1_000.0;
    records.clear();

    assert_eq!(candles.data().len(), 3);
    assert_eq!(candles.data().records()[0].high, 12.0);
}

#[test]
fn decimal_and_datetime_inputs_convert_to_seconds() {
    let time = Utc
        .with_ymd_and_hms(2024, 10, 30, 6, 24, 5)
        .single()
        .expect("valid timestamp");
    let record = MarketRecord::from_decimal_time(
        time,
        Decimal::new(10_125, 2),
        Decimal::new(10_250, 2),
        Decimal::new(10_000, 2),
        Decimal::new(10_200, 2),
        Decimal::new(42, 0),
    )
    .expect("decimal record");

    assert_eq!(record.time, 1_730_269_445.0);
    assert_eq!(record.open, 101.25);
    assert_eq!(record.close, 102.0);
    assert_eq!(record.volume, 42.0);
    assert!(record.is_bullish());
}
