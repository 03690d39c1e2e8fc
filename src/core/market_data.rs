use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};

/// One sampling interval of price action: time, open, high, low, close, volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl MarketRecord {
    #[must_use]
    pub const fn new(time: f64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Converts strongly-typed temporal/decimal input into a record.
    ///
    /// Only representability is checked here; finiteness is enforced when the
    /// record enters a `MarketDataset`.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            time.timestamp_millis() as f64 / 1000.0,
            decimal_field(open, RecordField::Open)?,
            decimal_field(high, RecordField::High)?,
            decimal_field(low, RecordField::Low)?,
            decimal_field(close, RecordField::Close)?,
            decimal_field(volume, RecordField::Volume)?,
        ))
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }

    /// Returns the first non-finite value field, in open/high/low/close/volume order.
    #[must_use]
    pub fn first_non_finite(self) -> Option<(RecordField, f64)> {
        [
            (RecordField::Open, self.open),
            (RecordField::High, self.high),
            (RecordField::Low, self.low),
            (RecordField::Close, self.close),
            (RecordField::Volume, self.volume),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    }
}

/// Value field of a `MarketRecord`, used to report validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordField {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
        };
        f.write_str(name)
    }
}

fn decimal_field(value: Decimal, field: RecordField) -> ChartResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| ChartError::InvalidData(format!("{field} cannot be represented as f64")))
}

/// Positional access to externally owned market data.
///
/// `record_at` is only called with `index < count()`.
pub trait MarketDataSource {
    fn count(&self) -> usize;
    fn record_at(&self, index: usize) -> MarketRecord;
}

impl MarketDataSource for [MarketRecord] {
    fn count(&self) -> usize {
        self.len()
    }

    fn record_at(&self, index: usize) -> MarketRecord {
        self[index]
    }
}

impl MarketDataSource for Vec<MarketRecord> {
    fn count(&self) -> usize {
        self.len()
    }

    fn record_at(&self, index: usize) -> MarketRecord {
        self[index]
    }
}

impl MarketDataSource for [(f64, f64, f64, f64, f64, f64)] {
    fn count(&self) -> usize {
        self.len()
    }

    fn record_at(&self, index: usize) -> MarketRecord {
        let (time, open, high, low, close, volume) = self[index];
        MarketRecord::new(time, open, high, low, close, volume)
    }
}

impl<S: MarketDataSource + ?Sized> MarketDataSource for &S {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn record_at(&self, index: usize) -> MarketRecord {
        (**self).record_at(index)
    }
}

/// Validated, owned snapshot of market records.
///
/// Every `open/high/low/close/volume` value is finite. `time` is taken as-is,
/// and neither ordering nor timestamp uniqueness is checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarketDataset {
    records: Vec<MarketRecord>,
}

impl MarketDataset {
    /// Copies every record out of `source`, failing on the first non-finite value.
    pub fn clone_from_source<S: MarketDataSource + ?Sized>(source: &S) -> ChartResult<Self> {
        let count = source.count();
        let mut records = Vec::with_capacity(count);
        for index in 0..count {
            let record = source.record_at(index);
            if let Some((field, value)) = record.first_non_finite() {
                warn!(index, %field, value, "rejecting non-finite market record");
                return Err(ChartError::DataValidation {
                    index,
                    field,
                    value,
                });
            }
            records.push(record);
        }
        debug!(count, "cloned market dataset");
        Ok(Self { records })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[MarketRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MarketRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MarketRecord> {
        self.records.iter()
    }
}

impl MarketDataSource for MarketDataset {
    fn count(&self) -> usize {
        self.records.len()
    }

    fn record_at(&self, index: usize) -> MarketRecord {
        self.records[index]
    }
}

impl<'a> IntoIterator for &'a MarketDataset {
    type Item = &'a MarketRecord;
    type IntoIter = std::slice::Iter<'a, MarketRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<'de> Deserialize<'de> for MarketDataset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            records: Vec<MarketRecord>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::clone_from_source(raw.records.as_slice()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{MarketDataset, MarketRecord, RecordField};
    use crate::error::ChartError;

    #[test]
    fn first_non_finite_reports_fields_in_declaration_order() {
        let record = MarketRecord::new(0.0, 1.0, f64::NAN, 1.0, f64::INFINITY, 1.0);
        let (field, value) = record.first_non_finite().expect("non-finite");
        assert_eq!(field, RecordField::High);
        assert!(value.is_nan());
    }

    #[test]
    fn deserialization_accepts_finite_records() {
        let ok: MarketDataset = serde_json::from_str(
            r#"{"records":[{"time":0.0,"open":1.0,"high":2.0,"low":0.5,"close":1.5,"volume":10.0}]}"#,
        )
        .expect("valid dataset");
        assert_eq!(ok.len(), 1);
    }

    #[test]
    fn deserialization_rejects_malformed_records() {
        let missing_volume = serde_json::from_str::<MarketDataset>(
            r#"{"records":[{"time":0.0,"open":1.0,"high":2.0,"low":0.5,"close":1.5}]}"#,
        );
        assert!(missing_volume.is_err());
    }

    #[test]
    fn non_finite_volume_is_rejected_on_clone() {
        let err = MarketDataset::clone_from_source(
            [MarketRecord::new(0.0, 1.0, 2.0, 0.5, 1.5, f64::NEG_INFINITY)].as_slice(),
        )
        .expect_err("volume must be finite");
        assert!(matches!(
            err,
            ChartError::DataValidation {
                index: 0,
                field: RecordField::Volume,
                ..
            }
        ));
    }
}
