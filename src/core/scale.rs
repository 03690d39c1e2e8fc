use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Maps a data-space scalar (time, price or volume) to a device coordinate.
///
/// Chart layers only consume this capability; the host decides how the
/// mapping is derived from its axis domain and canvas rectangle.
pub trait AxisTransform {
    fn to_device(&self, value: f64) -> f64;
}

impl<F: Fn(f64) -> f64> AxisTransform for F {
    fn to_device(&self, value: f64) -> f64 {
        self(value)
    }
}

/// Affine mapping from `domain_start..domain_end` onto `range_start..range_end`.
///
/// The device range may be reversed, which is how price axes put larger
/// values nearer the top of a y-down canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn domain_to_device(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse of `domain_to_device`; a zero-width device range maps to `domain_start`.
    #[must_use]
    pub fn device_to_domain(self, device: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (device - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

impl AxisTransform for LinearScale {
    fn to_device(&self, value: f64) -> f64 {
        self.domain_to_device(value)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{AxisTransform, LinearScale};

    #[test]
    fn linear_scale_maps_onto_reversed_range() {
        let scale = LinearScale::new(0.0, 100.0, 500.0, 0.0).expect("scale");
        assert_relative_eq!(scale.to_device(0.0), 500.0);
        assert_relative_eq!(scale.to_device(100.0), 0.0);
        assert_relative_eq!(scale.to_device(25.0), 375.0);
        assert_relative_eq!(scale.device_to_domain(375.0), 25.0);
    }

    #[test]
    fn linear_scale_rejects_degenerate_domain() {
        assert!(LinearScale::new(3.0, 3.0, 0.0, 10.0).is_err());
        assert!(LinearScale::new(f64::NEG_INFINITY, 3.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn closures_act_as_transforms() {
        let double = |value: f64| value * 2.0;
        assert_relative_eq!(double.to_device(4.5), 9.0);
    }
}
