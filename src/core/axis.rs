use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::LinearScale;
use crate::error::ChartResult;

/// Mutable `[min, max]` range of one plot axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl Default for AxisDomain {
    /// The empty domain: widening it by any value yields that value.
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl AxisDomain {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `true` when `min > max`, i.e. nothing has been added yet.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.min <= self.max)
    }

    /// Grows the domain so it covers `min..=max`.
    pub fn include(&mut self, min: f64, max: f64) {
        self.min = self.min.min(min);
        self.max = self.max.max(max);
    }

    /// Returns a domain that can back a `LinearScale`.
    ///
    /// Empty or non-finite domains become `0..1`; a zero-width domain is
    /// widened by one unit on each side.
    #[must_use]
    pub fn sanitized(self) -> Self {
        if self.is_empty() || !self.min.is_finite() || !self.max.is_finite() {
            return Self::new(0.0, 1.0);
        }
        if self.min == self.max {
            return Self::new(self.min - 1.0, self.max + 1.0);
        }
        self
    }

    /// Builds a transform from the sanitized domain onto `range_start..range_end`.
    pub fn scale_onto(self, range_start: f64, range_end: f64) -> ChartResult<LinearScale> {
        let domain = self.sanitized();
        LinearScale::new(domain.min, domain.max, range_start, range_end)
    }
}

/// Read/write access to an axis range owned elsewhere.
///
/// Implement this for host axis types so they can take part in
/// `unify_axis_ranges` without being copied into an `AxisDomain`.
pub trait AxisBounds {
    fn bounds(&self) -> (f64, f64);
    fn set_bounds(&mut self, min: f64, max: f64);
}

impl AxisBounds for AxisDomain {
    fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn set_bounds(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }
}

/// Forces every axis onto the union of their ranges.
///
/// The axes stay owned by the caller; they are only borrowed for the write
/// back. An empty list is a no-op. The result does not depend on the order of
/// `axes`, and applying it twice is the same as applying it once.
pub fn unify_axis_ranges<A: AxisBounds + ?Sized>(axes: &mut [&mut A]) {
    if axes.is_empty() {
        debug!("no axes to unify");
        return;
    }

    let (shared_min, shared_max) = axes.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), axis| {
            let (min, max) = axis.bounds();
            (lo.min(min), hi.max(max))
        },
    );

    for (index, axis) in axes.iter_mut().enumerate() {
        axis.set_bounds(shared_min, shared_max);
        trace!(index, min = shared_min, max = shared_max, "axis range set");
    }
    debug!(
        axes = axes.len(),
        min = shared_min,
        max = shared_max,
        "unified axis ranges"
    );
}

/// Data-space bounding box reported by a chart layer.
///
/// An empty layer reports `(+inf, -inf, +inf, -inf)`; check `is_empty` before
/// using the values as a range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataExtent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DataExtent {
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.x_domain().is_empty() || self.y_domain().is_empty()
    }

    #[must_use]
    pub fn x_domain(self) -> AxisDomain {
        AxisDomain::new(self.min_x, self.max_x)
    }

    #[must_use]
    pub fn y_domain(self) -> AxisDomain {
        AxisDomain::new(self.min_y, self.max_y)
    }

    /// `(min_x, max_x, min_y, max_y)`.
    #[must_use]
    pub fn as_tuple(self) -> (f64, f64, f64, f64) {
        (self.min_x, self.max_x, self.min_y, self.max_y)
    }
}
