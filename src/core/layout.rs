use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Rect;
use crate::error::{ChartError, ChartResult, ShapeMismatch};

/// Outer margins of a grid, in device units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Padding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

/// Row/column grid with independently weighted row heights and column widths.
///
/// Unlike a uniform tile grid, a price panel can take twice the height of a
/// volume panel below it while both keep the same horizontal extent. Row 0 is
/// the top row and column 0 the leftmost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout {
    row_sizes: Vec<f64>,
    column_sizes: Vec<f64>,
    padding: Padding,
    column_gap: f64,
    row_gap: f64,
}

impl GridLayout {
    /// Creates a layout from relative row and column weights with no padding.
    pub fn new(row_sizes: Vec<f64>, column_sizes: Vec<f64>) -> ChartResult<Self> {
        let layout = Self {
            row_sizes,
            column_sizes,
            padding: Padding::default(),
            column_gap: 0.0,
            row_gap: 0.0,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Loads a persisted layout; validation runs as part of deserialization.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("invalid grid layout json: {err}")))
    }

    pub fn with_padding(mut self, padding: Padding) -> ChartResult<Self> {
        self.padding = padding;
        self.validate()?;
        Ok(self)
    }

    /// Sets the space between adjacent columns and between adjacent rows.
    pub fn with_gaps(mut self, column_gap: f64, row_gap: f64) -> ChartResult<Self> {
        self.column_gap = column_gap;
        self.row_gap = row_gap;
        self.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn row_sizes(&self) -> &[f64] {
        &self.row_sizes
    }

    #[must_use]
    pub fn column_sizes(&self) -> &[f64] {
        &self.column_sizes
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.row_sizes.len()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.column_sizes.len()
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_weights(&self.row_sizes, "row")?;
        validate_weights(&self.column_sizes, "column")?;

        let Padding {
            top,
            bottom,
            left,
            right,
        } = self.padding;
        for (name, value) in [
            ("top padding", top),
            ("bottom padding", bottom),
            ("left padding", left),
            ("right padding", right),
            ("column gap", self.column_gap),
            ("row gap", self.row_gap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "grid {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Rectangle of the cell at `(column, row)` inside `parent`.
    pub fn sub_region(&self, parent: Rect, column: usize, row: usize) -> ChartResult<Rect> {
        if column >= self.columns() || row >= self.rows() {
            warn!(
                column,
                row,
                columns = self.columns(),
                rows = self.rows(),
                "grid cell index out of range"
            );
            return Err(ChartError::IndexOutOfRange {
                column,
                row,
                columns: self.columns(),
                rows: self.rows(),
            });
        }

        let (top, height) = band(
            &self.row_sizes,
            row,
            parent.min.y,
            parent.height(),
            self.padding.top,
            self.padding.bottom,
            self.row_gap,
        );
        let (left, width) = band(
            &self.column_sizes,
            column,
            parent.min.x,
            parent.width(),
            self.padding.left,
            self.padding.right,
            self.column_gap,
        );
        Ok(Rect::from_ltwh(left, top, width, height))
    }

    /// One rectangle per plot, in the same row/column order as `plots`.
    ///
    /// The arrangement must have exactly `rows()` rows of `columns()` plots;
    /// otherwise nothing is computed.
    pub fn align_all<P, R>(&self, plots: &[R], parent: Rect) -> ChartResult<Vec<Vec<Rect>>>
    where
        R: AsRef<[P]>,
    {
        self.check_shape(plots)?;

        let mut cells = Vec::with_capacity(self.rows());
        for row in 0..self.rows() {
            let mut row_cells = Vec::with_capacity(self.columns());
            for column in 0..self.columns() {
                row_cells.push(self.sub_region(parent, column, row)?);
            }
            cells.push(row_cells);
        }
        Ok(cells)
    }

    /// Checks that a plot arrangement has the layout's rows and columns.
    pub fn check_shape<P, R>(&self, plots: &[R]) -> ChartResult<()>
    where
        R: AsRef<[P]>,
    {
        if plots.len() != self.rows() {
            let mismatch = ShapeMismatch::Rows {
                expected: self.rows(),
                found: plots.len(),
            };
            warn!(%mismatch, "plot grid shape mismatch");
            return Err(ChartError::ShapeMismatch(mismatch));
        }

        for (row, plots_in_row) in plots.iter().enumerate() {
            let found = plots_in_row.as_ref().len();
            if found != self.columns() {
                let mismatch = ShapeMismatch::Columns {
                    row,
                    expected: self.columns(),
                    found,
                };
                warn!(%mismatch, "plot grid shape mismatch");
                return Err(ChartError::ShapeMismatch(mismatch));
            }
        }
        Ok(())
    }
}

/// Start offset and length of band `index` along one axis.
///
/// Space left after padding and gaps is split in proportion to `weights`;
/// it is clamped at zero when padding exceeds the parent.
fn band(
    weights: &[f64],
    index: usize,
    origin: f64,
    extent: f64,
    leading_pad: f64,
    trailing_pad: f64,
    gap: f64,
) -> (f64, f64) {
    let total_weight: f64 = weights.iter().sum();
    let gaps = weights.len().saturating_sub(1) as f64 * gap;
    let available = (extent - leading_pad - trailing_pad - gaps).max(0.0);
    let unit = available / total_weight;

    let preceding: f64 = weights[..index].iter().sum();
    let start = origin + leading_pad + index as f64 * gap + preceding * unit;
    (start, weights[index] * unit)
}

fn validate_weights(weights: &[f64], kind: &str) -> ChartResult<()> {
    if weights.is_empty() {
        return Err(ChartError::InvalidData(format!(
            "grid needs at least one {kind}"
        )));
    }
    if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
        return Err(ChartError::InvalidData(format!(
            "grid {kind} sizes must be finite and > 0"
        )));
    }
    Ok(())
}

impl<'de> Deserialize<'de> for GridLayout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            row_sizes: Vec<f64>,
            column_sizes: Vec<f64>,
            #[serde(default)]
            padding: Padding,
            #[serde(default)]
            column_gap: f64,
            #[serde(default)]
            row_gap: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        let layout = Self {
            row_sizes: raw.row_sizes,
            column_sizes: raw.column_sizes,
            padding: raw.padding,
            column_gap: raw.column_gap,
            row_gap: raw.row_gap,
        };
        layout.validate().map_err(serde::de::Error::custom)?;
        Ok(layout)
    }
}
