use std::fmt;

use thiserror::Error;

use crate::core::RecordField;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("record {index}: {field} must be finite, got {value}")]
    DataValidation {
        index: usize,
        field: RecordField,
        value: f64,
    },

    #[error("grid cell (column={column}, row={row}) is outside a {columns}x{rows} layout")]
    IndexOutOfRange {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },

    #[error("plot arrangement does not match layout: {0}")]
    ShapeMismatch(ShapeMismatch),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Which dimension of a plot arrangement disagreed with the layout weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMismatch {
    Rows {
        expected: usize,
        found: usize,
    },
    Columns {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows { expected, found } => {
                write!(f, "expected {expected} rows, found {found}")
            }
            Self::Columns {
                row,
                expected,
                found,
            } => write!(f, "row {row}: expected {expected} columns, found {found}"),
        }
    }
}
