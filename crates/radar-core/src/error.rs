// File: crates/radar-core/src/error.rs
// Summary: Library error type for chart construction and series rescaling.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RadarError {
    /// A series value falls strictly outside its variable's declared range
    /// in both possible orientations of (min, max).
    #[error("value {value} for variable {index} is outside its range [{min}, {max}]")]
    ValueOutOfRange {
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A series carries a different number of values than the chart has variables.
    #[error("series has {got} values but the chart has {expected} variables")]
    LengthMismatch { expected: usize, got: usize },

    /// Variables and ranges must pair up one-to-one at construction.
    #[error("{variables} variables paired with {ranges} ranges")]
    RangesMismatch { variables: usize, ranges: usize },

    #[error("a radar chart needs at least one variable")]
    NoVariables,

    /// `plot_table` was asked for a row name the table does not contain.
    #[error("row '{0}' not found in table")]
    UnknownRow(String),
}
