//! Error type shared by the whole crate.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Everything that can be rejected by the crate.
///
/// All variants describe caller errors. Nothing is retried and no partial
/// result is ever produced alongside an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The general curve evaluator needs at least two control points.
    #[error("not enough control points: at least 2 are required, {provided} were provided")]
    TooFewControlPoints { provided: usize },

    /// A sampling range with `min > max`, a negative half range or a NaN bound.
    #[error("invalid sampling range: lower bound exceeds upper bound or a bound is NaN")]
    InvalidRange,

    /// A per-axis range list whose length differs from the vector dimension.
    #[error("expected {expected} per-axis ranges, {provided} were provided")]
    RangeCountMismatch { expected: usize, provided: usize },

    /// Direction or normalization requested for a zero-length vector.
    #[error("cannot take the direction of a zero-length vector")]
    DegenerateVector,
}
