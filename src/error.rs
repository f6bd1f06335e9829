//! Engine error types.
//!
//! Out-of-range indices, mismatched matrix dimensions, and non-positive
//! edge weights are rejected eagerly by the engine setters. Unreachable
//! routes and unsafe resource states are *not* errors — they are valid
//! results (`None` route / empty sequence) that callers branch on.

use thiserror::Error;

/// Errors reported by the planning engines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A vertex or process index is outside the valid range.
    #[error("index {index} out of range (limit {limit})")]
    OutOfRangeIndex {
        /// The offending index.
        index: usize,
        /// Exclusive upper bound for valid indices.
        limit: usize,
    },

    /// A supplied matrix or vector does not match the engine's dimensions.
    #[error("invalid dimension: expected {expected}, got {actual}")]
    InvalidDimension {
        /// Expected row or element count.
        expected: usize,
        /// Actual row or element count supplied.
        actual: usize,
    },

    /// An edge weight is zero or negative.
    #[error("invalid edge weight {0}: must be positive")]
    InvalidWeight(i64),
}
