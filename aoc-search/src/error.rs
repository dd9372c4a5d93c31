//! Error types for the fallible helpers.
//!
//! The search engines themselves never fail: an unreachable goal is reported
//! as `None`, not as an error.

use thiserror::Error;

/// Error type for building a [`Grid`](crate::grid::Grid) from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input contains no rows
    #[error("Grid input is empty")]
    Empty,
    /// A row's width differs from the first row's
    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character could not be converted into a cell
    #[error("Invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// Error type for memoized recurrences
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoError {
    /// A value (transitively) depends on itself
    #[error("Dependency cycle detected while resolving a memoized value")]
    Cycle,
}
