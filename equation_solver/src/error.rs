//! Error types for the linear system solver

use thiserror::Error;

/// Errors raised while building or querying a [`crate::system::System`]
#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    /// A system needs at least one unknown
    #[error("a system needs at least one variable")]
    NoVariables,

    /// A row does not carry `m` coefficients plus the right-hand side
    #[error("equation {}: expected {expected} coefficients, but got {actual}", .row + 1)]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinite entry
    #[error("equation {}: coefficient {} is not a finite number", .row + 1, .column + 1)]
    NonFiniteCoefficient { row: usize, column: usize },

    /// Replacement matrix has a different shape than the one the solver was built for
    #[error("expected a {expected_rows}x{expected_cols} augmented matrix, got {actual_rows}x{actual_cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("tolerance must be a finite, positive number, got {0}")]
    InvalidTolerance(f64),

    /// A result was queried before `solve` ran
    #[error("the system has not been solved yet")]
    NotSolved,

    /// The solution vector was queried for an inconsistent system
    #[error("the system has no solution")]
    NoSolution,
}

/// Result type for solver operations
pub type Result<T> = std::result::Result<T, SolverError>;
