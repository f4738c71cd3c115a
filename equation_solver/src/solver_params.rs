use crate::error::{Result, SolverError};

/// Magnitude below which a pivot candidate or a leftover right-hand side
/// counts as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverParams {
    pub tolerance: f64,
}

impl SolverParams {
    pub fn new(tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(SolverError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() < self.tolerance
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}
