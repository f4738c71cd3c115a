use std::fmt;

use itertools::Itertools;

use crate::error::{Result, SolverError};

/// `n` equations over `m` unknowns, stored row-major as `m` coefficients
/// followed by the right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    pub number_of_variables: usize,
    pub rows: Vec<Vec<f64>>,
}

impl AugmentedMatrix {
    #[cfg(test)]
    pub(crate) fn zeroes(equations: usize, variables: usize) -> Self {
        Self {
            number_of_variables: variables,
            rows: (0..equations).map(|_| vec![0.0; variables + 1]).collect(),
        }
    }

    pub fn from_rows(variables: usize, rows: Vec<Vec<f64>>) -> Result<Self> {
        if variables == 0 {
            return Err(SolverError::NoVariables);
        }
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != variables + 1 {
                return Err(SolverError::RowLengthMismatch {
                    row: row_idx,
                    expected: variables + 1,
                    actual: row.len(),
                });
            }
            if let Some(column) = row.iter().position(|value| !value.is_finite()) {
                return Err(SolverError::NonFiniteCoefficient {
                    row: row_idx,
                    column,
                });
            }
        }
        Ok(Self {
            number_of_variables: variables,
            rows,
        })
    }

    pub fn number_of_equations(&self) -> usize {
        self.rows.len()
    }

    pub fn number_of_columns(&self) -> usize {
        self.number_of_variables + 1
    }

    pub fn coefficients(&self, r: usize) -> &[f64] {
        &self.rows[r][..self.number_of_variables]
    }

    pub fn rhs(&self, r: usize) -> f64 {
        self.rows[r][self.number_of_variables]
    }
}

/// One bracketed line per equation, right-hand side after a bar.
pub(crate) fn render_rows(rows: &[Vec<f64>], number_of_variables: usize) -> String {
    rows.iter()
        .map(|row| {
            let (coefficients, rhs) = row.split_at(number_of_variables);
            format!("[{} | {}]", coefficients.iter().join(", "), rhs.iter().join(", "))
        })
        .join("\n")
}

impl fmt::Display for AugmentedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_rows(&self.rows, self.number_of_variables))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zeroes_has_room_for_the_right_hand_side() {
        let matrix = AugmentedMatrix::zeroes(3, 2);
        assert_eq!(matrix.number_of_equations(), 3);
        assert_eq!(matrix.number_of_columns(), 3);
        assert!(matrix.rows.iter().all(|row| row == &vec![0.0; 3]));
    }

    #[test]
    fn from_rows_rejects_short_rows() {
        let err = AugmentedMatrix::from_rows(2, vec![vec![1.0, 1.0, 2.0], vec![1.0, 3.0]])
            .unwrap_err();
        assert_eq!(
            err,
            SolverError::RowLengthMismatch {
                row: 1,
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "equation 2: expected 3 coefficients, but got 2"
        );
    }

    #[test]
    fn from_rows_rejects_non_finite_entries() {
        let err = AugmentedMatrix::from_rows(1, vec![vec![1.0, f64::NAN]]).unwrap_err();
        assert_eq!(err, SolverError::NonFiniteCoefficient { row: 0, column: 1 });
    }

    #[test]
    fn from_rows_needs_a_variable() {
        assert_eq!(
            AugmentedMatrix::from_rows(0, vec![]).unwrap_err(),
            SolverError::NoVariables
        );
    }

    #[test]
    fn from_rows_accepts_an_empty_system() {
        let matrix = AugmentedMatrix::from_rows(2, vec![]).unwrap();
        assert_eq!(matrix.number_of_equations(), 0);
    }

    #[test]
    fn splits_coefficients_from_rhs() {
        let matrix = AugmentedMatrix::from_rows(2, vec![vec![2.0, -1.0, 5.0]]).unwrap();
        assert_eq!(matrix.coefficients(0), &[2.0, -1.0]);
        assert_eq!(matrix.rhs(0), 5.0);
        assert_eq!(matrix.to_string(), "[2, -1 | 5]");
    }
}
