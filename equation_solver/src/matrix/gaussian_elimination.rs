use std::fmt;

use bitvec::prelude::*;

use super::augmented_matrix::{render_rows, AugmentedMatrix};
use crate::solver_params::SolverParams;

/// Working copy of an augmented system, reduced in place to row-echelon form
/// by forward elimination with partial pivoting.
pub struct GaussianElimination {
    pub number_of_variables: usize,
    pub rows: Vec<Vec<f64>>,
    /// pivot column of each pivot row, in elimination order
    pub pivot_columns: Vec<usize>,
    /// one bit per variable, set when its column carries a pivot
    pub pivot_mask: BitVec,
    pub rank: usize,
    active_column: usize,
    params: SolverParams,
}

impl GaussianElimination {
    pub fn zero(equations: usize, variables: usize, params: SolverParams) -> Self {
        Self {
            number_of_variables: variables,
            rows: (0..equations).map(|_| vec![0.0; variables + 1]).collect(),
            pivot_columns: Vec::with_capacity(equations.min(variables)),
            pivot_mask: bitvec![usize, Lsb0; 0; variables],
            rank: 0,
            active_column: 0,
            params,
        }
    }

    // allows one to reduce many systems of the same shape without extra
    // allocations, provided the matrix is the same shape.
    pub fn copy_from_augmented_system(&mut self, m: &AugmentedMatrix) {
        debug_assert_eq!(m.number_of_variables, self.number_of_variables);
        debug_assert_eq!(m.rows.len(), self.rows.len());
        self.active_column = 0;
        self.rank = 0;
        self.pivot_columns.clear();
        self.pivot_mask.fill(false);
        for (idx, row) in m.rows.iter().enumerate() {
            self.rows[idx].copy_from_slice(row);
        }
    }

    pub fn go_to_echelon_form(&mut self) {
        while self.is_not_in_echelon_form() {
            self.pivot_active_column();
            self.go_to_next_column();
        }
        log::trace!("echelon form (rank {}):\n{}", self.rank, self);
    }

    /// Rows below the last pivot row have no coefficient above the tolerance;
    /// the system is consistent iff their right-hand sides vanish as well.
    pub fn is_consistent(&self) -> bool {
        let rhs = self.number_of_variables;
        self.rows[self.rank..]
            .iter()
            .all(|row| self.params.is_zero(row[rhs]))
    }

    pub fn free_variables(&self) -> impl Iterator<Item = usize> + '_ {
        self.pivot_mask.iter_zeros()
    }

    fn is_not_in_echelon_form(&self) -> bool {
        self.rank < self.rows.len() && self.active_column < self.number_of_variables
    }

    fn pivot_active_column(&mut self) {
        if let Some(pivot_row) = self.find_pivot_row() {
            self.rows.swap(self.rank, pivot_row);
            self.eliminate_below_pivot();
            self.pivot_columns.push(self.active_column);
            self.pivot_mask.set(self.active_column, true);
            self.rank += 1;
        }
    }

    // largest magnitude in the active column among the rows without a pivot
    // yet. ties keep the lowest row index.
    fn find_pivot_row(&self) -> Option<usize> {
        let column = self.active_column;
        let mut best: Option<(usize, f64)> = None;
        for row_index in self.rank..self.rows.len() {
            let magnitude = self.rows[row_index][column].abs();
            if best.map_or(true, |(_, best_magnitude)| magnitude > best_magnitude) {
                best = Some((row_index, magnitude));
            }
        }
        best.filter(|&(_, magnitude)| !self.params.is_zero(magnitude))
            .map(|(row_index, _)| row_index)
    }

    fn eliminate_below_pivot(&mut self) {
        let column = self.active_column;
        let (upper, lower) = self.rows.split_at_mut(self.rank + 1);
        let pivot = &upper[self.rank];
        for row in lower.iter_mut() {
            let factor = row[column] / pivot[column];
            for (entry, pivot_entry) in row[column..].iter_mut().zip(&pivot[column..]) {
                *entry -= factor * pivot_entry;
            }
            row[column] = 0.0;
        }
    }

    fn go_to_next_column(&mut self) {
        self.active_column += 1;
    }
}

impl fmt::Display for GaussianElimination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_rows(&self.rows, self.number_of_variables))
    }
}
