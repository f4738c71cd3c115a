use super::gaussian_elimination::GaussianElimination;

pub struct BackwardsSubstitution {
    pub solution: Vec<f64>,
}

impl BackwardsSubstitution {
    pub fn zero(n: usize) -> Self {
        Self {
            solution: vec![0.0; n],
        }
    }

    /// Solves `Ux = b` for a system already in row-echelon form. Free
    /// variables are pinned to zero, so the result is one point of the
    /// solution space.
    pub fn solve(&mut self, u: &GaussianElimination) -> Option<()> {
        debug_assert_eq!(self.solution.len(), u.number_of_variables);
        self.solution.fill(0.0);
        if !u.is_consistent() {
            // a row without coefficients but with b[i] != 0 means there's
            // no solution to Ux = b
            return None;
        }
        let rhs = u.number_of_variables;
        for (row_index, &pivot_column) in u.pivot_columns.iter().enumerate().rev() {
            let row = &u.rows[row_index];
            let known: f64 = row[pivot_column + 1..rhs]
                .iter()
                .zip(&self.solution[pivot_column + 1..])
                .map(|(a, x)| a * x)
                .sum();
            self.solution[pivot_column] = (row[rhs] - known) / row[pivot_column];
        }
        Some(())
    }
}

#[cfg(test)]
mod test {
    use crate::matrix::AugmentedMatrix;
    use crate::solver_params::SolverParams;

    use super::*;

    fn reduce_and_solve(variables: usize, rows: Vec<Vec<f64>>) -> Option<Vec<f64>> {
        let matrix = AugmentedMatrix::from_rows(variables, rows).unwrap();
        let mut gj = GaussianElimination::zero(
            matrix.number_of_equations(),
            variables,
            SolverParams::default(),
        );
        gj.copy_from_augmented_system(&matrix);
        gj.go_to_echelon_form();
        let mut solver = BackwardsSubstitution::zero(variables);
        solver.solve(&gj).map(|_| solver.solution)
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn solves_a_unique_system() {
        let solution = reduce_and_solve(2, vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]]).unwrap();
        assert_close(&solution, &[2.0, 1.0]);
    }

    #[test]
    fn solves_a_three_by_three_system() {
        // x = 2, y = 12, z = 3
        let solution = reduce_and_solve(
            3,
            vec![
                vec![1.0, 0.0, 0.0, 2.0],
                vec![1.0, 1.0, 1.0, 17.0],
                vec![1.0, 2.0, 4.0, 38.0],
            ],
        )
        .unwrap();
        assert_close(&solution, &[2.0, 12.0, 3.0]);
    }

    #[test]
    fn free_variables_are_zero() {
        let solution = reduce_and_solve(2, vec![vec![1.0, 1.0, 2.0]]).unwrap();
        assert_close(&solution, &[2.0, 0.0]);
    }

    #[test]
    fn free_variable_between_pivots() {
        // x + 2y = 1, z = 3 after elimination; y is free
        let solution =
            reduce_and_solve(3, vec![vec![1.0, 2.0, 0.0, 1.0], vec![2.0, 4.0, 1.0, 5.0]]).unwrap();
        assert_close(&solution, &[1.0, 0.0, 3.0]);
    }

    #[test]
    fn no_solution_for_contradicting_rows() {
        assert!(reduce_and_solve(2, vec![vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 2.0]]).is_none());
    }

    #[test]
    fn clears_the_previous_solution() {
        let matrix = AugmentedMatrix::from_rows(2, vec![vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 2.0]])
            .unwrap();
        let mut gj = GaussianElimination::zero(2, 2, SolverParams::default());
        gj.copy_from_augmented_system(&matrix);
        gj.go_to_echelon_form();
        let mut solver = BackwardsSubstitution::zero(2);
        solver.solution = vec![7.0, 7.0];
        assert!(solver.solve(&gj).is_none());
        assert_eq!(solver.solution, vec![0.0, 0.0]);
    }
}
