pub mod classification;

use itertools::Itertools;

use crate::error::{Result, SolverError};
use crate::matrix::backwards_substitution::BackwardsSubstitution;
use crate::matrix::gaussian_elimination::GaussianElimination;
use crate::matrix::residual::max_residual;
use crate::matrix::AugmentedMatrix;
use crate::solver_params::SolverParams;

pub use classification::SolutionClassification;

/// A linear system together with the buffers needed to solve it.
///
/// The caller's matrix is kept untouched; elimination runs on an owned
/// working copy that is reused across solves. Results of the last
/// [`System::solve`] stay queryable until the next one.
pub struct System {
    matrix: AugmentedMatrix,
    elimination: GaussianElimination,
    substitution: BackwardsSubstitution,
    classification: Option<SolutionClassification>,
}

impl System {
    pub fn new(matrix: AugmentedMatrix, params: SolverParams) -> Self {
        let equations = matrix.number_of_equations();
        let variables = matrix.number_of_variables;
        Self {
            matrix,
            elimination: GaussianElimination::zero(equations, variables, params),
            substitution: BackwardsSubstitution::zero(variables),
            classification: None,
        }
    }

    pub fn from_rows(variables: usize, rows: Vec<Vec<f64>>, params: SolverParams) -> Result<Self> {
        Ok(Self::new(AugmentedMatrix::from_rows(variables, rows)?, params))
    }

    /// Swaps in a new system of the same shape, keeping the allocated buffers.
    /// Previous results are discarded.
    pub fn replace_matrix(&mut self, matrix: AugmentedMatrix) -> Result<()> {
        if matrix.number_of_equations() != self.matrix.number_of_equations()
            || matrix.number_of_variables != self.matrix.number_of_variables
        {
            return Err(SolverError::ShapeMismatch {
                expected_rows: self.matrix.number_of_equations(),
                expected_cols: self.matrix.number_of_columns(),
                actual_rows: matrix.number_of_equations(),
                actual_cols: matrix.number_of_columns(),
            });
        }
        self.matrix = matrix;
        self.classification = None;
        Ok(())
    }

    pub fn solve(&mut self) -> SolutionClassification {
        self.elimination.copy_from_augmented_system(&self.matrix);
        self.elimination.go_to_echelon_form();
        let classification = SolutionClassification::classify(&self.elimination);
        log::debug!(
            "{}x{} system: rank {}, pivot columns [{}], {classification}",
            self.matrix.number_of_equations(),
            self.matrix.number_of_variables,
            self.elimination.rank,
            self.elimination.pivot_columns.iter().join(", "),
        );
        if classification.has_solution() {
            let solved = self.substitution.solve(&self.elimination);
            debug_assert!(solved.is_some());
            log::debug!(
                "max residual of the solution: {:e}",
                max_residual(&self.matrix, &self.substitution.solution)
            );
        }
        self.classification = Some(classification);
        classification
    }

    pub fn classification(&self) -> Result<SolutionClassification> {
        self.classification.ok_or(SolverError::NotSolved)
    }

    pub fn number_of_solutions(&self) -> Result<u8> {
        self.classification().map(SolutionClassification::number_of_solutions)
    }

    /// The solution found by the last solve; free variables are zero.
    ///
    /// Fails with [`SolverError::NoSolution`] for inconsistent systems rather
    /// than returning an empty vector.
    pub fn solution(&self) -> Result<&[f64]> {
        if self.classification()?.has_solution() {
            Ok(&self.substitution.solution)
        } else {
            Err(SolverError::NoSolution)
        }
    }

    pub fn rank(&self) -> Result<usize> {
        self.classification()?;
        Ok(self.elimination.rank)
    }

    pub fn pivot_columns(&self) -> Result<&[usize]> {
        self.classification()?;
        Ok(&self.elimination.pivot_columns)
    }

    pub fn free_variables(&self) -> Result<Vec<usize>> {
        self.classification()?;
        Ok(self.elimination.free_variables().collect())
    }

    pub fn matrix(&self) -> &AugmentedMatrix {
        &self.matrix
    }

    pub fn number_of_equations(&self) -> usize {
        self.matrix.number_of_equations()
    }

    pub fn number_of_variables(&self) -> usize {
        self.matrix.number_of_variables
    }
}
