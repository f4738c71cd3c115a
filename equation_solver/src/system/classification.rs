use strum_macros::Display;

use crate::matrix::gaussian_elimination::GaussianElimination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SolutionClassification {
    #[strum(to_string = "no solution")]
    NoSolution,
    #[strum(to_string = "a unique solution")]
    UniqueSolution,
    #[strum(to_string = "infinitely many solutions")]
    InfiniteSolutions,
}

impl SolutionClassification {
    /// Classifies a reduced system by its rank and the consistency of the
    /// rows left without a pivot.
    pub fn classify(reduced: &GaussianElimination) -> Self {
        if !reduced.is_consistent() {
            Self::NoSolution
        } else if reduced.rank == reduced.number_of_variables {
            Self::UniqueSolution
        } else {
            Self::InfiniteSolutions
        }
    }

    /// `0`, `1`, or `2` for infinitely many.
    pub fn number_of_solutions(self) -> u8 {
        match self {
            Self::NoSolution => 0,
            Self::UniqueSolution => 1,
            Self::InfiniteSolutions => 2,
        }
    }

    pub fn has_solution(self) -> bool {
        self != Self::NoSolution
    }
}
