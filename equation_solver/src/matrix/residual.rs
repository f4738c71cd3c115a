use super::augmented_matrix::AugmentedMatrix;

pub fn max_residual(system: &AugmentedMatrix, x: &[f64]) -> f64 {
    // evaluate a x - b row by row and keep the worst deviation
    debug_assert_eq!(x.len(), system.number_of_variables);
    (0..system.number_of_equations())
        .map(|r| {
            let lhs: f64 = system
                .coefficients(r)
                .iter()
                .zip(x)
                .map(|(a, x)| a * x)
                .sum();
            (lhs - system.rhs(r)).abs()
        })
        .fold(0.0, f64::max)
}

pub fn satisfies(system: &AugmentedMatrix, x: &[f64], tolerance: f64) -> bool {
    max_residual(system, x) <= tolerance
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_solution_has_no_residual() {
        let system =
            AugmentedMatrix::from_rows(2, vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]]).unwrap();
        assert_eq!(max_residual(&system, &[2.0, 1.0]), 0.0);
        assert!(satisfies(&system, &[2.0, 1.0], 1e-12));
    }

    #[test]
    fn reports_the_worst_equation() {
        let system =
            AugmentedMatrix::from_rows(2, vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 1.0]]).unwrap();
        assert_eq!(max_residual(&system, &[1.5, 0.0]), 1.0);
        assert!(!satisfies(&system, &[1.5, 0.0], 0.5));
    }

    #[test]
    fn empty_system_is_always_satisfied() {
        let system = AugmentedMatrix::from_rows(3, vec![]).unwrap();
        assert_eq!(max_residual(&system, &[4.0, 5.0, 6.0]), 0.0);
    }
}
