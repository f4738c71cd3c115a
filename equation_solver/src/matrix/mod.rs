pub mod augmented_matrix;
pub mod backwards_substitution;
pub mod gaussian_elimination;
pub mod residual;

pub use augmented_matrix::AugmentedMatrix;
