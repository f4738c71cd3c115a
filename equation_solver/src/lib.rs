pub mod cli;
pub mod error;
pub mod matrix;
pub mod solver_params;
pub mod system;
