use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use equation_solver::cli::{prompt_dimension, read_system, write_report};
use equation_solver::solver_params::{SolverParams, DEFAULT_TOLERANCE};
use equation_solver::system::System;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of equations; prompted for when omitted
    #[arg(short = 'n', long)]
    pub equations: Option<NonZeroUsize>,
    /// Number of variables; prompted for when omitted
    #[arg(short = 'm', long)]
    pub variables: Option<NonZeroUsize>,
    /// Pivots and right-hand sides below this magnitude count as zero
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,
}

fn run_solver(args: &Args) -> Result<()> {
    let params = SolverParams::new(args.tolerance).context("validating --tolerance")?;
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let equations = match args.equations {
        Some(n) => n,
        None => prompt_dimension(&mut input, &mut output, "Enter the number of equations (n): ")?,
    };
    let variables = match args.variables {
        Some(m) => m,
        None => prompt_dimension(&mut input, &mut output, "Enter the number of variables (m): ")?,
    };
    let matrix = read_system(&mut input, &mut output, equations.get(), variables.get())?;
    log::trace!("input system:\n{matrix}");
    let mut system = System::new(matrix, params);
    system.solve();
    write_report(&mut output, &system).context("printing the result")?;
    output.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run_solver(&args) {
        eprintln!("ran into solver error: {err:?}");
        process::exit(1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimension_flags_must_be_positive() {
        assert!(Args::try_parse_from(["equation_solver", "-n", "0"]).is_err());
        assert!(Args::try_parse_from(["equation_solver", "--variables", "0"]).is_err());
        assert!(Args::try_parse_from(["equation_solver", "-m", "-2"]).is_err());
        let args = Args::try_parse_from(["equation_solver", "-n", "2", "-m", "3"]).unwrap();
        assert_eq!(args.equations.map(NonZeroUsize::get), Some(2));
        assert_eq!(args.variables.map(NonZeroUsize::get), Some(3));
    }

    #[test]
    fn tolerance_defaults_when_omitted() {
        let args = Args::try_parse_from(["equation_solver"]).unwrap();
        assert_eq!(args.tolerance, DEFAULT_TOLERANCE);
        assert!(args.equations.is_none());
    }
}
