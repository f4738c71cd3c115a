//! Console front end: prompts for the dimensions and coefficient rows of a
//! system and prints the outcome of a solve.

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

use anyhow::{anyhow, bail, Context, Result};
use itertools::Itertools;

use crate::matrix::AugmentedMatrix;
use crate::system::{SolutionClassification, System};

const SIGNIFICANT_DIGITS: usize = 6;

/// Renders a value the way a default C++ output stream does (`%g` with six
/// significant digits): fixed notation for exponents in `-4..6`, scientific
/// otherwise, trailing zeros dropped.
pub fn format_value(value: f64) -> String {
    // adding zero turns -0 into 0
    let value = value + 0.0;
    if value == 0.0 {
        return "0".to_string();
    }
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

pub fn parse_coefficients(line: &str) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(anyhow!("'{token}' is not a finite number")),
        })
        .collect()
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line).context("reading input")? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line)
}

pub fn prompt_dimension<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<NonZeroUsize> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let line = read_line(input)?;
        match line.trim().parse::<NonZeroUsize>() {
            Ok(value) => return Ok(value),
            _ => writeln!(
                output,
                "Error: Expected a positive integer, but got '{}'. Please try again...",
                line.trim()
            )?,
        }
    }
}

/// Reads one row of `variables + 1` numbers per equation, asking again until
/// a row has the right length.
pub fn read_system<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    equations: usize,
    variables: usize,
) -> Result<AugmentedMatrix> {
    let expected = variables
        .checked_add(1)
        .with_context(|| format!("{variables} variables do not fit in an equation row"))?;
    let mut rows = Vec::new();
    for i in 0..equations {
        loop {
            write!(
                output,
                "Enter equation {} coefficients (a_ij and b_i), separated by spaces: ",
                i + 1
            )?;
            output.flush()?;
            let line = read_line(input).with_context(|| format!("reading equation {}", i + 1))?;
            match parse_coefficients(&line) {
                Ok(row) if row.len() == expected => {
                    rows.push(row);
                    break;
                }
                Ok(row) => writeln!(
                    output,
                    "Error: Expected {expected} coefficients, but got {}. Please try again...",
                    row.len()
                )?,
                Err(err) => writeln!(output, "Error: {err}. Please try again...")?,
            }
        }
    }
    AugmentedMatrix::from_rows(variables, rows).context("building the augmented matrix")
}

pub fn write_report<W: Write>(output: &mut W, system: &System) -> Result<()> {
    let classification = system.classification()?;
    match classification {
        SolutionClassification::NoSolution => writeln!(output, "The system has no solution...")?,
        SolutionClassification::UniqueSolution => {
            writeln!(output, "The system has a unique solution:")?
        }
        SolutionClassification::InfiniteSolutions => writeln!(
            output,
            "The system has infinitely many solutions. One possible solution is:"
        )?,
    }
    if classification.has_solution() {
        let lines = system
            .solution()?
            .iter()
            .enumerate()
            .map(|(idx, value)| format!("x{} = {}", idx + 1, format_value(*value)))
            .join("\n");
        writeln!(output, "{lines}")?;
    }
    Ok(())
}
