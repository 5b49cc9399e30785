//! `quadsolve`: read three coefficients from stdin, write the report to stdout.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};

use crate::config::Tolerances;
use crate::core::report::{evaluate_or_wrong, Report};

/// Runs the pipeline over raw input text. Tokens past the third are ignored.
pub fn solve_text(input: &str, tol: &Tolerances) -> Report {
    let tokens: Vec<&str> = input.split_whitespace().take(3).collect();
    debug_log!("tokens: {:?}", tokens);
    evaluate_or_wrong(&tokens, tol)
}

pub fn run<R: Read, W: Write>(mut input: R, mut output: W, tol: &Tolerances) -> Result<Report> {
    let mut buf = String::new();
    input.read_to_string(&mut buf).context("reading coefficients from stdin")?;
    let report = solve_text(&buf, tol);
    write!(output, "{}", report).context("writing report")?;
    output.flush().context("flushing report")?;
    Ok(report)
}

pub fn main(tol: &Tolerances) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), tol)?;
    Ok(())
}
