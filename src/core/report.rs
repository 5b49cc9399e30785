//! The line protocol written to stdout.

use std::fmt;

use crate::config::Tolerances;
use crate::core::error::InputError;
use crate::core::formatter::format_root;
use crate::core::literal::parse_coefficients;
use crate::core::solver::{solve, Solution};

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Malformed input.
    Wrong,
    /// Every x solves the equation.
    Infinite,
    /// `OK`, the count, then one rendered value per line.
    Solved(Vec<String>),
}

impl Report {
    pub fn from_solution(solution: &Solution, tol: &Tolerances) -> Self {
        let Some(count) = solution.kind.root_count() else {
            return Report::Infinite;
        };
        debug_assert_eq!(count, solution.roots.len(), "{:?}", solution.kind);
        Report::Solved(solution.roots.iter().map(|r| format_root(r, tol)).collect())
    }

    pub fn status(&self) -> &'static str {
        match self {
            Report::Wrong => "WRONG",
            Report::Infinite => "INF",
            Report::Solved(_) => "OK",
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![self.status().to_string()];
        if let Report::Solved(values) = self {
            out.push(values.len().to_string());
            out.extend(values.iter().cloned());
        }
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Full pipeline over already split tokens.
pub fn evaluate<S: AsRef<str>>(tokens: &[S], tol: &Tolerances) -> Result<Report, InputError> {
    let coeffs = parse_coefficients(tokens)?;
    let solution = solve(&coeffs, tol);
    Ok(Report::from_solution(&solution, tol))
}

/// Like [`evaluate`] but folds input errors into `WRONG`.
pub fn evaluate_or_wrong<S: AsRef<str>>(tokens: &[S], tol: &Tolerances) -> Report {
    match evaluate(tokens, tol) {
        Ok(report) => report,
        Err(e) => {
            debug_log!("input rejected: {}", e);
            Report::Wrong
        }
    }
}
