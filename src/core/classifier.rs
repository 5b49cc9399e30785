//! Decides which branch of the solver applies to a coefficient triple.

use crate::config::Tolerances;
use crate::core::literal::Coefficients;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationKind {
    /// `0 = 0`: every x is a solution.
    Degenerate,
    /// `c = 0` with `c != 0`.
    NoSolution,
    Linear,
    RealDistinct,
    RealRepeated,
    ComplexConjugate,
    GeneralComplex,
    /// Real discriminant is NaN.
    Indeterminate,
}

impl EquationKind {
    pub fn root_count(self) -> Option<usize> {
        match self {
            EquationKind::Degenerate => None,
            EquationKind::NoSolution => Some(0),
            EquationKind::Linear => Some(1),
            _ => Some(2),
        }
    }
}

/// `b² − 4ac` over the reals, multiplied in the same order as the reference output.
pub fn real_discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

pub fn classify(coeffs: &Coefficients, tol: &Tolerances) -> EquationKind {
    match *coeffs {
        Coefficients::Real { a, b, c } => {
            if a == 0.0 {
                return leading_zero_kind(b == 0.0, c == 0.0);
            }
            let d = real_discriminant(a, b, c);
            if d.is_nan() {
                EquationKind::Indeterminate
            } else if d > tol.real_discriminant || d.is_infinite() {
                EquationKind::RealDistinct
            } else if d.abs() <= tol.real_discriminant {
                EquationKind::RealRepeated
            } else {
                EquationKind::ComplexConjugate
            }
        }
        Coefficients::Complex { a, b, c } => {
            let eps = tol.complex_zero;
            if a.norm() < eps {
                return leading_zero_kind(b.norm() < eps, c.norm() < eps);
            }
            EquationKind::GeneralComplex
        }
    }
}

fn leading_zero_kind(b_zero: bool, c_zero: bool) -> EquationKind {
    match (b_zero, c_zero) {
        (true, true) => EquationKind::Degenerate,
        (true, false) => EquationKind::NoSolution,
        (false, _) => EquationKind::Linear,
    }
}
