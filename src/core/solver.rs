//! Root computation for every equation kind.
//!
//! Complex arithmetic goes through `num_complex::Complex64`; square roots and
//! divisions use the scaled textbook formulas below so results do not depend on
//! the platform's libm trigonometry.

use num_complex::Complex64;

use crate::config::Tolerances;
use crate::core::classifier::{classify, real_discriminant, EquationKind};
use crate::core::literal::Coefficients;

/// A single root. The variant decides how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Root {
    Real(f64),
    Complex(Complex64),
    /// Reported for a NaN real discriminant.
    NotANumber,
}

/// Zero, one or two roots in output order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootSet(Vec<Root>);

impl RootSet {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn single(root: Root) -> Self {
        Self(vec![root])
    }
    pub fn pair(first: Root, second: Root) -> Self {
        Self(vec![first, second])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Root> {
        self.0.iter()
    }
    pub fn as_slice(&self) -> &[Root] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub kind: EquationKind,
    pub roots: RootSet,
}

pub fn solve(coeffs: &Coefficients, tol: &Tolerances) -> Solution {
    let kind = classify(coeffs, tol);
    debug_log!("classified {:?} as {:?}", coeffs, kind);
    let roots = match *coeffs {
        Coefficients::Real { a, b, c } => solve_real(kind, a, b, c, tol),
        Coefficients::Complex { a, b, c } => solve_complex(kind, a, b, c, tol),
    };
    Solution { kind, roots }
}

fn solve_real(kind: EquationKind, a: f64, b: f64, c: f64, tol: &Tolerances) -> RootSet {
    match kind {
        EquationKind::Degenerate | EquationKind::NoSolution => RootSet::empty(),
        EquationKind::Linear => RootSet::single(Root::Real(-c / b)),
        EquationKind::Indeterminate => RootSet::pair(Root::NotANumber, Root::NotANumber),
        EquationKind::RealDistinct => {
            let sqrt_d = real_discriminant(a, b, c).sqrt();
            let x1 = (-b - sqrt_d) / (2.0 * a);
            let x2 = (-b + sqrt_d) / (2.0 * a);
            if x2 < x1 {
                RootSet::pair(Root::Real(x2), Root::Real(x1))
            } else {
                RootSet::pair(Root::Real(x1), Root::Real(x2))
            }
        }
        EquationKind::RealRepeated => {
            let x = -b / (2.0 * a);
            RootSet::pair(Root::Real(x), Root::Real(x))
        }
        EquationKind::ComplexConjugate | EquationKind::GeneralComplex => {
            let sqrt_d = principal_sqrt(Complex64::new(real_discriminant(a, b, c), 0.0));
            let x1 = (-b + sqrt_d) / (2.0 * a);
            let x2 = (-b - sqrt_d) / (2.0 * a);
            ordered_pair(x1, x2, tol.order)
        }
    }
}

fn solve_complex(
    kind: EquationKind,
    a: Complex64,
    b: Complex64,
    c: Complex64,
    tol: &Tolerances,
) -> RootSet {
    match kind {
        EquationKind::Degenerate | EquationKind::NoSolution => RootSet::empty(),
        EquationKind::Linear => RootSet::single(Root::Complex(div(-c, b))),
        _ => {
            let four_a = mul(Complex64::new(4.0, 0.0), a);
            let d = mul(b, b) - mul(four_a, c);
            let sqrt_d = principal_sqrt(d);
            let two_a = mul(Complex64::new(2.0, 0.0), a);
            let x1 = div(-b + sqrt_d, two_a);
            let x2 = div(-b - sqrt_d, two_a);
            ordered_pair(x1, x2, tol.order)
        }
    }
}

/// Ascending real part; real parts within `eps` tie and fall back to the imaginary part.
pub fn precedes(lhs: &Complex64, rhs: &Complex64, eps: f64) -> bool {
    if (lhs.re - rhs.re).abs() > eps {
        lhs.re < rhs.re
    } else {
        lhs.im < rhs.im
    }
}

fn ordered_pair(x1: Complex64, x2: Complex64, eps: f64) -> RootSet {
    if precedes(&x2, &x1, eps) {
        RootSet::pair(Root::Complex(x2), Root::Complex(x1))
    } else {
        RootSet::pair(Root::Complex(x1), Root::Complex(x2))
    }
}

/// Smith's division; avoids the overflow of the naive `|w|²` denominator.
/// A NaN result is recovered to infinities or zeros as in C99 Annex G.
pub fn div(z: Complex64, w: Complex64) -> Complex64 {
    let (a, b, c, d) = (z.re, z.im, w.re, w.im);
    let (x, y) = if c.abs() < d.abs() {
        let ratio = c / d;
        let denom = c * ratio + d;
        ((a * ratio + b) / denom, (b * ratio - a) / denom)
    } else {
        let ratio = d / c;
        let denom = d * ratio + c;
        ((b * ratio + a) / denom, (b - a * ratio) / denom)
    };
    if !(x.is_nan() && y.is_nan()) {
        return Complex64::new(x, y);
    }

    if c == 0.0 && d == 0.0 && (!a.is_nan() || !b.is_nan()) {
        let inf = f64::INFINITY.copysign(c);
        Complex64::new(inf * a, inf * b)
    } else if (a.is_infinite() || b.is_infinite()) && c.is_finite() && d.is_finite() {
        let (a, b) = (unit_if_infinite(a), unit_if_infinite(b));
        Complex64::new(f64::INFINITY * (a * c + b * d), f64::INFINITY * (b * c - a * d))
    } else if (c.is_infinite() || d.is_infinite()) && a.is_finite() && b.is_finite() {
        let (c, d) = (unit_if_infinite(c), unit_if_infinite(d));
        Complex64::new(0.0 * (a * c + b * d), 0.0 * (b * c - a * d))
    } else {
        Complex64::new(x, y)
    }
}

/// Complex product that keeps infinities an overflow or `inf·0` would turn into NaN.
pub fn mul(z: Complex64, w: Complex64) -> Complex64 {
    let (mut a, mut b, mut c, mut d) = (z.re, z.im, w.re, w.im);
    let (ac, bd, ad, bc) = (a * c, b * d, a * d, b * c);
    let (x, y) = (ac - bd, ad + bc);
    if !(x.is_nan() && y.is_nan()) {
        return Complex64::new(x, y);
    }

    let mut recalc = false;
    if a.is_infinite() || b.is_infinite() {
        a = unit_if_infinite(a);
        b = unit_if_infinite(b);
        c = zero_if_nan(c);
        d = zero_if_nan(d);
        recalc = true;
    }
    if c.is_infinite() || d.is_infinite() {
        c = unit_if_infinite(c);
        d = unit_if_infinite(d);
        a = zero_if_nan(a);
        b = zero_if_nan(b);
        recalc = true;
    }
    if !recalc && [ac, bd, ad, bc].iter().any(|p| p.is_infinite()) {
        a = zero_if_nan(a);
        b = zero_if_nan(b);
        c = zero_if_nan(c);
        d = zero_if_nan(d);
        recalc = true;
    }
    if !recalc {
        return Complex64::new(x, y);
    }
    Complex64::new(f64::INFINITY * (a * c - b * d), f64::INFINITY * (a * d + b * c))
}

// ±1 for an infinity, ±0 otherwise; the sign is kept.
fn unit_if_infinite(v: f64) -> f64 {
    let magnitude = if v.is_infinite() { 1.0 } else { 0.0 };
    f64::copysign(magnitude, v)
}

fn zero_if_nan(v: f64) -> f64 {
    if v.is_nan() {
        0.0f64.copysign(v)
    } else {
        v
    }
}

const SUBNORMAL_SCALE: f64 = 18_014_398_509_481_984.0; // 2^54
const SUBNORMAL_SCALE_SQRT: f64 = 134_217_728.0; // 2^27

/// Principal square root: non-negative real part, imaginary sign taken from `z.im`.
pub fn principal_sqrt(z: Complex64) -> Complex64 {
    let (re, im) = (z.re, z.im);

    if im.is_infinite() {
        return Complex64::new(f64::INFINITY, im);
    }
    if re.is_nan() || im.is_nan() {
        if re == f64::NEG_INFINITY {
            return Complex64::new(f64::NAN, f64::INFINITY.copysign(im));
        }
        if re == f64::INFINITY {
            return Complex64::new(re, im);
        }
        return Complex64::new(f64::NAN, f64::NAN);
    }
    if re.is_infinite() {
        return if re < 0.0 {
            Complex64::new(0.0, f64::INFINITY.copysign(im))
        } else {
            Complex64::new(re, 0.0f64.copysign(im))
        };
    }
    if im == 0.0 {
        return if re < 0.0 {
            Complex64::new(0.0, (-re).sqrt().copysign(im))
        } else {
            Complex64::new(re.sqrt().abs(), 0.0f64.copysign(im))
        };
    }
    if re == 0.0 {
        let r = (0.5 * im.abs()).sqrt();
        return Complex64::new(r, r.copysign(im));
    }

    // keep d + |re| finite and subnormals precise
    if re.abs() > f64::MAX / 4.0 || im.abs() > f64::MAX / 4.0 {
        return principal_sqrt(z * 0.25) * 2.0;
    }
    if re.abs() < f64::MIN_POSITIVE && im.abs() < f64::MIN_POSITIVE {
        return principal_sqrt(z * SUBNORMAL_SCALE) / SUBNORMAL_SCALE_SQRT;
    }

    let d = re.hypot(im);
    let (r, s) = if re > 0.0 {
        let r = (0.5 * (d + re)).sqrt();
        (r, 0.5 * (im / r))
    } else {
        let s = (0.5 * (d - re)).sqrt();
        ((0.5 * (im / s)).abs(), s)
    };
    Complex64::new(r, s.copysign(im))
}
