use num_complex::Complex64;

use quadsolve::config::Tolerances;
use quadsolve::core::literal::{parse_coefficients, parse_complex, parse_real};
use quadsolve::core::solver::{solve, Root};
use quadsolve::core::{Coefficients, EquationKind};

fn tol() -> Tolerances {
    Tolerances::default()
}

fn reals(sol_roots: &[Root]) -> Vec<f64> {
    sol_roots
        .iter()
        .map(|r| match r {
            Root::Real(x) => *x,
            other => panic!("expected real root, got {:?}", other),
        })
        .collect()
}

fn grid() -> Vec<f64> {
    vec![-7.5, -3.0, -1.0, -0.25, 0.5, 1.0, 2.0, 4.0, 9.0]
}

#[test]
fn distinct_roots_vanish_and_ascend() {
    for a in grid() {
        for b in grid() {
            for c in grid() {
                let sol = solve(&Coefficients::Real { a, b, c }, &tol());
                if sol.kind != EquationKind::RealDistinct {
                    continue;
                }
                let xs = reals(sol.roots.as_slice());
                assert!(xs[0] <= xs[1], "{} {} {} -> {:?}", a, b, c, xs);
                for x in xs {
                    let scale = (a * x * x).abs() + (b * x).abs() + c.abs();
                    assert!((a * x * x + b * x + c).abs() <= 1e-12 * scale.max(1.0));
                }
            }
        }
    }
}

#[test]
fn repeated_roots_equal_minus_b_over_2a() {
    for (a, b, c) in [(1.0, 2.0, 1.0), (4.0, -4.0, 1.0), (-2.0, 4.0, -2.0), (0.5, 3.0, 4.5)] {
        let sol = solve(&Coefficients::Real { a, b, c }, &tol());
        assert_eq!(sol.kind, EquationKind::RealRepeated);
        let xs = reals(sol.roots.as_slice());
        assert_eq!(xs[0].to_bits(), xs[1].to_bits());
        assert_eq!(xs[0], -b / (2.0 * a));
    }
}

#[test]
fn negative_discriminant_roots_are_conjugate() {
    for a in grid() {
        for b in grid() {
            for c in grid() {
                let sol = solve(&Coefficients::Real { a, b, c }, &tol());
                if sol.kind != EquationKind::ComplexConjugate {
                    continue;
                }
                match sol.roots.as_slice() {
                    [Root::Complex(z1), Root::Complex(z2)] => assert_eq!(*z1, z2.conj()),
                    other => panic!("unexpected roots {:?}", other),
                }
            }
        }
    }
}

#[test]
fn real_literals_round_trip() {
    for v in [0.0, 1.0, -2.5, 1e-5, 123456.789, -9.87654321e12, 3.0e-200] {
        let text = format!("{:e}", v);
        assert_eq!(parse_real(&text), Ok(v), "{}", text);
        let text = format!("{}", v);
        assert_eq!(parse_real(&text), Ok(v), "{}", text);
    }
}

#[test]
fn complex_literal_forms() {
    let cases = [
        ("3+4i", (3.0, 4.0)),
        ("3-4i", (3.0, -4.0)),
        ("4i", (0.0, 4.0)),
        ("-4i", (0.0, -4.0)),
        ("i", (0.0, 1.0)),
        ("-i", (0.0, -1.0)),
        ("-2.5e-3+1e2i", (-2.5e-3, 100.0)),
        ("4I-3", (-3.0, 4.0)),
        ("1 + 2 i", (1.0, 2.0)),
    ];
    for (text, (re, im)) in cases {
        assert_eq!(parse_complex(text), Ok(Complex64::new(re, im)), "{}", text);
    }
}

#[test]
fn real_triple_is_never_promoted() {
    assert!(parse_coefficients(&["inf", "nan", "-0"]).unwrap().is_real());
    assert!(!parse_coefficients(&["1", "2", "3+0i"]).unwrap().is_real());
}
