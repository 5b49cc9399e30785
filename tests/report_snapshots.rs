//! tests/report_snapshots.rs
//! Snapshot tests for complete reports, covering each equation kind.

use quadsolve::commands::solve::solve_text;
use quadsolve::config::Tolerances;

fn solve(input: &str) -> String {
    solve_text(input, &Tolerances::default()).to_string()
}

#[test]
fn real_distinct_ascending_for_negative_leading() {
    insta::assert_snapshot!(solve("-1 0 4"), @r###"
    OK
    2
    -2.0000000000
    2.0000000000
    "###);
}

#[test]
fn hex_float_coefficient() {
    insta::assert_snapshot!(solve("0x1p1 0 -8"), @r###"
    OK
    2
    -2.0000000000
    2.0000000000
    "###);
}

#[test]
fn negative_zero_repeated_root() {
    insta::assert_snapshot!(solve("1 0 0"), @r###"
    OK
    2
    -0.0000000000
    -0.0000000000
    "###);
}

#[test]
fn real_conjugate_pair() {
    insta::assert_snapshot!(solve("1 0 1"), @r###"
    OK
    2
    -1.00000000000000000000
    1.00000000000000000000
    "###);
    insta::assert_snapshot!(solve("1 0 4"), @r###"
    OK
    2
    -2.00000000000000000000
    2.00000000000000000000
    "###);
}

#[test]
fn nan_discriminant() {
    insta::assert_snapshot!(solve("1 nan 1"), @r###"
    OK
    2
    nan
    nan
    "###);
}

#[test]
fn complex_square_root_of_i() {
    let expected = "OK\n2\n-0.70710678118654757274 -0.70710678118654757274\n0.70710678118654757274 0.70710678118654757274\n";
    assert_eq!(solve("1 0 -i"), expected);
    assert_eq!(solve("i 0 1"), expected);
}

#[test]
fn complex_linear() {
    insta::assert_snapshot!(solve("0 i 1"), @r###"
    OK
    1
    1.00000000000000000000
    "###);
    insta::assert_snapshot!(solve("0 1 2i"), @r###"
    OK
    1
    -2.00000000000000000000
    "###);
}

#[test]
fn complex_zero_roots_print_as_zero() {
    insta::assert_snapshot!(solve("2i+3 0 0"), @r###"
    OK
    2
    0
    0
    "###);
}

#[test]
fn complex_degenerate_cases() {
    assert_eq!(solve("0 0 0i"), "INF\n");
    assert_eq!(solve("1e-11i 0 -1e-12i"), "INF\n");
    assert_eq!(solve("0 1e-11i 3i"), "OK\n0\n");
}

#[test]
fn inf_inside_complex_input_is_rejected() {
    assert_eq!(solve("inf i 1"), "WRONG\n");
}

#[test]
fn overflowing_complex_roots_stay_infinite() {
    insta::assert_snapshot!(solve("3e10i 2e10 1e300"), @r###"
    OK
    2
    -inf -inf
    inf inf
    "###);
    insta::assert_snapshot!(solve("1e300 -8e15 0e11-9e7i"), @r###"
    OK
    2
    -inf -inf
    inf inf
    "###);
    insta::assert_snapshot!(solve("i 1e154+1e200i 1e-11"), @r###"
    OK
    2
    -inf inf
    inf -inf
    "###);
}
