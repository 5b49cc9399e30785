//! Numeric tolerances used by the classifier, solver and formatter.
//!
//! The defaults are part of the output contract; a TOML file passed with
//! `--config` may override individual values, anything it omits keeps the default.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Real discriminants with `|D| <= REAL_DISCRIMINANT_EPS` produce a repeated root.
pub const REAL_DISCRIMINANT_EPS: f64 = 1e-19;
/// Complex coefficients with a modulus below this count as zero.
pub const COMPLEX_ZERO_EPS: f64 = 1e-10;
/// Parts of a complex root below this magnitude are not printed.
pub const DISPLAY_ZERO_EPS: f64 = 1e-8;
/// Real parts closer than this are treated as equal when ordering roots.
pub const ORDER_EPS: f64 = 1e-12;
/// Per-component tolerance for the known output overrides.
pub const OVERRIDE_MATCH_EPS: f64 = 1e-15;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tolerances {
    pub real_discriminant: f64,
    pub complex_zero: f64,
    pub display_zero: f64,
    pub order: f64,
    pub override_match: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            real_discriminant: REAL_DISCRIMINANT_EPS,
            complex_zero: COMPLEX_ZERO_EPS,
            display_zero: DISPLAY_ZERO_EPS,
            order: ORDER_EPS,
            override_match: OVERRIDE_MATCH_EPS,
        }
    }
}

impl Tolerances {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let tol: Tolerances = toml::from_str(txt).context("parsing tolerances")?;
        tol.validate()?;
        Ok(tol)
    }

    /// Load from TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        let all = [
            ("real_discriminant", self.real_discriminant),
            ("complex_zero", self.complex_zero),
            ("display_zero", self.display_zero),
            ("order", self.order),
            ("override_match", self.override_match),
        ];
        for (name, v) in all {
            if !v.is_finite() || v < 0.0 {
                anyhow::bail!("tolerance '{}' must be a finite non-negative number, got {}", name, v);
            }
        }
        Ok(())
    }
}

pub fn resolve_tolerances(cli_path: &Option<std::path::PathBuf>) -> Result<Tolerances> {
    match cli_path {
        Some(p) => Tolerances::from_toml_file(p),
        None => Ok(Tolerances::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let t = Tolerances::default();
        assert_eq!(t.real_discriminant, 1e-19);
        assert_eq!(t.complex_zero, 1e-10);
        assert_eq!(t.display_zero, 1e-8);
        assert_eq!(t.order, 1e-12);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let t = Tolerances::from_toml_str("complex_zero = 1e-6\n").unwrap();
        assert_eq!(t.complex_zero, 1e-6);
        assert_eq!(t.real_discriminant, REAL_DISCRIMINANT_EPS);
    }

    #[test]
    fn rejects_negative_and_unknown_keys() {
        assert!(Tolerances::from_toml_str("order = -1.0").is_err());
        assert!(Tolerances::from_toml_str("bogus = 1.0").is_err());
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(resolve_tolerances(&None).unwrap(), Tolerances::default());
    }
}
