//! quadsolve: three coefficients on stdin, solution report on stdout.

use clap::Parser; // trait import enables QuadCli::parse()
use colored::Colorize;

use quadsolve::cli::QuadCli;
use quadsolve::commands;
use quadsolve::config::{resolve_tolerances, Tolerances};

fn main() -> anyhow::Result<()> {
    let args = QuadCli::parse();
    if args.debug {
        quadsolve::core::debug::enable();
    }

    let tol = match resolve_tolerances(&args.config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{} {:#}; using built-in tolerances", "warn:".yellow().bold(), e);
            Tolerances::default()
        }
    };

    commands::solve::main(&tol)
}
