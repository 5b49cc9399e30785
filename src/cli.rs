use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quadsolve",
    about = "Solve a·x² + b·x + c = 0 for real or complex coefficients read from stdin",
    version
)]
pub struct QuadCli {
    /// Print classification and parse diagnostics to stderr
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Override numeric tolerances from a TOML file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
