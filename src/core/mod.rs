//! Core pipeline: literal parsing → classification → solving → rendering.

#[macro_use]
pub mod debug; // gated debug logging (QUADSOLVE_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod literal;
pub mod classifier;
pub mod solver;
pub mod formatter;
pub mod report;

pub use classifier::EquationKind;
pub use literal::Coefficients;
pub use report::Report;
