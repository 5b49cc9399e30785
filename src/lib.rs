#[macro_use]
pub mod core;
pub mod cli;
pub mod commands;
pub mod config;
