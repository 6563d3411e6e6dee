//! Command-line interface module.
//!
//! This module provides the argument parser and the run handler for the
//! explainer binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::run_explainer;
