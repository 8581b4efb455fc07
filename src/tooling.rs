//! Tooling & Integration Layer
//!
//! Command-line surface over the generator: argument parsing, config
//! overlay, output writing, and run summaries.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
