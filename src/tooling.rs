//! Tooling & Integration Layer
//!
//! Command-line surface for index generation.

pub mod cli;

pub use cli::{Cli, CliContext};
