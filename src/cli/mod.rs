//! Command-line surface.

mod commands;

pub use commands::{run_cli, Cli, Commands};
