//! Command-line interface module.

mod commands;
mod handlers;

pub use commands::{Cli, Commands, OutputFormat};
pub use handlers::{FormatFlags, run_build, run_dump, run_tags};
