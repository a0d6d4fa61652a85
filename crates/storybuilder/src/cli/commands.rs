//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Storybuilder - compile story fragments into outline, plot, script and novel
#[derive(Parser, Debug)]
#[command(name = "storybuilder")]
#[command(about = "Compile Markdown story fragments into manuscripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build output files. With no format flags every format is built.
    Build {
        /// Project directory
        #[arg(default_value = ".")]
        project: PathBuf,

        /// Build outline.md
        #[arg(short, long)]
        outline: bool,

        /// Build plot.md
        #[arg(short, long)]
        plot: bool,

        /// Build script.md
        #[arg(short, long)]
        script: bool,

        /// Build novel.md
        #[arg(short, long)]
        novel: bool,

        /// Build info.md
        #[arg(short, long)]
        info: bool,

        /// Configuration file replacing the user and project files
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the compiled action stream
    Dump {
        /// Project directory
        #[arg(default_value = ".")]
        project: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the resolved tag map
    Tags {
        /// Project directory
        #[arg(default_value = ".")]
        project: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,

        /// Configuration file replacing the user and project files
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
