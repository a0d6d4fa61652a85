//! Storybuilder CLI binary.
//!
//! - Build outline, plot, script, novel, info and data reports
//! - Dump the compiled action stream
//! - List the resolved name tags

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, FormatFlags, run_build, run_dump, run_tags};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_filter = if cli.verbose {
        "debug"
    } else {
        "info,storybuilder=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Build {
            project,
            outline,
            plot,
            script,
            novel,
            info,
            config,
        } => {
            let flags = FormatFlags {
                outline,
                plot,
                script,
                novel,
                info,
            };
            run_build(project, flags, config)?;
        }

        Commands::Dump { project, format } => {
            run_dump(project, format)?;
        }

        Commands::Tags {
            project,
            format,
            config,
        } => {
            run_tags(project, format, config)?;
        }
    }

    Ok(())
}
