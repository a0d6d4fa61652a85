//! Storybuilder: compile Markdown story fragments into manuscripts.
//!
//! A story project is a directory of Markdown files with YAML front
//! matter (book, chapters, episodes, scenes, persons, stages, ...) plus an
//! `order.yml` manifest. A build turns it into:
//!
//! - `outline.md` and `plot.md`, read from the story records
//! - `novel.md`, `script.md` and `info.md`, projected from the compiled
//!   action stream
//! - `data.md`, contents plus character counts and action statistics
//!
//! # Architecture
//!
//! - `storybuilder-error` - Error types
//! - `storybuilder-core` - Story records, action stream, tag tables
//! - `storybuilder-loader` - Project tree reader and output writer
//! - `storybuilder-compiler` - Action compiler and instruction processor
//! - `storybuilder-tags` - Name-tag resolver
//! - `storybuilder-format` - Projectors, renderers and counting
//!
//! This crate adds configuration and the build orchestrator, and
//! re-exports the pieces a caller needs.
//!
//! # Example
//!
//! ```rust,no_run
//! use storybuilder::{Project, StorybuilderConfig, build_project, select_formats};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let project = Project::new("my-novel");
//! let config = StorybuilderConfig::load(project.root())?;
//! let summary = build_project(&project, &config, &select_formats(&[]))?;
//! println!("Wrote {} files", summary.written().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod build;
mod config;

pub use build::{BuildSummary, build_project, load_actions, load_resolver, select_formats};
pub use config::{BuildConfig, CONFIG_FILE, StorybuilderConfig};

pub use storybuilder_core::{Action, ActionsData, StoryData};
pub use storybuilder_error::{StorybuilderError, StorybuilderErrorKind, StorybuilderResult};
pub use storybuilder_format::{CountConfig, Format};
pub use storybuilder_loader::Project;
pub use storybuilder_tags::{TagConfig, TagResolver};
