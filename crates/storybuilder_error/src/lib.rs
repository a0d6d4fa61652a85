//! Error types for Storybuilder.
//!
//! This crate provides the error types used across the Storybuilder workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Only missing-data conditions are errors. Unrecognised tags and absent
//! lookup keys are logged and skipped by the pipeline instead.
//!
//! # Examples
//!
//! ```
//! use storybuilder_error::{CompileError, CompileErrorKind, StorybuilderResult};
//!
//! fn compile() -> StorybuilderResult<Vec<String>> {
//!     Err(CompileError::new(CompileErrorKind::NoStoryRecords))?
//! }
//!
//! assert!(compile().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compile;
mod config;
mod error;
mod loader;
mod output;
mod projection;

pub use compile::{CompileError, CompileErrorKind};
pub use config::ConfigError;
pub use error::{StorybuilderError, StorybuilderErrorKind, StorybuilderResult};
pub use loader::{LoaderError, LoaderErrorKind};
pub use output::{OutputError, OutputErrorKind};
pub use projection::{ProjectionError, ProjectionErrorKind};
