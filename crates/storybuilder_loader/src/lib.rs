//! Project tree reader and output writer for Storybuilder.
//!
//! Everything the compilation pipeline needs from disk is read here, once,
//! before compilation starts:
//!
//! - **Story records**: book/chapter/episode/scene files in the order given
//!   by `order.yml`
//! - **Reference records**: persons, stages, items, words, events and times
//! - **Name tables**: flat `mobs.yml` and `fixtures.yml` mappings
//!
//! Element files are Markdown with an optional YAML front-matter block.
//! The body after the block is exposed as the `markdown` field, one entry
//! per line.
//!
//! # Example
//!
//! ```rust,no_run
//! use storybuilder_loader::Project;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let project = Project::new("my-novel");
//! let story = project.load_story()?;
//! println!("Loaded {} records", story.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod front_matter;
mod order;
mod project;
mod writer;

pub use front_matter::{MARKDOWN_KEY, parse_front_matter};
pub use order::{OrderEntry, parse_order};
pub use project::{FIXTURES_FILE, MOBS_FILE, ORDER_FILE, Project};
pub use writer::write_output;
