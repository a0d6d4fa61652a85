//! Action compiler for Storybuilder.
//!
//! Turns the ordered story records into the cleaned action stream that the
//! prose and script projectors consume:
//!
//! 1. [`compile_actions`] emits title and scene metadata markers plus one
//!    record per scene body line, then resolves same-as-previous fields.
//! 2. [`apply_instructions`] consumes `#! ` directives, emitting paragraph
//!    and break markers and applying per-scene aliases.
//!
//! # Example
//!
//! ```
//! use storybuilder_compiler::{apply_instructions, compile_actions};
//! use storybuilder_core::{ElementType, StoryData, StoryFields, StoryRecord};
//!
//! let scene = StoryFields::builder()
//!     .title("Park")
//!     .markdown(vec!["#! A T=taro".to_string(), "[T:talk:]Hi".to_string()])
//!     .build()
//!     .unwrap();
//! let story = StoryData::new(vec![StoryRecord::new(ElementType::Scene, "s1", scene)]);
//!
//! let actions = apply_instructions(compile_actions(&story).unwrap());
//! let talk = actions.iter().find_map(|a| a.as_act()).unwrap();
//! assert_eq!(talk.subject(), "taro");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compiler;
mod instruction;
mod line;
mod scene_meta;

pub use compiler::{compile_actions, convert_story, resolve_same};
pub use instruction::{Directive, apply_instructions};
pub use line::parse_line;
pub use scene_meta::{ResolvedScene, resolve_scene};
