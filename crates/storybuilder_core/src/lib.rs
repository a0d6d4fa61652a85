//! Core data types for the Storybuilder manuscript compiler.
//!
//! This crate provides the types shared by every pipeline stage: the story
//! records read from the project tree, the compiled action stream, and the
//! name-tag tables used for text substitution.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod element;
mod names;
mod scalar;
mod scene;
mod story;
mod tags;

pub use action::{
    Act, ActType, Action, ActionsData, Carry, Instruction, Marker, RawAct, RawAction, Verb,
};
pub use element::{ElementType, NameKind};
pub use names::{NameFields, NameRecord};
pub use scene::{SceneMeta, SceneValue};
pub use story::{PlotFields, StoryData, StoryFields, StoryFieldsBuilder, StoryRecord};
pub use tags::{CallingMap, TagMap, translate};
