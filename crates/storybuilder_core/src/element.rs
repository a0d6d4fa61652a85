//! Document kinds found in a story project.

use serde::{Deserialize, Serialize};

/// Manuscript element kinds, in nesting order.
///
/// The derived ordering is the fixed outline grouping order.
///
/// # Examples
///
/// ```
/// use storybuilder_core::ElementType;
/// use std::str::FromStr;
///
/// assert_eq!(ElementType::from_str("scene").unwrap(), ElementType::Scene);
/// assert!(ElementType::Book < ElementType::Chapter);
/// assert_eq!(ElementType::Episode.to_string(), "episode");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// The whole book
    Book,
    /// A chapter
    Chapter,
    /// An episode inside a chapter
    Episode,
    /// A scene inside an episode
    Scene,
}

impl ElementType {
    /// Directory holding files of this kind, relative to the project root.
    ///
    /// The book lives directly in the project root.
    pub fn dir(&self) -> Option<&'static str> {
        match self {
            ElementType::Book => None,
            ElementType::Chapter => Some("chapters"),
            ElementType::Episode => Some("episodes"),
            ElementType::Scene => Some("scenes"),
        }
    }
}

/// Reference material kinds that feed the name-tag tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum NameKind {
    /// Characters
    Person,
    /// Locations
    Stage,
    /// Objects
    Item,
    /// Glossary words
    Word,
    /// Story events
    Event,
    /// Named times of day
    Time,
}

impl NameKind {
    /// Directory holding files of this kind.
    pub fn dir(&self) -> &'static str {
        match self {
            NameKind::Person => "persons",
            NameKind::Stage => "stages",
            NameKind::Item => "items",
            NameKind::Word => "words",
            NameKind::Event => "events",
            NameKind::Time => "times",
        }
    }

    /// Kind-specific tag prefix, if this kind registers prefixed keys.
    pub fn tag_prefix(&self) -> Option<&'static str> {
        match self {
            NameKind::Person => Some("n_"),
            NameKind::Stage => Some("t_"),
            NameKind::Item => Some("i_"),
            NameKind::Word => Some("w_"),
            NameKind::Event => Some("e_"),
            NameKind::Time => None,
        }
    }
}
