//! The compiled action stream.
//!
//! A scene body compiles into a flat sequence of records. Structural
//! control markers and verb records are separate variants of one sum type
//! so neither carries fields that only make sense for the other.
//!
//! Compilation happens in two stages with two record types: [`RawAction`]
//! may still carry same-as-previous sentinels, [`Action`] never does.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Story verbs.
///
/// # Examples
///
/// ```
/// use storybuilder_core::ActType;
/// use std::str::FromStr;
///
/// assert_eq!(ActType::from_str("talk").unwrap(), ActType::Talk);
/// assert_eq!(ActType::from_str("T").unwrap(), ActType::Talk);
/// assert_eq!(ActType::Think.to_string(), "think");
/// assert!(ActType::from_str("dance").is_err());
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
pub enum ActType {
    /// Someone is present
    Be,
    /// Someone enters
    Come,
    /// Generic action
    Do,
    /// Something is taken out
    Draw,
    /// Exposition
    Explain,
    /// Someone leaves
    Go,
    /// Something is obtained
    Have,
    /// Someone learns something
    Know,
    /// Something becomes known
    Known,
    /// An event happens
    Occur,
    /// Something is placed
    Put,
    /// Someone recalls something
    Remember,
    /// Something is lost
    Rid,
    /// Dialogue
    #[strum(to_string = "talk", serialize = "t")]
    Talk,
    /// Inner monologue
    #[strum(to_string = "think", serialize = "th")]
    Think,
    /// Off-screen voice
    #[strum(to_string = "voice", serialize = "v")]
    Voice,
    /// Something is worn
    Wear,
}

/// Verb slot of a raw action line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    /// Same verb as the previous action
    Same,
    /// A concrete verb
    Act(ActType),
}

impl FromStr for Verb {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Verb::Act(ActType::Do)),
            "-" | "同" => Ok(Verb::Same),
            other if other.eq_ignore_ascii_case("same") => Ok(Verb::Same),
            other => ActType::from_str(other).map(Verb::Act),
        }
    }
}

/// A subject/outline slot of a raw action line.
///
/// # Examples
///
/// ```
/// use storybuilder_core::Carry;
///
/// assert_eq!(Carry::parse("same"), Carry::Same);
/// assert_eq!(Carry::parse("taro").resolve("hanako"), "taro");
/// assert_eq!(Carry::parse("-").resolve("hanako"), "hanako");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carry {
    /// Copy the field from the previous action
    Same,
    /// A literal value
    Value(String),
}

impl Carry {
    /// Classify a raw slot.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "-" | "同" => Carry::Same,
            other if other.eq_ignore_ascii_case("same") => Carry::Same,
            other => Carry::Value(other.to_string()),
        }
    }

    /// Resolve against the previous action's value.
    pub fn resolve(self, previous: &str) -> String {
        match self {
            Carry::Same => previous.to_string(),
            Carry::Value(v) => v,
        }
    }
}

/// An inline directive line (`#! NAME arg`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Instruction {
    /// Directive token
    name: String,
    /// Optional argument
    arg: Option<String>,
}

impl Instruction {
    /// Create an instruction.
    pub fn new(name: impl Into<String>, arg: Option<String>) -> Self {
        Self {
            name: name.into(),
            arg,
        }
    }
}

/// Structural control records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Book title
    BookTitle(String),
    /// Chapter title
    ChapterTitle(String),
    /// Episode title
    EpisodeTitle(String),
    /// Scene title
    SceneTitle(String),
    /// `## ` heading inside a scene body
    SceneHead(String),
    /// Scene point-of-view character
    SceneCamera(String),
    /// Scene location
    SceneStage(String),
    /// Scene year
    SceneYear(String),
    /// Scene month/day
    SceneDate(String),
    /// Scene time of day
    SceneTime(String),
    /// Start of a scene body
    SceneStart,
    /// End of a scene body
    SceneEnd,
    /// `# ` comment line
    Comment(String),
    /// Unprocessed `#! ` directive
    Instruction(Instruction),
    /// Explicit line break
    Br,
    /// Start of a paragraph
    ParagraphStart,
    /// End of a paragraph
    ParagraphEnd,
    /// Free text
    Text(String),
}

/// A verb record before same-as-previous resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RawAct {
    /// Verb, possibly `Same`
    verb: Verb,
    /// Subject slot
    subject: Carry,
    /// Outline slot
    outline: Carry,
    /// Prose description
    description: String,
    /// Extra colon-separated flags
    flags: Vec<String>,
    /// Trailing `# ` note
    note: String,
}

impl RawAct {
    /// Create a raw act.
    pub fn new(
        verb: Verb,
        subject: Carry,
        outline: Carry,
        description: impl Into<String>,
        flags: Vec<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            verb,
            subject,
            outline,
            description: description.into(),
            flags,
            note: note.into(),
        }
    }

    /// Split into owned parts.
    pub fn into_parts(self) -> (Verb, Carry, Carry, String, Vec<String>, String) {
        (
            self.verb,
            self.subject,
            self.outline,
            self.description,
            self.flags,
            self.note,
        )
    }
}

/// One record of the first compilation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawAction {
    /// Control marker
    Marker(Marker),
    /// Verb record
    Act(RawAct),
}

/// A resolved verb record.
///
/// # Examples
///
/// ```
/// use storybuilder_core::{Act, ActType};
///
/// let act = Act::builder()
///     .act_type(ActType::Talk)
///     .subject("taro")
///     .description("Hello there")
///     .build()
///     .unwrap();
/// assert_eq!(act.subject(), "taro");
/// assert!(act.outline().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct Act {
    /// Verb
    act_type: ActType,
    /// Acting subject (usually a tag key)
    #[builder(default)]
    subject: String,
    /// Short outline
    #[builder(default)]
    outline: String,
    /// Prose description
    #[builder(default)]
    description: String,
    /// Extra flags
    #[builder(default)]
    flags: Vec<String>,
    /// Trailing note
    #[builder(default)]
    note: String,
}

impl Act {
    /// Creates a new act builder.
    pub fn builder() -> ActBuilder {
        ActBuilder::default()
    }

    /// Create an act from resolved parts.
    pub fn new(
        act_type: ActType,
        subject: impl Into<String>,
        outline: impl Into<String>,
        description: impl Into<String>,
        flags: Vec<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            act_type,
            subject: subject.into(),
            outline: outline.into(),
            description: description.into(),
            flags,
            note: note.into(),
        }
    }

    /// Replace the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Apply `f` to outline, description and note.
    pub fn map_text(mut self, f: impl Fn(&str) -> String) -> Self {
        self.outline = f(&self.outline);
        self.description = f(&self.description);
        self.note = f(&self.note);
        self
    }
}

/// One record of the resolved action stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Control marker
    Marker(Marker),
    /// Verb record
    Act(Act),
}

impl Action {
    /// The act, if this is a verb record.
    pub fn as_act(&self) -> Option<&Act> {
        match self {
            Action::Act(act) => Some(act),
            Action::Marker(_) => None,
        }
    }

    /// The marker, if this is a control record.
    pub fn as_marker(&self) -> Option<&Marker> {
        match self {
            Action::Marker(marker) => Some(marker),
            Action::Act(_) => None,
        }
    }
}

/// Ordered resolved action stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionsData(Vec<Action>);

impl ActionsData {
    /// Wrap records already in stream order.
    pub fn new(actions: Vec<Action>) -> Self {
        Self(actions)
    }

    /// Iterate in stream order.
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.0.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the stream is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the record vector.
    pub fn into_inner(self) -> Vec<Action> {
        self.0
    }

    /// Serialise the stream as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl IntoIterator for ActionsData {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActionsData {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Action> for ActionsData {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
