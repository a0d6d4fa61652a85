//! Scene-info projection: transition tables and per-scene inventories.

use crate::head::{Mark, SceneHead, transition_marks};
use crate::projector::{Format, Record, empty_input, tag_and_clean};
use crate::render;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storybuilder_core::{Act, ActType, Action, ActionsData, Marker};
use storybuilder_error::ProjectionError;
use storybuilder_tags::TagResolver;
use tracing::{instrument, warn};

/// What happened in one scene, flushed at scene end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SceneInfo {
    /// Persons present
    persons: Vec<String>,
    /// Persons entering
    entering: Vec<String>,
    /// Persons leaving
    leaving: Vec<String>,
    /// Items obtained or worn
    gained: Vec<String>,
    /// Items lost
    lost: Vec<String>,
    /// Items put down
    placed: Vec<String>,
    /// Items taken out
    removed: Vec<String>,
    /// Events
    events: Vec<String>,
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

impl SceneInfo {
    fn record(&mut self, act: &Act, resolver: &TagResolver) {
        let subject = act.subject().as_str();
        let outline = act.outline().as_str();
        if resolver.is_person(subject) {
            push_unique(&mut self.persons, subject);
        }
        match act.act_type() {
            ActType::Be => push_unique(&mut self.persons, subject),
            ActType::Come => push_unique(&mut self.entering, subject),
            ActType::Go => push_unique(&mut self.leaving, subject),
            ActType::Have | ActType::Wear => push_unique(&mut self.gained, outline),
            ActType::Rid => push_unique(&mut self.lost, outline),
            ActType::Put => push_unique(&mut self.placed, outline),
            ActType::Draw => push_unique(&mut self.removed, outline),
            ActType::Occur => {
                let event = if outline.trim().is_empty() {
                    act.description().as_str()
                } else {
                    outline
                };
                push_unique(&mut self.events, event);
            }
            _ => {}
        }
    }

    /// Labelled lists in render order.
    pub fn sections(&self) -> [(&'static str, &[String]); 8] {
        [
            ("persons", self.persons.as_slice()),
            ("entering", self.entering.as_slice()),
            ("leaving", self.leaving.as_slice()),
            ("gained", self.gained.as_slice()),
            ("lost", self.lost.as_slice()),
            ("placed", self.placed.as_slice()),
            ("removed", self.removed.as_slice()),
            ("events", self.events.as_slice()),
        ]
    }

    fn retag(self, resolver: &TagResolver) -> Self {
        let names = |list: Vec<String>| -> Vec<String> {
            let mut out = Vec::with_capacity(list.len());
            for key in list {
                push_unique(&mut out, &resolver.subject(&key));
            }
            out
        };
        Self {
            persons: names(self.persons),
            entering: names(self.entering),
            leaving: names(self.leaving),
            gained: names(self.gained),
            lost: names(self.lost),
            placed: names(self.placed),
            removed: names(self.removed),
            events: names(self.events),
        }
    }
}

/// One unit of the scene-info report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfoRecord {
    /// Book title
    BookTitle(String),
    /// Chapter title
    ChapterTitle(String),
    /// Episode title
    EpisodeTitle(String),
    /// Scene title
    SceneTitle(String),
    /// Scene head with per-field marks against the previous scene
    Transition {
        /// Current scene head
        head: SceneHead,
        /// Camera, stage, year, date, time marks
        marks: [Mark; 5],
    },
    /// Author comment or `## ` sub-heading
    Comment(String),
    /// One act
    Action {
        /// Verb
        act_type: ActType,
        /// Acting subject
        subject: String,
        /// Outline, falling back to the description
        text: String,
    },
    /// Scene aggregate
    Info(SceneInfo),
}

impl Record for InfoRecord {
    fn retag(self, resolver: &TagResolver) -> Self {
        match self {
            InfoRecord::BookTitle(t) => InfoRecord::BookTitle(resolver.text("", &t)),
            InfoRecord::ChapterTitle(t) => InfoRecord::ChapterTitle(resolver.text("", &t)),
            InfoRecord::EpisodeTitle(t) => InfoRecord::EpisodeTitle(resolver.text("", &t)),
            InfoRecord::SceneTitle(t) => InfoRecord::SceneTitle(resolver.text("", &t)),
            InfoRecord::Transition { head, marks } => InfoRecord::Transition {
                head: head.retag(resolver),
                marks,
            },
            InfoRecord::Action {
                act_type,
                subject,
                text,
            } => InfoRecord::Action {
                act_type,
                text: resolver.text(&subject, &text),
                subject: resolver.subject(&subject),
            },
            InfoRecord::Info(info) => InfoRecord::Info(info.retag(resolver)),
            other => other,
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            InfoRecord::Comment(c) => c.trim().is_empty(),
            InfoRecord::Action { subject, text, .. } => {
                subject.trim().is_empty() && text.trim().is_empty()
            }
            _ => false,
        }
    }
}

impl InfoRecord {
    fn render(&self) -> String {
        match self {
            InfoRecord::BookTitle(t) => render::book_title(t),
            InfoRecord::ChapterTitle(t) => render::chapter_title(t),
            InfoRecord::EpisodeTitle(t) => render::episode_title(t),
            InfoRecord::SceneTitle(t) => render::scene_title(t),
            InfoRecord::Transition { head, marks } => {
                let marks: Vec<String> = marks.iter().map(Mark::to_string).collect();
                format!(
                    "| camera | stage | year | date | time |\n\
                     | --- | --- | --- | --- | --- |\n\
                     | {} |\n\
                     | {} |\n\n",
                    marks.join(" | "),
                    head.fields().join(" | ")
                )
            }
            InfoRecord::Comment(c) => render::comment(c),
            InfoRecord::Action {
                act_type,
                subject,
                text,
            } => format!("- [{}] {}: {}\n", act_type, subject, text),
            InfoRecord::Info(info) => {
                let mut out = String::from("\n");
                for (label, items) in info.sections() {
                    if !items.is_empty() {
                        out.push_str(&format!("- {}: {}\n", label, items.join(", ")));
                    }
                }
                out
            }
        }
    }
}

fn base_pass(actions: &ActionsData, resolver: &TagResolver) -> Vec<InfoRecord> {
    let mut out = Vec::with_capacity(actions.len());
    let mut head = SceneHead::default();
    let mut previous = SceneHead::default();
    let mut info = SceneInfo::default();

    for action in actions {
        let marker = match action {
            Action::Act(act) => {
                info.record(act, resolver);
                let text = if act.outline().trim().is_empty() {
                    act.description()
                } else {
                    act.outline()
                };
                out.push(InfoRecord::Action {
                    act_type: *act.act_type(),
                    subject: act.subject().clone(),
                    text: text.clone(),
                });
                continue;
            }
            Action::Marker(marker) => marker,
        };
        if head.update(marker) {
            continue;
        }
        match marker {
            Marker::BookTitle(t) => out.push(InfoRecord::BookTitle(t.clone())),
            Marker::ChapterTitle(t) => out.push(InfoRecord::ChapterTitle(t.clone())),
            Marker::EpisodeTitle(t) => out.push(InfoRecord::EpisodeTitle(t.clone())),
            Marker::SceneTitle(t) => out.push(InfoRecord::SceneTitle(t.clone())),
            Marker::SceneStart => {
                out.push(InfoRecord::Transition {
                    head: head.clone(),
                    marks: transition_marks(&previous, &head),
                });
                previous = head.clone();
                info = SceneInfo::default();
            }
            Marker::SceneEnd => out.push(InfoRecord::Info(std::mem::take(&mut info))),
            Marker::SceneHead(t) | Marker::Comment(t) => {
                out.push(InfoRecord::Comment(t.clone()));
            }
            Marker::Instruction(instruction) => {
                warn!(name = %instruction.name(), "Unprocessed instruction in info input");
            }
            _ => {}
        }
    }
    out
}

/// Project the cleaned action stream into scene-info records.
///
/// Each scene start yields a transition record comparing camera, stage,
/// year, date and time with the previous scene (the first scene compares
/// against an empty head). Each scene end yields the scene's aggregate.
///
/// # Errors
///
/// Returns an error if the stream is empty or nothing survives
/// elimination.
#[instrument(skip_all, fields(actions = actions.len()))]
pub fn project_info(
    actions: &ActionsData,
    resolver: &TagResolver,
) -> Result<Vec<InfoRecord>, ProjectionError> {
    if actions.is_empty() {
        return Err(empty_input(Format::Info));
    }
    tag_and_clean(Format::Info, base_pass(actions, resolver), resolver)
}

/// Render scene-info records as Markdown.
pub fn render_info(records: &[InfoRecord]) -> String {
    render::finish(records.iter().map(InfoRecord::render))
}
