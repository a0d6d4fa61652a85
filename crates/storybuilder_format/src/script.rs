//! Screenplay projection.

use crate::head::SceneHead;
use crate::layout::{Flow, Flowing, layout};
use crate::projector::{Format, Record, empty_input, tag_and_clean};
use crate::render::{self, SCRIPT_INDENT};
use serde::{Deserialize, Serialize};
use storybuilder_core::{Act, ActType, Action, ActionsData, Marker};
use storybuilder_error::ProjectionError;
use storybuilder_tags::TagResolver;
use tracing::{instrument, warn};

/// One unit of the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptRecord {
    /// Book title
    BookTitle(String),
    /// Chapter title
    ChapterTitle(String),
    /// Episode title
    EpisodeTitle(String),
    /// Scene title
    SceneTitle(String),
    /// Scene environment banner built from the scene head
    Spin(SceneHead),
    /// Author comment or `## ` sub-heading
    Comment(String),
    /// Spoken line
    Dialogue {
        /// Speaker
        subject: String,
        /// Spoken text
        text: String,
    },
    /// Inner monologue
    Monologue {
        /// Thinker
        subject: String,
        /// Thought text
        text: String,
    },
    /// Off-screen voice
    Voice {
        /// Speaker
        subject: String,
        /// Spoken text
        text: String,
    },
    /// Sound effect
    Se {
        /// Source
        subject: String,
        /// Effect description
        text: String,
    },
    /// Stage direction
    Action {
        /// Acting subject
        subject: String,
        /// Direction text
        text: String,
    },
    /// Free text, rendered verbatim
    Plain(String),
    /// Paragraph start (consumed by layout)
    ParagraphStart,
    /// Paragraph end (consumed by layout)
    ParagraphEnd,
    /// Line break
    Br,
    /// Leading indent
    Indent,
    /// End of a scene
    SceneEnd,
}

impl ScriptRecord {
    fn from_act(act: &Act) -> Self {
        let subject = act.subject().clone();
        let text = act.description().clone();
        match act.act_type() {
            ActType::Talk => ScriptRecord::Dialogue { subject, text },
            ActType::Think => ScriptRecord::Monologue { subject, text },
            ActType::Voice => ScriptRecord::Voice { subject, text },
            ActType::Occur => ScriptRecord::Se { subject, text },
            _ => ScriptRecord::Action { subject, text },
        }
    }

    fn is_body(&self) -> bool {
        matches!(
            self,
            ScriptRecord::Dialogue { .. }
                | ScriptRecord::Monologue { .. }
                | ScriptRecord::Voice { .. }
                | ScriptRecord::Se { .. }
                | ScriptRecord::Action { .. }
                | ScriptRecord::Plain(_)
                | ScriptRecord::Indent
                | ScriptRecord::Br
        )
    }

    fn render(&self) -> String {
        match self {
            ScriptRecord::BookTitle(t) => render::book_title(t),
            ScriptRecord::ChapterTitle(t) => render::chapter_title(t),
            ScriptRecord::EpisodeTitle(t) => render::episode_title(t),
            ScriptRecord::SceneTitle(t) => render::scene_title(t),
            ScriptRecord::Spin(head) => spin(head),
            ScriptRecord::Comment(c) => render::comment(c),
            ScriptRecord::Dialogue { subject, text } => {
                format!("{}{}", subject, render::talk(text))
            }
            ScriptRecord::Monologue { subject, text } => {
                format!("{}（Ｍ）{}", subject, render::think(text))
            }
            ScriptRecord::Voice { subject, text } => {
                format!("{}（Ｖ）{}", subject, render::talk(text))
            }
            ScriptRecord::Se { text, .. } => format!("ＳＥ　{}", text),
            ScriptRecord::Action { text, .. } | ScriptRecord::Plain(text) => text.clone(),
            ScriptRecord::Br => "\n".to_string(),
            ScriptRecord::Indent => SCRIPT_INDENT.to_string(),
            ScriptRecord::ParagraphStart
            | ScriptRecord::ParagraphEnd
            | ScriptRecord::SceneEnd => String::new(),
        }
    }
}

fn spin(head: &SceneHead) -> String {
    let mut line = format!("○{}", head.stage());
    if !head.time().is_empty() {
        line.push_str(&format!("（{}）", head.time()));
    }
    if !head.camera().is_empty() {
        line.push_str(&format!("　［{}］", head.camera()));
    }
    line.push_str("\n\n");
    line
}

impl Record for ScriptRecord {
    fn retag(self, resolver: &TagResolver) -> Self {
        let tag = |subject: String, text: String| {
            (resolver.subject(&subject), resolver.text(&subject, &text))
        };
        match self {
            ScriptRecord::BookTitle(t) => ScriptRecord::BookTitle(resolver.text("", &t)),
            ScriptRecord::ChapterTitle(t) => ScriptRecord::ChapterTitle(resolver.text("", &t)),
            ScriptRecord::EpisodeTitle(t) => ScriptRecord::EpisodeTitle(resolver.text("", &t)),
            ScriptRecord::SceneTitle(t) => ScriptRecord::SceneTitle(resolver.text("", &t)),
            ScriptRecord::Spin(head) => ScriptRecord::Spin(head.retag(resolver)),
            ScriptRecord::Plain(t) => ScriptRecord::Plain(resolver.text("", &t)),
            ScriptRecord::Dialogue { subject, text } => {
                let (subject, text) = tag(subject, text);
                ScriptRecord::Dialogue { subject, text }
            }
            ScriptRecord::Monologue { subject, text } => {
                let (subject, text) = tag(subject, text);
                ScriptRecord::Monologue { subject, text }
            }
            ScriptRecord::Voice { subject, text } => {
                let (subject, text) = tag(subject, text);
                ScriptRecord::Voice { subject, text }
            }
            ScriptRecord::Se { subject, text } => {
                let (subject, text) = tag(subject, text);
                ScriptRecord::Se { subject, text }
            }
            ScriptRecord::Action { subject, text } => {
                let (subject, text) = tag(subject, text);
                ScriptRecord::Action { subject, text }
            }
            other => other,
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            ScriptRecord::Comment(c) => c.trim().is_empty(),
            ScriptRecord::Dialogue { text, .. }
            | ScriptRecord::Monologue { text, .. }
            | ScriptRecord::Voice { text, .. }
            | ScriptRecord::Se { text, .. }
            | ScriptRecord::Action { text, .. }
            | ScriptRecord::Plain(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl Flowing for ScriptRecord {
    fn flow(&self) -> Flow {
        match self {
            ScriptRecord::BookTitle(_)
            | ScriptRecord::ChapterTitle(_)
            | ScriptRecord::EpisodeTitle(_)
            | ScriptRecord::SceneTitle(_)
            | ScriptRecord::Spin(_) => Flow::Title,
            ScriptRecord::Action { .. } => Flow::Body { indentable: true },
            ScriptRecord::Dialogue { .. }
            | ScriptRecord::Monologue { .. }
            | ScriptRecord::Voice { .. }
            | ScriptRecord::Se { .. }
            | ScriptRecord::Plain(_) => Flow::Body { indentable: false },
            ScriptRecord::ParagraphStart => Flow::ParagraphStart,
            ScriptRecord::ParagraphEnd => Flow::ParagraphEnd,
            ScriptRecord::Br => Flow::Break,
            ScriptRecord::SceneEnd => Flow::Boundary,
            ScriptRecord::Comment(_) | ScriptRecord::Indent => Flow::Passive,
        }
    }

    fn line_break() -> Self {
        ScriptRecord::Br
    }

    fn indent() -> Self {
        ScriptRecord::Indent
    }
}

fn base_pass(actions: &ActionsData) -> Vec<ScriptRecord> {
    let mut out = Vec::with_capacity(actions.len());
    let mut head = SceneHead::default();

    for action in actions {
        let marker = match action {
            Action::Act(act) => {
                out.push(ScriptRecord::from_act(act));
                continue;
            }
            Action::Marker(marker) => marker,
        };
        if head.update(marker) {
            continue;
        }
        let record = match marker {
            Marker::BookTitle(t) => ScriptRecord::BookTitle(t.clone()),
            Marker::ChapterTitle(t) => ScriptRecord::ChapterTitle(t.clone()),
            Marker::EpisodeTitle(t) => ScriptRecord::EpisodeTitle(t.clone()),
            Marker::SceneTitle(t) => ScriptRecord::SceneTitle(t.clone()),
            Marker::SceneStart => ScriptRecord::Spin(head.clone()),
            Marker::SceneEnd => ScriptRecord::SceneEnd,
            Marker::SceneHead(t) | Marker::Comment(t) => ScriptRecord::Comment(t.clone()),
            Marker::Text(t) => ScriptRecord::Plain(t.clone()),
            Marker::ParagraphStart => ScriptRecord::ParagraphStart,
            Marker::ParagraphEnd => ScriptRecord::ParagraphEnd,
            Marker::Br => ScriptRecord::Br,
            Marker::Instruction(instruction) => {
                warn!(name = %instruction.name(), "Unprocessed instruction in script input");
                continue;
            }
            other => {
                warn!(?other, "Unexpected marker in script input");
                continue;
            }
        };
        out.push(record);
    }
    out
}

/// Project the cleaned action stream into script records.
///
/// # Errors
///
/// Returns an error if the stream is empty or nothing survives
/// elimination.
#[instrument(skip_all, fields(actions = actions.len()))]
pub fn project_script(
    actions: &ActionsData,
    resolver: &TagResolver,
) -> Result<Vec<ScriptRecord>, ProjectionError> {
    if actions.is_empty() {
        return Err(empty_input(Format::Script));
    }
    let records = tag_and_clean(Format::Script, base_pass(actions), resolver)?;
    Ok(layout(records))
}

/// Render script records as Markdown.
pub fn render_script(records: &[ScriptRecord]) -> String {
    render::finish(records.iter().map(ScriptRecord::render))
}

/// Body text only, without titles, spins or comments, for counting.
pub fn script_body(records: &[ScriptRecord]) -> String {
    records
        .iter()
        .filter(|r| r.is_body())
        .map(ScriptRecord::render)
        .collect()
}
