//! Novel prose projection.

use crate::layout::{Flow, Flowing, layout};
use crate::projector::{Format, Record, empty_input, tag_and_clean};
use crate::render::{self, NOVEL_INDENT};
use serde::{Deserialize, Serialize};
use storybuilder_core::{Act, ActType, Action, ActionsData, Marker};
use storybuilder_error::ProjectionError;
use storybuilder_tags::TagResolver;
use tracing::{instrument, warn};

/// One unit of the novel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NovelRecord {
    /// Book title
    BookTitle(String),
    /// Chapter title
    ChapterTitle(String),
    /// Episode title
    EpisodeTitle(String),
    /// Scene title
    SceneTitle(String),
    /// Author comment
    Comment(String),
    /// Narration
    Description {
        /// Acting subject
        subject: String,
        /// Prose
        text: String,
    },
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

impl NovelRecord {
    fn from_act(act: &Act) -> Self {
        let subject = act.subject().clone();
        let text = act.description().clone();
        match act.act_type() {
            ActType::Talk | ActType::Voice => NovelRecord::Dialogue { subject, text },
            ActType::Think => NovelRecord::Monologue { subject, text },
            _ => NovelRecord::Description { subject, text },
        }
    }

    fn is_body(&self) -> bool {
        matches!(
            self,
            NovelRecord::Description { .. }
                | NovelRecord::Dialogue { .. }
                | NovelRecord::Monologue { .. }
                | NovelRecord::Plain(_)
                | NovelRecord::Indent
                | NovelRecord::Br
        )
    }

    fn render(&self) -> String {
        match self {
            NovelRecord::BookTitle(t) => render::book_title(t),
            NovelRecord::ChapterTitle(t) => render::chapter_title(t),
            NovelRecord::EpisodeTitle(t) => render::episode_title(t),
            NovelRecord::SceneTitle(t) => render::scene_title(t),
            NovelRecord::Comment(c) => render::comment(c),
            NovelRecord::Description { text, .. } | NovelRecord::Plain(text) => text.clone(),
            NovelRecord::Dialogue { text, .. } => render::talk(text),
            NovelRecord::Monologue { text, .. } => render::think(text),
            NovelRecord::Br => "\n".to_string(),
            NovelRecord::Indent => NOVEL_INDENT.to_string(),
            NovelRecord::ParagraphStart | NovelRecord::ParagraphEnd | NovelRecord::SceneEnd => {
                String::new()
            }
        }
    }
}

impl Record for NovelRecord {
    fn retag(self, resolver: &TagResolver) -> Self {
        match self {
            NovelRecord::BookTitle(t) => NovelRecord::BookTitle(resolver.text("", &t)),
            NovelRecord::ChapterTitle(t) => NovelRecord::ChapterTitle(resolver.text("", &t)),
            NovelRecord::EpisodeTitle(t) => NovelRecord::EpisodeTitle(resolver.text("", &t)),
            NovelRecord::SceneTitle(t) => NovelRecord::SceneTitle(resolver.text("", &t)),
            NovelRecord::Plain(t) => NovelRecord::Plain(resolver.text("", &t)),
            NovelRecord::Description { subject, text } => NovelRecord::Description {
                text: resolver.text(&subject, &text),
                subject: resolver.subject(&subject),
            },
            NovelRecord::Dialogue { subject, text } => NovelRecord::Dialogue {
                text: resolver.text(&subject, &text),
                subject: resolver.subject(&subject),
            },
            NovelRecord::Monologue { subject, text } => NovelRecord::Monologue {
                text: resolver.text(&subject, &text),
                subject: resolver.subject(&subject),
            },
            other => other,
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            NovelRecord::Comment(c) => c.trim().is_empty(),
            NovelRecord::Description { text, .. }
            | NovelRecord::Dialogue { text, .. }
            | NovelRecord::Monologue { text, .. }
            | NovelRecord::Plain(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl Flowing for NovelRecord {
    fn flow(&self) -> Flow {
        match self {
            NovelRecord::BookTitle(_)
            | NovelRecord::ChapterTitle(_)
            | NovelRecord::EpisodeTitle(_)
            | NovelRecord::SceneTitle(_) => Flow::Title,
            NovelRecord::Description { .. } => Flow::Body { indentable: true },
            NovelRecord::Dialogue { .. } | NovelRecord::Monologue { .. } | NovelRecord::Plain(_) => {
                Flow::Body { indentable: false }
            }
            NovelRecord::ParagraphStart => Flow::ParagraphStart,
            NovelRecord::ParagraphEnd => Flow::ParagraphEnd,
            NovelRecord::Br => Flow::Break,
            NovelRecord::SceneEnd => Flow::Boundary,
            NovelRecord::Comment(_) | NovelRecord::Indent => Flow::Passive,
        }
    }

    fn line_break() -> Self {
        NovelRecord::Br
    }

    fn indent() -> Self {
        NovelRecord::Indent
    }
}

fn base_pass(actions: &ActionsData) -> Vec<NovelRecord> {
    let mut out = Vec::with_capacity(actions.len());
    for action in actions {
        let record = match action {
            Action::Act(act) => NovelRecord::from_act(act),
            Action::Marker(marker) => match marker {
                Marker::BookTitle(t) => NovelRecord::BookTitle(t.clone()),
                Marker::ChapterTitle(t) => NovelRecord::ChapterTitle(t.clone()),
                Marker::EpisodeTitle(t) => NovelRecord::EpisodeTitle(t.clone()),
                Marker::SceneTitle(t) => NovelRecord::SceneTitle(t.clone()),
                Marker::Comment(c) => NovelRecord::Comment(c.clone()),
                Marker::Text(t) => NovelRecord::Plain(t.clone()),
                Marker::ParagraphStart => NovelRecord::ParagraphStart,
                Marker::ParagraphEnd => NovelRecord::ParagraphEnd,
                Marker::Br => NovelRecord::Br,
                Marker::SceneEnd => NovelRecord::SceneEnd,
                Marker::Instruction(instruction) => {
                    warn!(name = %instruction.name(), "Unprocessed instruction in novel input");
                    continue;
                }
                Marker::SceneHead(_)
                | Marker::SceneCamera(_)
                | Marker::SceneStage(_)
                | Marker::SceneYear(_)
                | Marker::SceneDate(_)
                | Marker::SceneTime(_)
                | Marker::SceneStart => continue,
            },
        };
        out.push(record);
    }
    out
}

/// Project the cleaned action stream into novel records.
///
/// Runs the base, tag-substitution, empty-record elimination and
/// break-mode layout passes.
///
/// # Errors
///
/// Returns an error if the stream is empty or nothing survives
/// elimination.
#[instrument(skip_all, fields(actions = actions.len()))]
pub fn project_novel(
    actions: &ActionsData,
    resolver: &TagResolver,
) -> Result<Vec<NovelRecord>, ProjectionError> {
    if actions.is_empty() {
        return Err(empty_input(Format::Novel));
    }
    let records = tag_and_clean(Format::Novel, base_pass(actions), resolver)?;
    Ok(layout(records))
}

/// Render novel records as Markdown.
pub fn render_novel(records: &[NovelRecord]) -> String {
    render::finish(records.iter().map(NovelRecord::render))
}

/// Body text only, without titles or comments, for counting.
pub fn novel_body(records: &[NovelRecord]) -> String {
    records
        .iter()
        .filter(|r| r.is_body())
        .map(NovelRecord::render)
        .collect()
}
