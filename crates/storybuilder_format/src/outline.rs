//! Outline and plot projections, read straight from the story records.

use crate::projector::{Format, Record, empty_input, tag_and_clean};
use crate::render;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storybuilder_core::{ElementType, PlotFields, StoryData};
use storybuilder_error::ProjectionError;
use storybuilder_tags::TagResolver;
use tracing::instrument;

/// Title and outline of one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OutlineRecord {
    /// Element kind
    element: ElementType,
    /// Title
    title: String,
    /// One-paragraph outline
    outline: String,
}

impl Record for OutlineRecord {
    fn retag(self, resolver: &TagResolver) -> Self {
        Self {
            title: resolver.text("", &self.title),
            outline: resolver.text("", &self.outline),
            ..self
        }
    }

    fn is_blank(&self) -> bool {
        false
    }
}

/// Plot structure of one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PlotRecord {
    /// Element kind
    element: ElementType,
    /// Title
    title: String,
    /// Six-part plot
    plot: PlotFields,
}

impl Record for PlotRecord {
    fn retag(self, resolver: &TagResolver) -> Self {
        let parts = self.plot.parts().map(|(_, text)| resolver.text("", text));
        Self {
            title: resolver.text("", &self.title),
            plot: PlotFields::new(parts.each_ref().map(String::as_str)),
            ..self
        }
    }

    fn is_blank(&self) -> bool {
        false
    }
}

fn group_label(element: ElementType) -> &'static str {
    match element {
        ElementType::Book => "Book",
        ElementType::Chapter => "Chapters",
        ElementType::Episode => "Episodes",
        ElementType::Scene => "Scenes",
    }
}

fn heading(element: ElementType, title: &str) -> String {
    match element {
        ElementType::Book => render::book_title(title),
        ElementType::Chapter => render::chapter_title(title),
        ElementType::Episode => render::episode_title(title),
        ElementType::Scene => render::scene_title(title),
    }
}

/// Titles and outlines grouped book, chapters, episodes, scenes.
///
/// Manuscript order is kept within each group.
///
/// # Errors
///
/// Returns an error if there are no story records.
#[instrument(skip_all, fields(records = story.len()))]
pub fn project_outline(
    story: &StoryData,
    resolver: &TagResolver,
) -> Result<Vec<OutlineRecord>, ProjectionError> {
    if story.is_empty() {
        return Err(empty_input(Format::Outline));
    }
    let mut records: Vec<OutlineRecord> = story
        .iter()
        .map(|r| OutlineRecord {
            element: *r.element(),
            title: r.data().title().clone(),
            outline: r.data().outline().clone(),
        })
        .collect();
    records.sort_by_key(|r| r.element);
    tag_and_clean(Format::Outline, records, resolver)
}

/// Render outline records as Markdown.
pub fn render_outline(records: &[OutlineRecord]) -> String {
    let mut parts = Vec::with_capacity(records.len() + 4);
    let mut group = None;
    for record in records {
        if group != Some(record.element) {
            group = Some(record.element);
            parts.push(render::chapter_title(group_label(record.element)));
        }
        if record.outline.trim().is_empty() {
            parts.push(format!("- **{}**\n", record.title));
        } else {
            parts.push(format!("- **{}**: {}\n", record.title, record.outline.trim()));
        }
    }
    render::finish(parts)
}

/// Plot structure of every record in manuscript order.
///
/// # Errors
///
/// Returns an error if there are no story records.
#[instrument(skip_all, fields(records = story.len()))]
pub fn project_plot(
    story: &StoryData,
    resolver: &TagResolver,
) -> Result<Vec<PlotRecord>, ProjectionError> {
    if story.is_empty() {
        return Err(empty_input(Format::Plot));
    }
    let records = story
        .iter()
        .map(|r| PlotRecord {
            element: *r.element(),
            title: r.data().title().clone(),
            plot: r.data().plot().clone(),
        })
        .collect();
    tag_and_clean(Format::Plot, records, resolver)
}

/// Render plot records as Markdown. Blank plot parts are omitted.
pub fn render_plot(records: &[PlotRecord]) -> String {
    let mut parts = Vec::with_capacity(records.len() * 4);
    for record in records {
        parts.push(heading(record.element, &record.title));
        for (label, text) in record.plot.parts() {
            if !text.trim().is_empty() {
                parts.push(format!("- {}: {}\n", label, text.trim()));
            }
        }
    }
    render::finish(parts)
}
