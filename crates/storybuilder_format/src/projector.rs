//! Passes shared by every projector.

use serde::{Deserialize, Serialize};
use storybuilder_error::{ProjectionError, ProjectionErrorKind};
use storybuilder_tags::TagResolver;
use tracing::debug;

/// Output formats a build can produce.
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
pub enum Format {
    /// Titles and outlines grouped by element kind
    Outline,
    /// Six-part plot structure in manuscript order
    Plot,
    /// Screenplay
    Script,
    /// Prose
    Novel,
    /// Scene transition and inventory tables
    Info,
}

impl Format {
    /// Whether the format is projected from the compiled action stream
    /// rather than the story records.
    pub fn needs_actions(&self) -> bool {
        matches!(self, Format::Script | Format::Novel | Format::Info)
    }
}

/// A format-specific output record.
pub(crate) trait Record: Sized {
    /// Substitute name tags in every text field.
    fn retag(self, resolver: &TagResolver) -> Self;

    /// Whether this is a comment or body record with nothing to show.
    fn is_blank(&self) -> bool;
}

pub(crate) fn empty_input(format: Format) -> ProjectionError {
    ProjectionError::new(ProjectionErrorKind::EmptyInput(format.to_string()))
}

/// Tag-substitution pass followed by empty-record elimination.
///
/// # Errors
///
/// Returns an error if nothing survives elimination.
pub(crate) fn tag_and_clean<R: Record>(
    format: Format,
    records: Vec<R>,
    resolver: &TagResolver,
) -> Result<Vec<R>, ProjectionError> {
    let before = records.len();
    let cleaned: Vec<R> = records
        .into_iter()
        .map(|record| record.retag(resolver))
        .filter(|record| !record.is_blank())
        .collect();
    debug!(%format, before, after = cleaned.len(), "Tagged and cleaned records");

    if cleaned.is_empty() {
        return Err(ProjectionError::new(ProjectionErrorKind::EmptyOutput(
            format.to_string(),
        )));
    }
    Ok(cleaned)
}
