//! Current scene metadata and scene-transition marks.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storybuilder_core::Marker;
use storybuilder_tags::TagResolver;

/// Camera, stage, year, date and time of one scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct SceneHead {
    /// Point-of-view character
    camera: String,
    /// Location
    stage: String,
    /// Year
    year: String,
    /// Month/day
    date: String,
    /// Time of day
    time: String,
}

impl SceneHead {
    /// Create a head from literal values.
    pub fn new(
        camera: impl Into<String>,
        stage: impl Into<String>,
        year: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            camera: camera.into(),
            stage: stage.into(),
            year: year.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    /// Fields in table order.
    pub fn fields(&self) -> [&str; 5] {
        [&self.camera, &self.stage, &self.year, &self.date, &self.time]
    }

    /// Record a scene metadata marker. Returns false for any other marker.
    pub(crate) fn update(&mut self, marker: &Marker) -> bool {
        let slot = match marker {
            Marker::SceneCamera(v) => (&mut self.camera, v),
            Marker::SceneStage(v) => (&mut self.stage, v),
            Marker::SceneYear(v) => (&mut self.year, v),
            Marker::SceneDate(v) => (&mut self.date, v),
            Marker::SceneTime(v) => (&mut self.time, v),
            _ => return false,
        };
        slot.0.clone_from(slot.1);
        true
    }

    /// Resolve camera, stage and time keys to display names.
    pub(crate) fn retag(self, resolver: &TagResolver) -> Self {
        Self {
            camera: resolver.subject(&self.camera),
            stage: resolver.subject(&self.stage),
            time: resolver.subject(&self.time),
            ..self
        }
    }
}

/// Whether a scene-head field differs from the previous scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// The field changed
    #[strum(to_string = "↓")]
    Changed,
    /// The field is the same as before
    #[strum(to_string = "…")]
    Unchanged,
}

/// Per-field transition marks between two scene heads.
///
/// # Examples
///
/// ```
/// use storybuilder_format::{Mark, SceneHead, transition_marks};
///
/// let x = SceneHead::new("cam1", "park", "", "", "");
/// let y = SceneHead::new("cam1", "street", "", "", "");
/// let marks = transition_marks(&x, &y);
/// assert_eq!(marks[0], Mark::Unchanged);
/// assert_eq!(marks[1], Mark::Changed);
/// ```
pub fn transition_marks(previous: &SceneHead, current: &SceneHead) -> [Mark; 5] {
    let before = previous.fields();
    let after = current.fields();
    std::array::from_fn(|i| {
        if before[i] == after[i] {
            Mark::Unchanged
        } else {
            Mark::Changed
        }
    })
}
