//! Story records in manuscript order.

use crate::{ElementType, SceneMeta};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Six-part plot structure attached to a book, chapter, episode or scene.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct PlotFields {
    /// Setup
    #[serde(default, deserialize_with = "crate::scalar::text")]
    setup: String,
    /// First turning point
    #[serde(default, deserialize_with = "crate::scalar::text")]
    tp1: String,
    /// Development
    #[serde(default, deserialize_with = "crate::scalar::text")]
    develop: String,
    /// Second turning point
    #[serde(default, deserialize_with = "crate::scalar::text")]
    tp2: String,
    /// Climax
    #[serde(default, deserialize_with = "crate::scalar::text")]
    climax: String,
    /// Resolution
    #[serde(default, deserialize_with = "crate::scalar::text")]
    resolve: String,
}

impl PlotFields {
    /// Create plot fields in setup/tp1/develop/tp2/climax/resolve order.
    pub fn new(parts: [&str; 6]) -> Self {
        let [setup, tp1, develop, tp2, climax, resolve] = parts.map(str::to_string);
        Self {
            setup,
            tp1,
            develop,
            tp2,
            climax,
            resolve,
        }
    }

    /// Labelled parts in structural order.
    pub fn parts(&self) -> [(&'static str, &str); 6] {
        [
            ("setup", &self.setup),
            ("tp1", &self.tp1),
            ("develop", &self.develop),
            ("tp2", &self.tp2),
            ("climax", &self.climax),
            ("resolve", &self.resolve),
        ]
    }

    /// Whether every part is blank.
    pub fn is_empty(&self) -> bool {
        self.parts().iter().all(|(_, text)| text.trim().is_empty())
    }
}

/// Front-matter fields plus the markdown body of one element file.
///
/// # Examples
///
/// ```
/// use storybuilder_core::StoryFields;
///
/// let fields = StoryFields::builder()
///     .title("Opening")
///     .markdown(vec!["[taro:talk:]Hello".to_string()])
///     .build()
///     .unwrap();
/// assert_eq!(fields.title(), "Opening");
/// assert_eq!(fields.markdown().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into), default)]
pub struct StoryFields {
    /// Title
    #[serde(default, deserialize_with = "crate::scalar::text")]
    title: String,
    /// One-paragraph outline
    #[serde(default, deserialize_with = "crate::scalar::text")]
    outline: String,
    /// Plot structure
    #[serde(default)]
    plot: PlotFields,
    /// Scene metadata (unused for non-scene elements)
    #[serde(flatten)]
    scene: SceneMeta,
    /// Body lines, collected from the text after the front matter
    #[serde(default, deserialize_with = "crate::scalar::lines")]
    markdown: Vec<String>,
}

impl StoryFields {
    /// Creates a new fields builder.
    pub fn builder() -> StoryFieldsBuilder {
        StoryFieldsBuilder::default()
    }
}

/// One book/chapter/episode/scene file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StoryRecord {
    /// Element kind
    element: ElementType,
    /// File stem
    filename: String,
    /// Parsed contents
    data: StoryFields,
}

impl StoryRecord {
    /// Create a record.
    pub fn new(element: ElementType, filename: impl Into<String>, data: StoryFields) -> Self {
        Self {
            element,
            filename: filename.into(),
            data,
        }
    }
}

/// Ordered story records, exactly as serialised from the order manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryData(Vec<StoryRecord>);

impl StoryData {
    /// Wrap records already in manuscript order.
    pub fn new(records: Vec<StoryRecord>) -> Self {
        Self(records)
    }

    /// Iterate in manuscript order.
    pub fn iter(&self) -> std::slice::Iter<'_, StoryRecord> {
        self.0.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records of one element kind, in manuscript order.
    pub fn of_kind(&self, element: ElementType) -> impl Iterator<Item = &StoryRecord> {
        self.0.iter().filter(move |r| *r.element() == element)
    }
}

impl<'a> IntoIterator for &'a StoryData {
    type Item = &'a StoryRecord;
    type IntoIter = std::slice::Iter<'a, StoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<StoryRecord> for StoryData {
    fn from_iter<I: IntoIterator<Item = StoryRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
