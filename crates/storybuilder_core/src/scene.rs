//! Scene metadata and its carry-forward sentinels.

use serde::{Deserialize, Deserializer, Serialize};

/// One scene metadata field as written in front matter.
///
/// Sentinel tokens are recognised once, here, so downstream stages match
/// on variants instead of comparing raw strings.
///
/// # Examples
///
/// ```
/// use storybuilder_core::SceneValue;
///
/// assert_eq!(SceneValue::parse("同"), SceneValue::Same);
/// assert_eq!(SceneValue::parse("翌日"), SceneValue::NextDay);
/// assert_eq!(SceneValue::parse(" park "), SceneValue::Value("park".to_string()));
/// assert_eq!(SceneValue::parse(""), SceneValue::Empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SceneValue {
    /// Not set
    #[default]
    Empty,
    /// A literal value
    Value(String),
    /// Same as the previous scene
    Same,
    /// The day after the previous scene
    NextDay,
    /// A week after the previous scene
    NextWeek,
    /// A month after the previous scene
    NextMonth,
}

impl SceneValue {
    /// Classify a raw front-matter token.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" => SceneValue::Empty,
            "-" | "same" | "同" => SceneValue::Same,
            "next-day" | "翌日" => SceneValue::NextDay,
            "next-week" | "翌週" => SceneValue::NextWeek,
            "next-month" | "翌月" => SceneValue::NextMonth,
            other => SceneValue::Value(other.to_string()),
        }
    }

    /// Literal text, if this is a plain value.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            SceneValue::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for SceneValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        crate::scalar::text(deserializer).map(|raw| SceneValue::parse(&raw))
    }
}

/// The five scene metadata fields.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct SceneMeta {
    /// Point-of-view character
    #[serde(default)]
    camera: SceneValue,
    /// Location
    #[serde(default)]
    stage: SceneValue,
    /// Year
    #[serde(default)]
    year: SceneValue,
    /// Month/day
    #[serde(default)]
    date: SceneValue,
    /// Time of day
    #[serde(default)]
    time: SceneValue,
}

impl SceneMeta {
    /// Create scene metadata from parsed fields.
    pub fn new(
        camera: SceneValue,
        stage: SceneValue,
        year: SceneValue,
        date: SceneValue,
        time: SceneValue,
    ) -> Self {
        Self {
            camera,
            stage,
            year,
            date,
            time,
        }
    }

    /// Convenience constructor from raw tokens, parsing each one.
    pub fn parse(camera: &str, stage: &str, year: &str, date: &str, time: &str) -> Self {
        Self::new(
            SceneValue::parse(camera),
            SceneValue::parse(stage),
            SceneValue::parse(year),
            SceneValue::parse(date),
            SceneValue::parse(time),
        )
    }
}
