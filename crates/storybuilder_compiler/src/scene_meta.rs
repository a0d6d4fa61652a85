//! Scene metadata carry-forward.

use chrono::{Datelike, Days, Months, NaiveDate};
use derive_getters::Getters;
use storybuilder_core::{SceneMeta, SceneValue};
use tracing::warn;

/// Scene metadata with every sentinel replaced by a concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Getters)]
pub struct ResolvedScene {
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

impl ResolvedScene {
    /// Create resolved metadata from literal values.
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
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Day,
    Week,
    Month,
}

/// Resolve a scene's metadata against the previous scene's resolved values.
///
/// `Same` copies the previous value. The next-day/week/month sentinels on
/// the date field advance the previous year and date as a calendar date,
/// rolling the year over when the year field is also `Same` or empty.
///
/// # Examples
///
/// ```
/// use storybuilder_compiler::{ResolvedScene, resolve_scene};
/// use storybuilder_core::SceneMeta;
///
/// let previous = ResolvedScene::new("taro", "park", "2020", "12/31", "night");
/// let meta = SceneMeta::parse("-", "street", "-", "翌日", "morning");
/// let resolved = resolve_scene(&meta, &previous);
///
/// assert_eq!(resolved.camera(), "taro");
/// assert_eq!(resolved.stage(), "street");
/// assert_eq!(resolved.year(), "2021");
/// assert_eq!(resolved.date(), "1/1");
/// ```
pub fn resolve_scene(meta: &SceneMeta, previous: &ResolvedScene) -> ResolvedScene {
    let mut year = resolve_plain("year", meta.year(), &previous.year);
    let date = match meta.date() {
        SceneValue::NextDay => advance(previous, Step::Day, meta.year(), &mut year),
        SceneValue::NextWeek => advance(previous, Step::Week, meta.year(), &mut year),
        SceneValue::NextMonth => advance(previous, Step::Month, meta.year(), &mut year),
        other => resolve_plain("date", other, &previous.date),
    };

    ResolvedScene {
        camera: resolve_plain("camera", meta.camera(), &previous.camera),
        stage: resolve_plain("stage", meta.stage(), &previous.stage),
        year,
        date,
        time: resolve_plain("time", meta.time(), &previous.time),
    }
}

fn resolve_plain(field: &str, value: &SceneValue, previous: &str) -> String {
    match value {
        SceneValue::Empty => String::new(),
        SceneValue::Value(v) => v.clone(),
        SceneValue::Same => previous.to_string(),
        SceneValue::NextDay | SceneValue::NextWeek | SceneValue::NextMonth => {
            warn!(field, ?value, "Relative date marker on a non-date field; using previous value");
            previous.to_string()
        }
    }
}

fn advance(
    previous: &ResolvedScene,
    step: Step,
    year_field: &SceneValue,
    year: &mut String,
) -> String {
    let Some(base) = parse_date(&previous.year, &previous.date) else {
        warn!(
            year = %previous.year,
            date = %previous.date,
            ?step,
            "Previous scene date is not a calendar date; keeping it"
        );
        return previous.date.clone();
    };

    let next = match step {
        Step::Day => base.checked_add_days(Days::new(1)),
        Step::Week => base.checked_add_days(Days::new(7)),
        Step::Month => base.checked_add_months(Months::new(1)),
    };
    let Some(next) = next else {
        warn!(?step, "Date arithmetic overflowed; keeping previous date");
        return previous.date.clone();
    };

    if next.year() != base.year() && matches!(year_field, SceneValue::Same | SceneValue::Empty) {
        *year = next.year().to_string();
    }
    format!("{}/{}", next.month(), next.day())
}

fn parse_date(year: &str, date: &str) -> Option<NaiveDate> {
    let year: i32 = year.trim().parse().ok()?;
    let (month, day) = date.trim().split_once('/')?;
    NaiveDate::from_ymd_opt(year, month.trim().parse().ok()?, day.trim().parse().ok()?)
}
