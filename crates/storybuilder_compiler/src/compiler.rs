//! Story records to action stream.

use crate::line::parse_line;
use crate::scene_meta::{ResolvedScene, resolve_scene};
use storybuilder_core::{
    Act, ActType, Action, ActionsData, Carry, ElementType, Marker, RawAction, StoryData,
    StoryRecord, Verb,
};
use storybuilder_error::{CompileError, CompileErrorKind, StorybuilderResult};
use tracing::{debug, instrument, warn};

/// Compile story records into the resolved action stream.
///
/// Runs [`convert_story`] followed by [`resolve_same`].
///
/// # Errors
///
/// Returns an error if there are no story records, the base conversion
/// yields nothing, or resolution leaves nothing.
#[instrument(skip_all, fields(records = story.len()))]
pub fn compile_actions(story: &StoryData) -> StorybuilderResult<ActionsData> {
    if story.is_empty() {
        return Err(CompileError::new(CompileErrorKind::NoStoryRecords).into());
    }

    let raw = convert_story(story);
    if raw.is_empty() {
        return Err(CompileError::new(CompileErrorKind::NoActions).into());
    }

    let resolved = resolve_same(raw);
    if resolved.is_empty() {
        return Err(CompileError::new(CompileErrorKind::NoResolvedActions).into());
    }

    debug!(actions = resolved.len(), "Compiled action stream");
    Ok(resolved)
}

/// First pass: title markers, scene metadata markers and raw body records.
///
/// Scene metadata sentinels are resolved here against the previous scene.
pub fn convert_story(story: &StoryData) -> Vec<RawAction> {
    let mut out = Vec::new();
    let mut previous = ResolvedScene::default();

    for record in story {
        let title = record.data().title().clone();
        match record.element() {
            ElementType::Book => out.push(RawAction::Marker(Marker::BookTitle(title))),
            ElementType::Chapter => out.push(RawAction::Marker(Marker::ChapterTitle(title))),
            ElementType::Episode => out.push(RawAction::Marker(Marker::EpisodeTitle(title))),
            ElementType::Scene => {
                previous = convert_scene(record, &previous, &mut out);
            }
        }
    }
    out
}

fn convert_scene(
    record: &StoryRecord,
    previous: &ResolvedScene,
    out: &mut Vec<RawAction>,
) -> ResolvedScene {
    let data = record.data();
    let scene = resolve_scene(data.scene(), previous);

    out.push(RawAction::Marker(Marker::SceneTitle(data.title().clone())));
    out.push(RawAction::Marker(Marker::SceneCamera(scene.camera().clone())));
    out.push(RawAction::Marker(Marker::SceneStage(scene.stage().clone())));
    out.push(RawAction::Marker(Marker::SceneYear(scene.year().clone())));
    out.push(RawAction::Marker(Marker::SceneDate(scene.date().clone())));
    out.push(RawAction::Marker(Marker::SceneTime(scene.time().clone())));
    out.push(RawAction::Marker(Marker::SceneStart));
    out.extend(data.markdown().iter().filter_map(|line| parse_line(line)));
    out.push(RawAction::Marker(Marker::SceneEnd));

    scene
}

/// Second pass: resolve same-as-previous verbs and fields.
///
/// The cache holds the last resolved act of the current scene and is
/// cleared at every scene start. A `Same` verb with nothing cached is
/// dropped. A `Same` subject or outline with nothing cached resolves to
/// an empty string.
pub fn resolve_same(raw: Vec<RawAction>) -> ActionsData {
    let mut cache: Option<Act> = None;
    let mut out = Vec::with_capacity(raw.len());

    for record in raw {
        let raw_act = match record {
            RawAction::Marker(marker) => {
                if marker == Marker::SceneStart {
                    cache = None;
                }
                out.push(Action::Marker(marker));
                continue;
            }
            RawAction::Act(raw_act) => raw_act,
        };

        let (verb, subject, outline, description, flags, note) = raw_act.into_parts();
        let is_same = verb == Verb::Same;
        let act_type: ActType = match (verb, &cache) {
            (Verb::Act(act_type), _) => act_type,
            (Verb::Same, Some(previous)) => *previous.act_type(),
            (Verb::Same, None) => {
                warn!(%description, "Same-as-previous action has no antecedent; dropping it");
                continue;
            }
        };

        let (prev_subject, prev_outline) = match &cache {
            Some(previous) => (previous.subject().as_str(), previous.outline().as_str()),
            None => {
                if subject == Carry::Same || outline == Carry::Same {
                    warn!(%description, "Same-as-previous field has no antecedent");
                }
                ("", "")
            }
        };

        // A SAME act without its own note keeps the antecedent's note.
        let note = match &cache {
            Some(previous) if is_same && note.is_empty() => previous.note().clone(),
            _ => note,
        };

        let act = Act::new(
            act_type,
            subject.resolve(prev_subject),
            outline.resolve(prev_outline),
            description,
            flags,
            note,
        );
        cache = Some(act.clone());
        out.push(Action::Act(act));
    }

    ActionsData::new(out)
}
