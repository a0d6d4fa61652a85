//! Tests for the scene-info projector.

use std::collections::BTreeMap;
use storybuilder_compiler::{apply_instructions, compile_actions};
use storybuilder_core::{
    ActType, Action, ActionsData, ElementType, Marker, NameFields, NameKind, NameRecord, SceneMeta, StoryData,
    StoryFields, StoryRecord,
};
use storybuilder_format::{InfoRecord, Mark, SceneHead, SceneInfo, project_info, render_info};
use storybuilder_tags::{NameSources, TagConfig, TagResolver};

fn scene(name: &str, camera: &str, stage: &str, lines: &[&str]) -> StoryRecord {
    let fields = StoryFields::builder()
        .title(name)
        .scene(SceneMeta::parse(camera, stage, "", "", ""))
        .markdown(lines.iter().map(|l| l.to_string()).collect::<Vec<_>>())
        .build()
        .unwrap();
    StoryRecord::new(ElementType::Scene, name, fields)
}

fn compile(records: Vec<StoryRecord>) -> ActionsData {
    apply_instructions(compile_actions(&StoryData::new(records)).unwrap())
}

fn resolver() -> TagResolver {
    let person = |key: &str, name: &str| {
        NameRecord::new(
            NameKind::Person,
            key,
            NameFields::person(name, "", BTreeMap::new(), None),
        )
    };
    let sword = NameRecord::new(NameKind::Item, "sword", NameFields::named("Old Sword"));
    let sources = NameSources::new(
        vec![person("taro", "Taro"), person("hanako", "Hanako"), sword],
        BTreeMap::new(),
        BTreeMap::new(),
    );
    TagResolver::build(&sources, &TagConfig::default())
}

fn transitions(records: &[InfoRecord]) -> Vec<(SceneHead, [Mark; 5])> {
    records
        .iter()
        .filter_map(|r| match r {
            InfoRecord::Transition { head, marks } => Some((head.clone(), *marks)),
            _ => None,
        })
        .collect()
}

fn infos(records: &[InfoRecord]) -> Vec<SceneInfo> {
    records
        .iter()
        .filter_map(|r| match r {
            InfoRecord::Info(info) => Some(info.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_transition_marks_changed_fields() {
    let actions = compile(vec![
        scene("x", "cam1", "park", &["Walk."]),
        scene("y", "cam1", "street", &["Walk."]),
    ]);
    let records = project_info(&actions, &TagResolver::default()).unwrap();
    let transitions = transitions(&records);

    assert_eq!(transitions.len(), 2);
    let (_, first) = &transitions[0];
    assert_eq!(first[0], Mark::Changed);
    assert_eq!(first[2], Mark::Unchanged);

    let (head, second) = &transitions[1];
    assert_eq!(head.stage(), "street");
    assert_eq!(second[0], Mark::Unchanged);
    assert_eq!(second[1], Mark::Changed);
}

#[test]
fn test_scene_aggregate_collects_persons_items_events() {
    let actions = compile(vec![scene(
        "x",
        "taro",
        "park",
        &[
            "[taro:be:]",
            "[hanako:come:]Arrives",
            "[taro:have:sword]Picks it up",
            "[taro:have:sword]Again",
            "[hanako:rid:ring]Drops it",
            "[:occur:storm]",
            "[:occur:]Thunder",
            "[taro:go:]Leaves",
        ],
    )]);
    let records = project_info(&actions, &resolver()).unwrap();
    let info = &infos(&records)[0];

    assert_eq!(info.persons(), &vec!["Taro".to_string(), "Hanako".to_string()]);
    assert_eq!(info.entering(), &vec!["Hanako".to_string()]);
    assert_eq!(info.leaving(), &vec!["Taro".to_string()]);
    assert_eq!(info.gained(), &vec!["Old Sword".to_string()]);
    assert_eq!(info.lost(), &vec!["ring".to_string()]);
    assert_eq!(info.events(), &vec!["storm".to_string(), "Thunder".to_string()]);
}

#[test]
fn test_aggregate_resets_per_scene() {
    let actions = compile(vec![
        scene("x", "", "", &["[taro:come:]In"]),
        scene("y", "", "", &["[hanako:be:]Here"]),
    ]);
    let records = project_info(&actions, &resolver()).unwrap();
    let infos = infos(&records);

    assert_eq!(infos.len(), 2);
    assert!(infos[1].entering().is_empty());
    assert_eq!(infos[1].persons(), &vec!["Hanako".to_string()]);
}

#[test]
fn test_action_rows_prefer_outline() {
    let actions = compile(vec![scene("x", "", "", &["[taro:do:runs]Fast", "[taro:do:]Slow"])]);
    let records = project_info(&actions, &resolver()).unwrap();
    let rows: Vec<(ActType, String)> = records
        .iter()
        .filter_map(|r| match r {
            InfoRecord::Action { act_type, text, .. } => Some((*act_type, text.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            (ActType::Do, "runs".to_string()),
            (ActType::Do, "Slow".to_string())
        ]
    );
}

#[test]
fn test_render_table() {
    let actions = compile(vec![
        scene("x", "cam1", "park", &["Walk."]),
        scene("y", "cam1", "street", &["[taro:come:]In"]),
    ]);
    let text = render_info(&project_info(&actions, &resolver()).unwrap());

    assert!(text.contains("| camera | stage | year | date | time |\n"));
    assert!(text.contains("| … | ↓ | … | … | … |\n| cam1 | street |  |  |  |\n"));
    assert!(text.contains("- [come] Taro: In\n"));
    assert!(text.contains("- entering: Taro\n"));
}

#[test]
fn test_blank_rows_are_eliminated() {
    let mut stream = compile(vec![scene(
        "s1",
        "",
        "",
        &["[:do:]", "[taro:come:]Enters", "[:do:]  "],
    )])
    .into_inner();
    stream.insert(2, Action::Marker(Marker::Comment(String::new())));
    let records = project_info(&ActionsData::new(stream), &resolver()).unwrap();

    assert!(records.iter().all(|r| match r {
        InfoRecord::Comment(c) => !c.trim().is_empty(),
        InfoRecord::Action { subject, text, .. } => {
            !(subject.trim().is_empty() && text.trim().is_empty())
        }
        _ => true,
    }));
    let rows: Vec<_> = records
        .iter()
        .filter(|r| matches!(r, InfoRecord::Action { .. }))
        .collect();
    assert_eq!(rows.len(), 1);
}
