//! Tests for action compilation and instruction processing.

use storybuilder_compiler::{apply_instructions, compile_actions, convert_story, resolve_same};
use storybuilder_core::{
    Act, ActType, Action, Carry, ElementType, Marker, RawAct, RawAction, SceneMeta, StoryData,
    StoryFields, StoryRecord, Verb,
};
use storybuilder_error::{CompileErrorKind, StorybuilderErrorKind};

fn scene(name: &str, lines: &[&str]) -> StoryRecord {
    let fields = StoryFields::builder()
        .title(format!("Scene {name}"))
        .markdown(lines.iter().map(|l| l.to_string()).collect::<Vec<_>>())
        .build()
        .unwrap();
    StoryRecord::new(ElementType::Scene, name, fields)
}

fn acts(actions: &storybuilder_core::ActionsData) -> Vec<Act> {
    actions.iter().filter_map(Action::as_act).cloned().collect()
}

#[test]
fn test_talk_line_compiles_to_talk_act() {
    let story = StoryData::new(vec![scene("s1", &["[taro:talk:]Hello there"])]);
    let actions = compile_actions(&story).unwrap();

    let acts = acts(&actions);
    assert_eq!(acts.len(), 1);
    assert_eq!(acts[0].act_type(), &ActType::Talk);
    assert_eq!(acts[0].subject(), "taro");
    assert_eq!(acts[0].outline(), "");
    assert_eq!(acts[0].description(), "Hello there");
}

#[test]
fn test_scene_markers_are_emitted_in_order() {
    let fields = StoryFields::builder()
        .title("Park")
        .scene(SceneMeta::parse("taro", "park", "2020", "4/1", "noon"))
        .markdown(vec!["# memo".to_string(), "Walks.".to_string()])
        .build()
        .unwrap();
    let story = StoryData::new(vec![
        StoryRecord::new(ElementType::Book, "book", StoryFields::default()),
        StoryRecord::new(ElementType::Scene, "s1", fields),
    ]);

    let actions = compile_actions(&story).unwrap();
    let markers: Vec<&Marker> = actions.iter().filter_map(Action::as_marker).collect();
    assert_eq!(
        markers,
        vec![
            &Marker::BookTitle(String::new()),
            &Marker::SceneTitle("Park".to_string()),
            &Marker::SceneCamera("taro".to_string()),
            &Marker::SceneStage("park".to_string()),
            &Marker::SceneYear("2020".to_string()),
            &Marker::SceneDate("4/1".to_string()),
            &Marker::SceneTime("noon".to_string()),
            &Marker::SceneStart,
            &Marker::Comment("memo".to_string()),
            &Marker::SceneEnd,
        ]
    );
}

#[test]
fn test_same_verb_copies_previous_except_description_and_flags() {
    let story = StoryData::new(vec![scene(
        "s1",
        &["[taro:have:sword:old]Takes the sword # n1", "[-:same:-]"],
    )]);
    let acts = acts(&compile_actions(&story).unwrap());

    assert_eq!(acts.len(), 2);
    let (first, second) = (&acts[0], &acts[1]);
    assert_eq!(second.act_type(), first.act_type());
    assert_eq!(second.subject(), first.subject());
    assert_eq!(second.outline(), first.outline());
    assert_eq!(second.description(), "");
    assert!(second.flags().is_empty());
    assert_eq!(second.note(), "n1");
}

#[test]
fn test_same_verb_keeps_its_own_note() {
    let story = StoryData::new(vec![scene(
        "s1",
        &["[taro:have:sword]Takes # n1", "[-:same:-]Drops # n2", "[-:do:-]Sits"],
    )]);
    let acts = acts(&compile_actions(&story).unwrap());

    assert_eq!(acts[1].note(), "n2");
    assert_eq!(acts[2].note(), "");
}

#[test]
fn test_same_fields_override_individually() {
    let story = StoryData::new(vec![scene(
        "s1",
        &["[taro:talk:greeting]Hi", "[hanako:same:-]Hello"],
    )]);
    let acts = acts(&compile_actions(&story).unwrap());

    assert_eq!(acts[1].act_type(), &ActType::Talk);
    assert_eq!(acts[1].subject(), "hanako");
    assert_eq!(acts[1].outline(), "greeting");
    assert_eq!(acts[1].description(), "Hello");
}

#[test]
fn test_same_without_antecedent_is_dropped() {
    let story = StoryData::new(vec![scene("s1", &["[taro:same:]Lonely", "Plain."])]);
    let acts = acts(&compile_actions(&story).unwrap());

    assert_eq!(acts.len(), 1);
    assert_eq!(acts[0].description(), "Plain.");
}

#[test]
fn test_same_does_not_cross_scene_boundary() {
    let story = StoryData::new(vec![
        scene("s1", &["[taro:talk:]Hi"]),
        scene("s2", &["[-:same:]Again"]),
    ]);
    let acts = acts(&compile_actions(&story).unwrap());
    assert_eq!(acts.len(), 1);
}

#[test]
fn test_resolve_same_on_raw_stream() {
    let raw = vec![
        RawAction::Marker(Marker::SceneStart),
        RawAction::Act(RawAct::new(
            Verb::Act(ActType::Go),
            Carry::Value("taro".to_string()),
            Carry::Value("home".to_string()),
            "leaves",
            vec!["f".to_string()],
            "",
        )),
        RawAction::Act(RawAct::new(
            Verb::Same,
            Carry::Same,
            Carry::Same,
            "",
            Vec::new(),
            "",
        )),
    ];
    let resolved = resolve_same(raw);
    let acts = acts(&resolved);
    assert_eq!(acts[1].act_type(), &ActType::Go);
    assert_eq!(acts[1].subject(), "taro");
    assert_eq!(acts[1].outline(), "home");
    assert_eq!(acts[1].description(), "");
}

#[test]
fn test_scene_metadata_carries_forward() {
    let first = StoryFields::builder()
        .title("One")
        .scene(SceneMeta::parse("taro", "park", "2020", "4/1", "noon"))
        .build()
        .unwrap();
    let second = StoryFields::builder()
        .title("Two")
        .scene(SceneMeta::parse("同", "street", "-", "翌日", ""))
        .build()
        .unwrap();
    let story = StoryData::new(vec![
        StoryRecord::new(ElementType::Scene, "s1", first),
        StoryRecord::new(ElementType::Scene, "s2", second),
    ]);

    let raw = convert_story(&story);
    let title = RawAction::Marker(Marker::SceneTitle("Two".to_string()));
    let second: Vec<RawAction> = raw
        .into_iter()
        .skip_while(|r| *r != title)
        .skip(1)
        .take(5)
        .collect();
    let marker = |m: Marker| RawAction::Marker(m);
    assert_eq!(
        second,
        vec![
            marker(Marker::SceneCamera("taro".to_string())),
            marker(Marker::SceneStage("street".to_string())),
            marker(Marker::SceneYear("2020".to_string())),
            marker(Marker::SceneDate("4/2".to_string())),
            marker(Marker::SceneTime(String::new())),
        ]
    );
}

#[test]
fn test_empty_story_is_missing_data() {
    let err = compile_actions(&StoryData::default()).unwrap_err();
    match err.kind() {
        StorybuilderErrorKind::Compile(e) => assert_eq!(e.kind, CompileErrorKind::NoStoryRecords),
        other => panic!("Expected compile error, got {other:?}"),
    }
}

#[test]
fn test_paragraph_and_break_directives_become_markers() {
    let story = StoryData::new(vec![scene(
        "s1",
        &["#! P", "One.", "Two.", "#! PE", "#! br", "#! UNKNOWN x"],
    )]);
    let actions = apply_instructions(compile_actions(&story).unwrap());

    let body: Vec<&Action> = actions
        .iter()
        .skip_while(|a| **a != Action::Marker(Marker::SceneStart))
        .collect();
    assert_eq!(body[1], &Action::Marker(Marker::ParagraphStart));
    assert_eq!(body[2].as_act().map(|a| a.description().as_str()), Some("One."));
    assert_eq!(body[3].as_act().map(|a| a.description().as_str()), Some("Two."));
    assert_eq!(body[4], &Action::Marker(Marker::ParagraphEnd));
    assert_eq!(body[5], &Action::Marker(Marker::Br));
    assert_eq!(body[6], &Action::Marker(Marker::SceneEnd));
    assert!(
        actions
            .iter()
            .all(|a| !matches!(a, Action::Marker(Marker::Instruction(_))))
    );
}

#[test]
fn test_alias_substitutes_subject_and_text() {
    let story = StoryData::new(vec![scene(
        "s1",
        &["#! A T=taro", "[T:talk:about T]I am T # T note"],
    )]);
    let acts = acts(&apply_instructions(compile_actions(&story).unwrap()));

    assert_eq!(acts[0].subject(), "taro");
    assert_eq!(acts[0].outline(), "about taro");
    assert_eq!(acts[0].description(), "I am taro");
    assert_eq!(acts[0].note(), "taro note");
}

#[test]
fn test_alias_scope_ends_at_scene_boundary() {
    let story = StoryData::new(vec![
        scene("s1", &["#! alias K=kenji", "[K:do:]K runs"]),
        scene("s2", &["[K:do:]K runs"]),
    ]);
    let acts = acts(&apply_instructions(compile_actions(&story).unwrap()));

    assert_eq!(acts[0].subject(), "kenji");
    assert_eq!(acts[1].subject(), "K");
    assert_eq!(acts[1].description(), "K runs");
}

#[test]
fn test_malformed_alias_is_ignored() {
    let story = StoryData::new(vec![scene("s1", &["#! A nonsense", "[x:do:]x"])]);
    let acts = acts(&apply_instructions(compile_actions(&story).unwrap()));
    assert_eq!(acts[0].subject(), "x");
}
