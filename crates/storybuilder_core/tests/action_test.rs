//! Tests for action stream types and sentinel parsing.

use std::str::FromStr;
use storybuilder_core::{
    Act, ActType, Action, ActionsData, Carry, ElementType, Marker, SceneValue, StoryFields,
    Verb,
};

#[test]
fn test_verb_parses_same_markers() {
    assert_eq!(Verb::from_str("-").unwrap(), Verb::Same);
    assert_eq!(Verb::from_str("same").unwrap(), Verb::Same);
    assert_eq!(Verb::from_str("SAME").unwrap(), Verb::Same);
    assert_eq!(Verb::from_str("同").unwrap(), Verb::Same);
}

#[test]
fn test_verb_defaults_to_do_when_empty() {
    assert_eq!(Verb::from_str("").unwrap(), Verb::Act(ActType::Do));
    assert_eq!(Verb::from_str("  ").unwrap(), Verb::Act(ActType::Do));
}

#[test]
fn test_verb_table_covers_every_name() {
    let names = [
        ("be", ActType::Be),
        ("come", ActType::Come),
        ("do", ActType::Do),
        ("draw", ActType::Draw),
        ("explain", ActType::Explain),
        ("go", ActType::Go),
        ("have", ActType::Have),
        ("know", ActType::Know),
        ("known", ActType::Known),
        ("occur", ActType::Occur),
        ("put", ActType::Put),
        ("remember", ActType::Remember),
        ("rid", ActType::Rid),
        ("talk", ActType::Talk),
        ("think", ActType::Think),
        ("voice", ActType::Voice),
        ("wear", ActType::Wear),
    ];
    for (name, expected) in names {
        assert_eq!(Verb::from_str(name).unwrap(), Verb::Act(expected), "{name}");
        assert_eq!(expected.to_string(), name);
    }
}

#[test]
fn test_unknown_verb_is_rejected() {
    assert!(Verb::from_str("dance").is_err());
}

#[test]
fn test_carry_resolution() {
    assert_eq!(Carry::parse("").resolve("taro"), "");
    assert_eq!(Carry::parse("同").resolve("taro"), "taro");
    assert_eq!(Carry::parse("hanako").resolve("taro"), "hanako");
}

#[test]
fn test_scene_value_sentinels() {
    assert_eq!(SceneValue::parse("-"), SceneValue::Same);
    assert_eq!(SceneValue::parse("next-week"), SceneValue::NextWeek);
    assert_eq!(SceneValue::parse("翌月"), SceneValue::NextMonth);
    assert_eq!(SceneValue::parse("2020").as_value(), Some("2020"));
}

#[test]
fn test_actions_data_serialises_to_json() {
    let act = Act::builder()
        .act_type(ActType::Talk)
        .subject("taro")
        .description("Hello there")
        .build()
        .unwrap();
    let data = ActionsData::new(vec![
        Action::Marker(Marker::SceneStart),
        Action::Act(act),
        Action::Marker(Marker::SceneEnd),
    ]);

    let json = data.to_json().unwrap();
    assert!(json.contains("\"talk\""));
    assert!(json.contains("Hello there"));
    assert_eq!(data.iter().filter_map(Action::as_act).count(), 1);
}

#[test]
fn test_element_type_order_matches_nesting() {
    let mut kinds = vec![
        ElementType::Scene,
        ElementType::Book,
        ElementType::Episode,
        ElementType::Chapter,
    ];
    kinds.sort();
    assert_eq!(
        kinds,
        vec![
            ElementType::Book,
            ElementType::Chapter,
            ElementType::Episode,
            ElementType::Scene
        ]
    );
}

#[test]
fn test_story_fields_builder_defaults() {
    let fields = StoryFields::builder().title("Opening").build().unwrap();
    assert_eq!(fields.title(), "Opening");
    assert!(fields.outline().is_empty());
    assert!(fields.plot().is_empty());
    assert_eq!(fields.scene().camera(), &SceneValue::Empty);
}
