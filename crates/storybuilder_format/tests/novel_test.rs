//! Tests for the novel and script projectors.

use std::collections::BTreeMap;
use storybuilder_compiler::{apply_instructions, compile_actions};
use storybuilder_core::{
    Action, ActionsData, ElementType, Marker, NameFields, NameKind, NameRecord, SceneMeta,
    StoryData, StoryFields, StoryRecord,
};
use storybuilder_format::{
    NovelRecord, ScriptRecord, novel_body, project_novel, project_script, render_novel,
    render_script,
};
use storybuilder_tags::{NameSources, TagConfig, TagResolver};

fn actions(lines: &[&str]) -> ActionsData {
    let fields = StoryFields::builder()
        .title("Scene")
        .markdown(lines.iter().map(|l| l.to_string()).collect::<Vec<_>>())
        .build()
        .unwrap();
    let story = StoryData::new(vec![StoryRecord::new(ElementType::Scene, "s1", fields)]);
    apply_instructions(compile_actions(&story).unwrap())
}

fn resolver() -> TagResolver {
    let mut calling = BTreeMap::new();
    calling.insert("hanako".to_string(), "Hana".to_string());
    let taro = NameRecord::new(
        NameKind::Person,
        "taro",
        NameFields::person("Taro", "Yamada,Taro", calling, Some("ore".to_string())),
    );
    let hanako = NameRecord::new(
        NameKind::Person,
        "hanako",
        NameFields::person("Hanako", "", BTreeMap::new(), None),
    );
    let park = NameRecord::new(NameKind::Stage, "park", NameFields::named("Central Park"));
    let sources = NameSources::new(vec![taro, hanako, park], BTreeMap::new(), BTreeMap::new());
    TagResolver::build(&sources, &TagConfig::default())
}

fn body_records(records: &[NovelRecord]) -> Vec<NovelRecord> {
    records
        .iter()
        .filter(|r| !matches!(r, NovelRecord::SceneTitle(_) | NovelRecord::SceneEnd))
        .cloned()
        .collect()
}

#[test]
fn test_talk_renders_dialogue_without_speaker() {
    let novel = project_novel(&actions(&["[taro:talk:]Hello there"]), &resolver()).unwrap();
    assert_eq!(novel_body(&novel), "「Hello there」\n");
    assert_eq!(render_novel(&novel), "**Scene**\n\n「Hello there」\n");
}

#[test]
fn test_paragraph_concatenates_with_one_break() {
    let novel = project_novel(
        &actions(&["#! P", "It rained.", "She waited.", "#! PE"]),
        &resolver(),
    )
    .unwrap();

    let body = body_records(&novel);
    assert_eq!(
        body,
        vec![
            NovelRecord::Indent,
            NovelRecord::Description {
                subject: String::new(),
                text: "It rained.".to_string()
            },
            NovelRecord::Description {
                subject: String::new(),
                text: "She waited.".to_string()
            },
            NovelRecord::Br,
        ]
    );
    assert_eq!(novel_body(&novel), "　It rained.She waited.\n");
}

#[test]
fn test_break_mode_indents_descriptions_only() {
    let novel = project_novel(
        &actions(&["It rained.", "[taro:talk:]Hi", "[taro:think:]Cold"]),
        &resolver(),
    )
    .unwrap();
    assert_eq!(novel_body(&novel), "　It rained.\n「Hi」\n『Cold』\n");
}

#[test]
fn test_tags_and_calling_in_dialogue() {
    let novel = project_novel(
        &actions(&["[taro:talk:]$M met $hanako at $park", "[hanako:talk:]Hi $taro"]),
        &resolver(),
    )
    .unwrap();
    assert_eq!(
        novel_body(&novel),
        "「ore met Hana at Central Park」\n「Hi Taro」\n"
    );
}

#[test]
fn test_blank_records_are_eliminated() {
    let mut stream =
        actions(&["[taro:talk:]", "[taro:do:]", "[taro:think:]  ", "Real."]).into_inner();
    stream.insert(1, Action::Marker(Marker::Comment(String::new())));
    let novel = project_novel(&ActionsData::new(stream), &resolver()).unwrap();
    assert!(novel.iter().all(|r| match r {
        NovelRecord::Comment(c) => !c.trim().is_empty(),
        NovelRecord::Description { text, .. }
        | NovelRecord::Dialogue { text, .. }
        | NovelRecord::Monologue { text, .. } => !text.trim().is_empty(),
        _ => true,
    }));
    assert_eq!(novel_body(&novel), "　Real.\n");
}

#[test]
fn test_tags_are_not_split_by_calling_keys() {
    let taro = NameRecord::new(
        NameKind::Person,
        "taro",
        NameFields::person("Taro", "", BTreeMap::new(), None),
    );
    let mary = NameRecord::new(
        NameKind::Person,
        "Mary",
        NameFields::person("Mary", "", BTreeMap::new(), None),
    );
    let school = NameRecord::new(NameKind::Stage, "School", NameFields::named("High School"));
    let sources = NameSources::new(vec![taro, mary, school], BTreeMap::new(), BTreeMap::new());
    let resolver = TagResolver::build(&sources, &TagConfig::default());

    let novel = project_novel(&actions(&["[taro:talk:]Go to $School with $Mary"]), &resolver)
        .unwrap();
    assert_eq!(novel_body(&novel), "「Go to High School with Mary」\n");
}

#[test]
fn test_script_blank_records_are_eliminated() {
    let mut stream = actions(&[
        "[taro:talk:]",
        "[taro:think:] ",
        "[hanako:voice:]",
        "[:occur:]",
        "[taro:go:]",
        "[taro:talk:]Real.",
    ])
    .into_inner();
    stream.insert(1, Action::Marker(Marker::Comment(String::new())));
    let script = project_script(&ActionsData::new(stream), &resolver()).unwrap();
    assert!(script.iter().all(|r| match r {
        ScriptRecord::Comment(c) => !c.trim().is_empty(),
        ScriptRecord::Dialogue { text, .. }
        | ScriptRecord::Monologue { text, .. }
        | ScriptRecord::Voice { text, .. }
        | ScriptRecord::Se { text, .. }
        | ScriptRecord::Action { text, .. }
        | ScriptRecord::Plain(text) => !text.trim().is_empty(),
        _ => true,
    }));
    assert!(render_script(&script).contains("Taro「Real.」\n"));
}

#[test]
fn test_comments_render_as_html_comments() {
    let novel = project_novel(&actions(&["# memo", "Text."]), &resolver()).unwrap();
    assert!(render_novel(&novel).contains("<!-- memo -->\n"));
    assert_eq!(novel_body(&novel), "　Text.\n");
}

#[test]
fn test_empty_stream_is_an_error() {
    assert!(project_novel(&ActionsData::default(), &resolver()).is_err());
    assert!(project_script(&ActionsData::default(), &resolver()).is_err());
}

#[test]
fn test_script_units() {
    let script = project_script(
        &actions(&[
            "[taro:talk:]Hello",
            "[taro:think:]Hmm",
            "[hanako:voice:]Over here",
            "[:occur:]Thunder",
            "[taro:go:]Leaves",
        ]),
        &resolver(),
    )
    .unwrap();

    let text = render_script(&script);
    assert!(text.contains("Taro「Hello」\n"));
    assert!(text.contains("Taro（Ｍ）『Hmm』\n"));
    assert!(text.contains("Hanako（Ｖ）「Over here」\n"));
    assert!(text.contains("ＳＥ　Thunder\n"));
    assert!(text.contains("　　　Leaves\n"));
}

#[test]
fn test_script_spin_uses_scene_head() {
    let fields = StoryFields::builder()
        .title("Park")
        .scene(SceneMeta::parse("taro", "park", "2020", "4/1", "noon"))
        .markdown(vec!["[taro:talk:]Hi".to_string()])
        .build()
        .unwrap();
    let story = StoryData::new(vec![StoryRecord::new(ElementType::Scene, "s1", fields)]);
    let actions = apply_instructions(compile_actions(&story).unwrap());

    let script = project_script(&actions, &resolver()).unwrap();
    assert!(matches!(script[1], ScriptRecord::Spin(_)));
    assert!(render_script(&script).contains("○Central Park（noon）　［Taro］\n"));
}
