//! End-to-end build tests over a project written to a temporary directory.

use std::fs;
use std::path::Path;
use storybuilder::{
    CONFIG_FILE, Format, Project, StorybuilderConfig, StorybuilderErrorKind, build_project,
    load_actions, load_resolver, select_formats,
};

fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

fn sample_project(root: &Path) {
    write(
        root,
        "order.yml",
        "book:\n  - chapter/ch01:\n      - episode/ep01:\n          - scene/sc01\n          - scene/sc02\n",
    );
    write(root, "book.md", "---\ntitle: The Tale\noutline: A boy and a sword\n---\n");
    write(
        root,
        "chapters/ch01.md",
        "---\ntitle: Beginnings\nplot:\n  setup: Taro is bored\n  climax: The sword\n---\n",
    );
    write(root, "episodes/ep01.md", "---\ntitle: The Park\n---\n");
    write(
        root,
        "scenes/sc01.md",
        "---\ntitle: Morning\ncamera: taro\nstage: park\nyear: 2020\ndate: 4/1\ntime: morning\n---\n\
         [taro:be:]$taro sits on a bench.\n\
         [taro:talk:]Hello there\n\
         #! P\n\
         The wind blew.\n\
         Leaves fell.\n\
         #! PE\n\
         [taro:have:sword]He picks up $sword.\n",
    );
    write(
        root,
        "scenes/sc02.md",
        "---\ntitle: Next Day\ncamera: \"-\"\nstage: street\nyear: \"-\"\ndate: 翌日\ntime: noon\n---\n\
         [hanako:come:]Hanako arrives.\n\
         [-:talk:]Hi, $taro.\n",
    );
    write(root, "persons/taro.md", "---\nname: Taro\nfullname: Yamada,Taro\n---\n");
    write(root, "persons/hanako.md", "---\nname: Hanako\n---\n");
    write(root, "stages/park.md", "---\nname: Central Park\n---\n");
    write(root, "stages/street.md", "---\nname: Main Street\n---\n");
    write(root, "items/sword.md", "---\nname: Old Sword\n---\n");
}

#[test]
fn test_full_build_writes_every_format() {
    let dir = tempfile::tempdir().unwrap();
    sample_project(dir.path());
    let project = Project::new(dir.path());
    let config = StorybuilderConfig::load(dir.path()).unwrap();

    let summary = build_project(&project, &config, &select_formats(&[])).unwrap();
    assert_eq!(summary.written().len(), 6);

    let out = dir.path().join("build");
    for file in [
        "outline.md",
        "plot.md",
        "script.md",
        "novel.md",
        "info.md",
        "data.md",
    ] {
        assert!(out.join(file).is_file(), "{file} missing");
    }

    let novel = fs::read_to_string(out.join("novel.md")).unwrap();
    assert!(novel.starts_with("# The Tale\n"));
    assert!(novel.contains("　Taro sits on a bench.\n「Hello there」\n"));
    assert!(novel.contains("　The wind blew.Leaves fell.\n"));
    assert!(novel.contains("He picks up Old Sword."));
    assert!(novel.contains("「Hi, Taro.」"));

    let script = fs::read_to_string(out.join("script.md")).unwrap();
    assert!(script.contains("○Central Park（morning）　［Taro］"));
    assert!(script.contains("Hanako「Hi, Taro.」"));

    let info = fs::read_to_string(out.join("info.md")).unwrap();
    assert!(info.contains("| Taro | Main Street | 2020 | 4/2 | noon |"));
    assert!(info.contains("- gained: Old Sword\n"));

    let data = fs::read_to_string(out.join("data.md")).unwrap();
    assert!(data.contains("- 1-1-2. Next Day\n"));
    assert!(data.contains("- novel: "));
    assert!(data.contains("- talk: 2\n"));

    let counted: Vec<Format> = summary.counts().iter().map(|(f, _)| *f).collect();
    assert_eq!(counted, vec![Format::Script, Format::Novel]);
}

#[test]
fn test_selected_formats_only() {
    let dir = tempfile::tempdir().unwrap();
    sample_project(dir.path());
    let project = Project::new(dir.path());
    let config = StorybuilderConfig::load(dir.path()).unwrap();

    let formats = select_formats(&[Format::Outline, Format::Plot]);
    let summary = build_project(&project, &config, &formats).unwrap();
    assert_eq!(summary.written().len(), 3);

    let out = dir.path().join("build");
    assert!(!out.join("novel.md").exists());
    let plot = fs::read_to_string(out.join("plot.md")).unwrap();
    assert!(plot.contains("## Beginnings\n\n- setup: Taro is bored\n- climax: The sword\n"));

    let data = fs::read_to_string(out.join("data.md")).unwrap();
    assert!(data.contains("No counted formats in this build."));
}

#[test]
fn test_missing_order_manifest_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let project = Project::new(dir.path());
    let config = StorybuilderConfig::bundled().unwrap();

    let err = build_project(&project, &config, &select_formats(&[])).unwrap_err();
    assert!(matches!(err.kind(), StorybuilderErrorKind::Loader(_)));
    assert!(!dir.path().join("build").exists());
}

#[test]
fn test_project_config_overrides_output() {
    let dir = tempfile::tempdir().unwrap();
    sample_project(dir.path());
    let mut build = toml::Table::new();
    build.insert("output_dir".into(), toml::Value::String("out".into()));
    build.insert("novel_file".into(), toml::Value::String("manuscript.md".into()));
    let mut count = toml::Table::new();
    count.insert("columns".into(), toml::Value::Integer(40));
    let mut table = toml::Table::new();
    table.insert("build".into(), toml::Value::Table(build));
    table.insert("count".into(), toml::Value::Table(count));
    write(dir.path(), CONFIG_FILE, &toml::to_string(&table).unwrap());

    let config = StorybuilderConfig::load(dir.path()).unwrap();
    assert_eq!(config.build().output_dir(), "out");
    assert_eq!(*config.count().columns(), 40);
    assert_eq!(*config.count().rows(), 20);

    let project = Project::new(dir.path());
    build_project(&project, &config, &select_formats(&[Format::Novel])).unwrap();
    assert!(dir.path().join("out/manuscript.md").is_file());
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[count]\ncolumns = 0\n").unwrap();

    let err = StorybuilderConfig::from_file(&path).unwrap_err();
    assert!(matches!(err.kind(), StorybuilderErrorKind::Config(_)));
}

#[test]
fn test_dump_and_tags_helpers() {
    let dir = tempfile::tempdir().unwrap();
    sample_project(dir.path());
    let project = Project::new(dir.path());

    let (story, actions) = load_actions(&project).unwrap();
    assert_eq!(story.len(), 5);
    assert!(actions.to_json().unwrap().contains("\"act_type\": \"talk\""));

    let config = StorybuilderConfig::bundled().unwrap();
    let resolver = load_resolver(&project, &config).unwrap();
    assert_eq!(resolver.tags().get("ln_taro"), Some("Yamada"));
    assert_eq!(resolver.tags().get("t_street"), Some("Main Street"));
}
