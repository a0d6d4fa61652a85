//! Command handlers.

use super::OutputFormat;
use std::path::{Path, PathBuf};
use storybuilder::{
    Action, Format, Project, StorybuilderConfig, StorybuilderResult, build_project, load_actions,
    load_resolver, select_formats,
};
use storybuilder_core::Marker;
use tracing::info;

fn load_config(
    project: &Project,
    explicit: Option<&Path>,
) -> StorybuilderResult<StorybuilderConfig> {
    match explicit {
        Some(path) => StorybuilderConfig::from_file(path),
        None => StorybuilderConfig::load(project.root()),
    }
}

/// Format flags of the build command.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatFlags {
    /// Outline requested
    pub outline: bool,
    /// Plot requested
    pub plot: bool,
    /// Script requested
    pub script: bool,
    /// Novel requested
    pub novel: bool,
    /// Scene info requested
    pub info: bool,
}

impl FormatFlags {
    fn requested(&self) -> Vec<Format> {
        [
            (self.outline, Format::Outline),
            (self.plot, Format::Plot),
            (self.script, Format::Script),
            (self.novel, Format::Novel),
            (self.info, Format::Info),
        ]
        .into_iter()
        .filter_map(|(on, format)| on.then_some(format))
        .collect()
    }
}

/// Build the requested formats.
pub fn run_build(
    project: PathBuf,
    flags: FormatFlags,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = Project::new(project);
    let config = load_config(&project, config.as_deref())?;
    let formats = select_formats(&flags.requested());

    let summary = build_project(&project, &config, &formats)?;
    for path in summary.written() {
        println!("{}", path.display());
    }
    info!(files = summary.written().len(), "Build finished");
    Ok(())
}

fn describe(action: &Action) -> String {
    match action {
        Action::Act(act) => {
            let mut line = format!(
                "  [{}] {} | {} | {}",
                act.act_type(),
                act.subject(),
                act.outline(),
                act.description()
            );
            if !act.flags().is_empty() {
                line.push_str(&format!(" ({})", act.flags().join(",")));
            }
            if !act.note().is_empty() {
                line.push_str(&format!(" # {}", act.note()));
            }
            line
        }
        Action::Marker(Marker::SceneStart) => "--- scene start".to_string(),
        Action::Marker(Marker::SceneEnd) => "--- scene end".to_string(),
        Action::Marker(marker) => format!("{:?}", marker),
    }
}

/// Print the compiled action stream.
pub fn run_dump(project: PathBuf, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let (_, actions) = load_actions(&Project::new(project))?;
    match format {
        OutputFormat::Json => println!("{}", actions.to_json()?),
        OutputFormat::Human => {
            for action in &actions {
                println!("{}", describe(action));
            }
        }
    }
    Ok(())
}

/// Print the resolved tag map.
pub fn run_tags(
    project: PathBuf,
    format: OutputFormat,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = Project::new(project);
    let config = load_config(&project, config.as_deref())?;
    let resolver = load_resolver(&project, &config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(resolver.tags())?),
        OutputFormat::Human => {
            for (key, value) in resolver.tags().iter() {
                println!("{}\t{}", key, value);
            }
        }
    }
    Ok(())
}
