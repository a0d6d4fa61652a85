//! Build orchestration: load, compile, project, render, write.

use crate::StorybuilderConfig;
use derive_getters::Getters;
use std::collections::BTreeSet;
use std::path::PathBuf;
use storybuilder_compiler::{apply_instructions, compile_actions};
use storybuilder_core::{ActionsData, StoryData};
use storybuilder_error::{StorybuilderError, StorybuilderResult};
use storybuilder_format::{
    CountResult, Format, action_stats, count_text, novel_body, project_contents, project_info,
    project_novel, project_outline, project_plot, project_script, render_data, render_info,
    render_novel, render_outline, render_plot, render_script, script_body,
};
use storybuilder_loader::{Project, write_output};
use storybuilder_tags::{NameSources, TagResolver};
use strum::IntoEnumIterator;
use tracing::{error, info, instrument};

/// What a build produced.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct BuildSummary {
    /// Files written, in write order
    written: Vec<PathBuf>,
    /// Character counts per counted format
    counts: Vec<(Format, CountResult)>,
}

/// Formats to build. An empty selection means every format.
pub fn select_formats(requested: &[Format]) -> BTreeSet<Format> {
    if requested.is_empty() {
        Format::iter().collect()
    } else {
        requested.iter().copied().collect()
    }
}

/// Compile the project's scenes into the cleaned action stream.
///
/// # Errors
///
/// Returns an error if the story cannot be loaded or compiles to nothing.
pub fn load_actions(project: &Project) -> StorybuilderResult<(StoryData, ActionsData)> {
    let story = project.load_story()?;
    let actions = apply_instructions(compile_actions(&story)?);
    Ok((story, actions))
}

/// Load the name sources and build the tag tables.
///
/// # Errors
///
/// Returns an error if a reference file cannot be parsed.
pub fn load_resolver(
    project: &Project,
    config: &StorybuilderConfig,
) -> StorybuilderResult<TagResolver> {
    let sources = NameSources::load(project)?;
    Ok(TagResolver::build(&sources, config.tags()))
}

struct Rendered {
    text: String,
    body: Option<String>,
}

fn render_format(
    format: Format,
    story: &StoryData,
    actions: &ActionsData,
    resolver: &TagResolver,
) -> StorybuilderResult<Rendered> {
    let rendered = match format {
        Format::Outline => Rendered {
            text: render_outline(&project_outline(story, resolver)?),
            body: None,
        },
        Format::Plot => Rendered {
            text: render_plot(&project_plot(story, resolver)?),
            body: None,
        },
        Format::Info => Rendered {
            text: render_info(&project_info(actions, resolver)?),
            body: None,
        },
        Format::Novel => {
            let records = project_novel(actions, resolver)?;
            Rendered {
                text: render_novel(&records),
                body: Some(novel_body(&records)),
            }
        }
        Format::Script => {
            let records = project_script(actions, resolver)?;
            Rendered {
                text: render_script(&records),
                body: Some(script_body(&records)),
            }
        }
    };
    Ok(rendered)
}

/// Build the selected formats plus the data report.
///
/// Loading and compilation failures abort the build. A failed format is
/// logged and skipped; the remaining formats and the data report are
/// still written, and the first failure is returned at the end.
///
/// # Errors
///
/// Returns the first error encountered.
#[instrument(skip_all, fields(root = %project.root().display(), formats = formats.len()))]
pub fn build_project(
    project: &Project,
    config: &StorybuilderConfig,
    formats: &BTreeSet<Format>,
) -> StorybuilderResult<BuildSummary> {
    let story = project
        .load_story()
        .inspect_err(|e| error!(error = %e, "Loading story failed"))?;
    let resolver = load_resolver(project, config)
        .inspect_err(|e| error!(error = %e, "Building tag tables failed"))?;

    let actions = if formats.iter().any(Format::needs_actions) {
        let compiled = compile_actions(&story)
            .inspect_err(|e| error!(error = %e, "Compiling actions failed"))?;
        apply_instructions(compiled)
    } else {
        ActionsData::default()
    };

    let out_dir = project.root().join(config.build().output_dir());
    let mut summary = BuildSummary::default();
    let mut first_error: Option<StorybuilderError> = None;

    for format in formats {
        let result = render_format(*format, &story, &actions, &resolver).and_then(|rendered| {
            let path = write_output(&out_dir, config.build().file_for(*format), &rendered.text)?;
            Ok((path, rendered.body))
        });
        match result {
            Ok((path, body)) => {
                info!(%format, path = %path.display(), "Wrote output");
                if let Some(body) = body {
                    summary.counts.push((*format, count_text(&body, config.count())));
                }
                summary.written.push(path);
            }
            Err(e) => {
                error!(%format, error = %e, "Format build failed");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    let contents = project_contents(&story, &resolver);
    let data = render_data(&contents, &summary.counts, &action_stats(&actions));
    let data_path = write_output(&out_dir, config.build().data_file(), &data)
        .inspect_err(|e| error!(error = %e, "Writing data report failed"))?;
    info!(path = %data_path.display(), "Wrote data report");
    summary.written.push(data_path);

    match first_error {
        Some(e) => Err(e),
        None => Ok(summary),
    }
}
