//! The combined `data.md` report.

use crate::contents::{ContentsEntry, render_contents};
use crate::count::CountResult;
use crate::projector::Format;
use crate::render::{RULE, finish};
use std::collections::BTreeMap;
use storybuilder_core::{ActType, Action, ActionsData};

/// Number of acts per verb.
pub fn action_stats(actions: &ActionsData) -> BTreeMap<ActType, usize> {
    let mut stats = BTreeMap::new();
    for act in actions.iter().filter_map(Action::as_act) {
        *stats.entry(*act.act_type()).or_insert(0) += 1;
    }
    stats
}

/// Render the data report: contents, character counts for each format
/// built this run, then action statistics.
pub fn render_data(
    contents: &[ContentsEntry],
    counts: &[(Format, CountResult)],
    stats: &BTreeMap<ActType, usize>,
) -> String {
    let mut parts = vec![render_contents(contents), format!("\n{}\n\n", RULE)];

    if counts.is_empty() {
        parts.push("No counted formats in this build.\n".to_string());
    }
    for (format, count) in counts {
        parts.push(format!(
            "- {}: {} chars ({} real, {} space), {:.1} lines, {:.2} pages\n",
            format,
            count.total(),
            count.real(),
            count.space(),
            count.lines(),
            count.pages()
        ));
    }

    parts.push(format!("\n{}\n\n", RULE));
    if stats.is_empty() {
        parts.push("No actions compiled in this build.\n".to_string());
    }
    for (act_type, n) in stats {
        parts.push(format!("- {}: {}\n", act_type, n));
    }
    finish(parts)
}
