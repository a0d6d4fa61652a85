//! Inline directive processing.

use std::collections::BTreeMap;
use std::str::FromStr;
use storybuilder_core::{Action, ActionsData, Instruction, Marker, translate};
use tracing::{debug, instrument, warn};

/// Recognised `#! ` directive tokens.
///
/// # Examples
///
/// ```
/// use storybuilder_compiler::Directive;
/// use std::str::FromStr;
///
/// assert_eq!(Directive::from_str("P").unwrap(), Directive::ParagraphStart);
/// assert_eq!(Directive::from_str("pend").unwrap(), Directive::ParagraphEnd);
/// assert_eq!(Directive::from_str("br").unwrap(), Directive::Break);
/// assert_eq!(Directive::from_str("alias").unwrap(), Directive::Alias);
/// assert!(Directive::from_str("X").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Directive {
    /// Start a paragraph
    #[strum(serialize = "P", serialize = "pr")]
    ParagraphStart,
    /// End a paragraph
    #[strum(serialize = "PE", serialize = "pend")]
    ParagraphEnd,
    /// Explicit line break
    #[strum(serialize = "B", serialize = "BR")]
    Break,
    /// Define an alias `short=origin` for the rest of the scene
    #[strum(serialize = "A", serialize = "alias")]
    Alias,
}

/// Consume directives and apply per-scene aliases.
///
/// Paragraph and break directives become their control markers. Alias
/// definitions are stored and emit nothing; the table is cleared at every
/// scene start. Acts have their subject replaced when it is an alias key,
/// and every alias key occurring in outline, description or note is
/// substituted. Unknown directives are logged and dropped.
#[instrument(skip_all, fields(actions = actions.len()))]
pub fn apply_instructions(actions: ActionsData) -> ActionsData {
    let mut aliases: BTreeMap<String, String> = BTreeMap::new();
    let mut out = Vec::with_capacity(actions.len());

    for action in actions {
        match action {
            Action::Marker(Marker::SceneStart) => {
                aliases.clear();
                out.push(Action::Marker(Marker::SceneStart));
            }
            Action::Marker(Marker::Instruction(instruction)) => {
                if let Some(marker) = dispatch(&instruction, &mut aliases) {
                    out.push(Action::Marker(marker));
                }
            }
            Action::Act(act) => {
                let act = match aliases.get(act.subject()) {
                    Some(origin) => {
                        let origin = origin.clone();
                        act.with_subject(origin)
                    }
                    None => act,
                };
                out.push(Action::Act(act.map_text(|text| translate(text, &aliases, ""))));
            }
            other => out.push(other),
        }
    }

    ActionsData::new(out)
}

fn dispatch(instruction: &Instruction, aliases: &mut BTreeMap<String, String>) -> Option<Marker> {
    let directive = match Directive::from_str(instruction.name()) {
        Ok(directive) => directive,
        Err(_) => {
            warn!(name = %instruction.name(), "Unknown instruction; dropping it");
            return None;
        }
    };

    match directive {
        Directive::ParagraphStart => Some(Marker::ParagraphStart),
        Directive::ParagraphEnd => Some(Marker::ParagraphEnd),
        Directive::Break => Some(Marker::Br),
        Directive::Alias => {
            match instruction.arg().as_deref().and_then(|arg| arg.split_once('=')) {
                Some((short, origin)) if !short.trim().is_empty() => {
                    debug!(short = short.trim(), origin = origin.trim(), "Defined alias");
                    aliases.insert(short.trim().to_string(), origin.trim().to_string());
                }
                _ => warn!(arg = ?instruction.arg(), "Alias instruction needs short=origin"),
            }
            None
        }
    }
}
