//! Scene body line classification.

use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use storybuilder_core::{ActType, Carry, Instruction, Marker, RawAct, RawAction, Verb};
use tracing::warn;

const COMMENT: &str = "# ";
const HEAD: &str = "## ";
const INSTRUCTION: &str = "#! ";
const NOTE: &str = "# ";

static ACTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]*)\](.*)$").expect("Valid action line regex"));

/// Classify one scene body line.
///
/// Returns `None` for blank lines and for action lines with an unknown
/// verb (which are logged and dropped).
///
/// # Examples
///
/// ```
/// use storybuilder_compiler::parse_line;
/// use storybuilder_core::{ActType, Carry, Marker, RawAction, Verb};
///
/// let Some(RawAction::Act(act)) = parse_line("[taro:talk:]Hello there") else {
///     panic!("expected an act");
/// };
/// assert_eq!(act.verb(), &Verb::Act(ActType::Talk));
/// assert_eq!(act.subject(), &Carry::Value("taro".to_string()));
/// assert_eq!(act.description(), "Hello there");
///
/// assert_eq!(parse_line("# memo"), Some(RawAction::Marker(Marker::Comment("memo".to_string()))));
/// assert_eq!(parse_line("   "), None);
/// ```
pub fn parse_line(line: &str) -> Option<RawAction> {
    let line = line.trim_end();
    if line.trim().is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix(COMMENT) {
        return Some(RawAction::Marker(Marker::Comment(rest.trim().to_string())));
    }
    if let Some(rest) = line.strip_prefix(HEAD) {
        return Some(RawAction::Marker(Marker::SceneHead(rest.trim().to_string())));
    }
    if let Some(rest) = line.strip_prefix(INSTRUCTION) {
        let rest = rest.trim();
        let instruction = match rest.split_once(' ') {
            Some((name, arg)) => Instruction::new(name, Some(arg.trim().to_string())),
            None => Instruction::new(rest, None),
        };
        return Some(RawAction::Marker(Marker::Instruction(instruction)));
    }
    if line.starts_with('[') {
        return parse_action(line);
    }

    Some(plain(line))
}

fn plain(line: &str) -> RawAction {
    RawAction::Act(RawAct::new(
        Verb::Act(ActType::Do),
        Carry::Value(String::new()),
        Carry::Value(String::new()),
        line.trim(),
        Vec::new(),
        "",
    ))
}

fn parse_action(line: &str) -> Option<RawAction> {
    let Some(caps) = ACTION_LINE.captures(line) else {
        warn!(line, "Action bracket is not closed; treating line as plain description");
        return Some(plain(line));
    };

    let mut head = caps[1].split(':');
    let subject = head.next().unwrap_or_default();
    let verb_token = head.next().unwrap_or_default();
    let outline = head.next().unwrap_or_default();
    let flags: Vec<String> = head
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();

    let verb = match Verb::from_str(verb_token) {
        Ok(verb) => verb,
        Err(_) => {
            warn!(line, verb = verb_token, "Unknown verb; dropping action line");
            return None;
        }
    };

    let (description, note) = match caps[2].split_once(NOTE) {
        Some((description, note)) => (description.trim(), note.trim()),
        None => (caps[2].trim(), ""),
    };

    Some(RawAction::Act(RawAct::new(
        verb,
        Carry::parse(subject),
        Carry::parse(outline),
        description,
        flags,
        note,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(line: &str) -> RawAct {
        match parse_line(line) {
            Some(RawAction::Act(act)) => act,
            other => panic!("Expected act for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_line_is_do_action() {
        let a = act("  She smiled.  ");
        assert_eq!(a.verb(), &Verb::Act(ActType::Do));
        assert_eq!(a.description(), "She smiled.");
        assert_eq!(a.subject(), &Carry::Value(String::new()));
    }

    #[test]
    fn test_action_with_note_and_flags() {
        let a = act("[taro:have:sword:key:hidden]He grabs it # foreshadowing");
        assert_eq!(a.verb(), &Verb::Act(ActType::Have));
        assert_eq!(a.outline(), &Carry::Value("sword".to_string()));
        assert_eq!(a.flags(), &vec!["key".to_string(), "hidden".to_string()]);
        assert_eq!(a.description(), "He grabs it");
        assert_eq!(a.note(), "foreshadowing");
    }

    #[test]
    fn test_action_with_missing_segments() {
        let a = act("[taro]walks");
        assert_eq!(a.verb(), &Verb::Act(ActType::Do));
        assert_eq!(a.outline(), &Carry::Value(String::new()));
    }

    #[test]
    fn test_same_markers_in_action_head() {
        let a = act("[-:same:-]again");
        assert_eq!(a.verb(), &Verb::Same);
        assert_eq!(a.subject(), &Carry::Same);
        assert_eq!(a.outline(), &Carry::Same);
    }

    #[test]
    fn test_unknown_verb_is_dropped() {
        assert_eq!(parse_line("[taro:dance:]la la"), None);
    }

    #[test]
    fn test_heading_and_instruction_lines() {
        assert_eq!(
            parse_line("## Later"),
            Some(RawAction::Marker(Marker::SceneHead("Later".to_string())))
        );
        assert_eq!(
            parse_line("#! A T=taro"),
            Some(RawAction::Marker(Marker::Instruction(Instruction::new(
                "A",
                Some("T=taro".to_string())
            ))))
        );
        assert_eq!(
            parse_line("#! PE"),
            Some(RawAction::Marker(Marker::Instruction(Instruction::new("PE", None))))
        );
    }

    #[test]
    fn test_unclosed_bracket_is_plain_description() {
        let a = act("[taro:talk: oops");
        assert_eq!(a.verb(), &Verb::Act(ActType::Do));
        assert_eq!(a.description(), "[taro:talk: oops");
    }
}
