//! Front-matter splitting.

use serde_yaml::{Mapping, Value};
use storybuilder_error::{LoaderError, LoaderErrorKind};

/// Synthetic key under which the body lines are stored.
pub const MARKDOWN_KEY: &str = "markdown";

const FENCE: &str = "---";

/// Split a Markdown file into its YAML mapping and body lines.
///
/// The YAML block is optional. When present it must start on the first
/// line and end at the next `---` line. The body is stored under
/// [`MARKDOWN_KEY`] as a sequence of lines.
///
/// # Errors
///
/// Returns an error if the YAML block does not parse as a mapping.
///
/// # Examples
///
/// ```
/// use storybuilder_loader::{parse_front_matter, MARKDOWN_KEY};
///
/// let text = "---\ntitle: Opening\n---\n[taro:talk:]Hello\n";
/// let map = parse_front_matter(text, "scene.md").unwrap();
/// assert_eq!(map["title"].as_str(), Some("Opening"));
/// assert_eq!(map[MARKDOWN_KEY][0].as_str(), Some("[taro:talk:]Hello"));
/// ```
pub fn parse_front_matter(text: &str, path: &str) -> Result<Mapping, LoaderError> {
    let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();

    let (yaml, body) = match lines.first() {
        Some(first) if first.trim_end() == FENCE => {
            match lines[1..].iter().position(|l| l.trim_end() == FENCE) {
                Some(end) => (lines[1..=end].join("\n"), &lines[end + 2..]),
                None => {
                    tracing::warn!(path, "Front matter is not closed; treating file as body");
                    (String::new(), &lines[..])
                }
            }
        }
        _ => (String::new(), &lines[..]),
    };

    let mut mapping = if yaml.trim().is_empty() {
        Mapping::new()
    } else {
        match serde_yaml::from_str::<Value>(&yaml).map_err(|e| yaml_error(path, e))? {
            Value::Mapping(m) => m,
            Value::Null => Mapping::new(),
            other => {
                return Err(LoaderError::new(LoaderErrorKind::YamlParse {
                    path: path.to_string(),
                    message: format!("front matter is not a mapping: {:?}", other),
                }));
            }
        }
    };

    let body: Vec<Value> = body.iter().map(|l| Value::String(l.to_string())).collect();
    mapping.insert(Value::String(MARKDOWN_KEY.to_string()), Value::Sequence(body));
    Ok(mapping)
}

pub(crate) fn yaml_error(path: &str, e: serde_yaml::Error) -> LoaderError {
    LoaderError::new(LoaderErrorKind::YamlParse {
        path: path.to_string(),
        message: e.to_string(),
    })
}
