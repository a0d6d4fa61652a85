//! Markdown fragments shared by the renderers.

/// Horizontal rule separating report sections.
pub const RULE: &str = "----------------------------------------------------------------";

/// Indent before a novel description.
pub const NOVEL_INDENT: &str = "　";

/// Indent before a script stage direction.
pub const SCRIPT_INDENT: &str = "　　　";

/// Book title heading.
pub(crate) fn book_title(title: &str) -> String {
    format!("\n# {}\n\n", title)
}

/// Chapter title heading.
pub(crate) fn chapter_title(title: &str) -> String {
    format!("\n## {}\n\n", title)
}

/// Episode title heading.
pub(crate) fn episode_title(title: &str) -> String {
    format!("\n### {}\n\n", title)
}

/// Scene title line.
pub(crate) fn scene_title(title: &str) -> String {
    format!("\n**{}**\n\n", title)
}

/// HTML comment line.
pub(crate) fn comment(text: &str) -> String {
    format!("<!-- {} -->\n", text)
}

/// Dialogue brackets.
pub(crate) fn talk(text: &str) -> String {
    format!("「{}」", text)
}

/// Monologue brackets.
pub(crate) fn think(text: &str) -> String {
    format!("『{}』", text)
}

/// Join rendered fragments into file text.
pub(crate) fn finish(parts: impl IntoIterator<Item = String>) -> String {
    let text: String = parts.into_iter().collect();
    let mut text = text.trim_start_matches('\n').to_string();
    if !text.ends_with('\n') && !text.is_empty() {
        text.push('\n');
    }
    text
}
