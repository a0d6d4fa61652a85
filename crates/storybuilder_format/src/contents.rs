//! Numbered table of contents.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storybuilder_core::{ElementType, StoryData};
use storybuilder_tags::TagResolver;

/// One contents line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ContentsEntry {
    /// Element kind
    element: ElementType,
    /// Hierarchical number such as `2-1-3`; empty for the book
    number: String,
    /// Title
    title: String,
}

/// Number chapters, episodes within a chapter and scenes within an episode.
///
/// # Examples
///
/// ```
/// use storybuilder_core::{ElementType, StoryData, StoryFields, StoryRecord};
/// use storybuilder_format::project_contents;
/// use storybuilder_tags::TagResolver;
///
/// let record = |e, name: &str| {
///     let fields = StoryFields::builder().title(name).build().unwrap();
///     StoryRecord::new(e, name, fields)
/// };
/// let story = StoryData::new(vec![
///     record(ElementType::Chapter, "one"),
///     record(ElementType::Episode, "a"),
///     record(ElementType::Scene, "x"),
///     record(ElementType::Scene, "y"),
/// ]);
/// let contents = project_contents(&story, &TagResolver::default());
/// assert_eq!(contents[3].number(), "1-1-2");
/// ```
pub fn project_contents(story: &StoryData, resolver: &TagResolver) -> Vec<ContentsEntry> {
    let (mut chapter, mut episode, mut scene) = (0usize, 0usize, 0usize);
    story
        .iter()
        .map(|record| {
            let number = match record.element() {
                ElementType::Book => String::new(),
                ElementType::Chapter => {
                    chapter += 1;
                    episode = 0;
                    scene = 0;
                    chapter.to_string()
                }
                ElementType::Episode => {
                    episode += 1;
                    scene = 0;
                    format!("{}-{}", chapter, episode)
                }
                ElementType::Scene => {
                    scene += 1;
                    format!("{}-{}-{}", chapter, episode, scene)
                }
            };
            ContentsEntry {
                element: *record.element(),
                number,
                title: resolver.text("", record.data().title()),
            }
        })
        .collect()
}

/// Render contents as a nested list.
pub fn render_contents(entries: &[ContentsEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let depth = match entry.element {
            ElementType::Book => {
                out.push_str(&format!("# {}\n\n", entry.title));
                continue;
            }
            ElementType::Chapter => 0,
            ElementType::Episode => 1,
            ElementType::Scene => 2,
        };
        out.push_str(&format!(
            "{}- {}. {}\n",
            "  ".repeat(depth),
            entry.number,
            entry.title
        ));
    }
    out
}
