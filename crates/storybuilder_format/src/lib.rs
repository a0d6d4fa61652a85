//! Format projectors and renderers for Storybuilder.
//!
//! Each projector turns the compiled action stream (novel, script, info)
//! or the story records (outline, plot) into its own record type, in
//! passes:
//!
//! 1. **Base**: re-tag actions into the format's vocabulary
//! 2. **Tags**: substitute name tags and calling terms
//! 3. **Cleanup**: drop blank comments and empty body records
//! 4. **Layout** (novel and script): break-mode indentation and breaks
//!
//! Renderers turn record slices into Markdown. [`count_text`] estimates
//! manuscript pages for the data report.
//!
//! # Example
//!
//! ```
//! use storybuilder_core::{Act, ActType, Action, ActionsData, Marker};
//! use storybuilder_format::{project_novel, render_novel};
//! use storybuilder_tags::TagResolver;
//!
//! let talk = Act::builder()
//!     .act_type(ActType::Talk)
//!     .subject("taro")
//!     .description("Hello there")
//!     .build()
//!     .unwrap();
//! let actions = ActionsData::new(vec![
//!     Action::Marker(Marker::SceneStart),
//!     Action::Act(talk),
//!     Action::Marker(Marker::SceneEnd),
//! ]);
//!
//! let novel = project_novel(&actions, &TagResolver::default()).unwrap();
//! assert_eq!(render_novel(&novel), "「Hello there」\n");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod contents;
mod count;
mod head;
mod info;
mod layout;
mod novel;
mod outline;
mod projector;
mod render;
mod report;
mod script;

pub use contents::{ContentsEntry, project_contents, render_contents};
pub use count::{CountConfig, CountResult, count_lines, count_text};
pub use head::{Mark, SceneHead, transition_marks};
pub use info::{InfoRecord, SceneInfo, project_info, render_info};
pub use novel::{NovelRecord, novel_body, project_novel, render_novel};
pub use outline::{
    OutlineRecord, PlotRecord, project_outline, project_plot, render_outline, render_plot,
};
pub use projector::Format;
pub use render::{NOVEL_INDENT, RULE, SCRIPT_INDENT};
pub use report::{action_stats, render_data};
pub use script::{ScriptRecord, project_script, render_script, script_body};
