//! Break-mode layout shared by the novel and script projectors.
//!
//! Outside a paragraph ("break mode") every body unit stands on its own
//! line: an indent precedes indentable units and a break follows each one.
//! Between paragraph-start and paragraph-end, units are concatenated and
//! only the first indentable unit is indented. A paragraph is closed by
//! paragraph-end, an explicit break, a title or a scene boundary, and the
//! close emits exactly one break if the paragraph produced output.

/// How a record takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Heading-like record on its own line
    Title,
    /// Renderable body text
    Body {
        /// Whether an indent may precede it
        indentable: bool,
    },
    /// Opens a paragraph
    ParagraphStart,
    /// Closes a paragraph
    ParagraphEnd,
    /// Explicit line break
    Break,
    /// End of a scene
    Boundary,
    /// Passed through without affecting layout
    Passive,
}

/// A record sequence the layout pass can arrange.
pub(crate) trait Flowing: Sized {
    /// Layout role of this record.
    fn flow(&self) -> Flow;
    /// The line-break record.
    fn line_break() -> Self;
    /// The indent record.
    fn indent() -> Self;
}

#[derive(Debug, Default)]
struct Paragraph {
    open: bool,
    produced: bool,
}

impl Paragraph {
    fn close<R: Flowing>(&mut self, out: &mut Vec<R>) {
        if self.open && self.produced {
            out.push(R::line_break());
        }
        self.open = false;
        self.produced = false;
    }
}

/// Insert indents and breaks; consume paragraph and break control records.
pub(crate) fn layout<R: Flowing>(records: Vec<R>) -> Vec<R> {
    let mut out = Vec::with_capacity(records.len() * 2);
    let mut paragraph = Paragraph::default();

    for record in records {
        match record.flow() {
            Flow::Title => {
                paragraph.close(&mut out);
                out.push(record);
            }
            Flow::Boundary => {
                paragraph.close(&mut out);
                out.push(record);
            }
            Flow::ParagraphStart => {
                paragraph.close(&mut out);
                paragraph.open = true;
            }
            Flow::ParagraphEnd => paragraph.close(&mut out),
            Flow::Break => {
                if paragraph.open {
                    paragraph.close(&mut out);
                } else {
                    out.push(R::line_break());
                }
            }
            Flow::Body { indentable } => {
                if paragraph.open {
                    if indentable && !paragraph.produced {
                        out.push(R::indent());
                    }
                    out.push(record);
                    paragraph.produced = true;
                } else {
                    if indentable {
                        out.push(R::indent());
                    }
                    out.push(record);
                    out.push(R::line_break());
                }
            }
            Flow::Passive => out.push(record),
        }
    }
    paragraph.close(&mut out);
    out
}
