//! Format projection error types.

/// Missing-data conditions raised by a format projector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProjectionErrorKind {
    /// The projector received no input records
    #[display("No input records for {} projection", _0)]
    EmptyInput(String),
    /// The projector produced nothing to render
    #[display("{} projection produced no records", _0)]
    EmptyOutput(String),
}

/// Error type for format projection.
///
/// # Examples
///
/// ```
/// use storybuilder_error::{ProjectionError, ProjectionErrorKind};
///
/// let err = ProjectionError::new(ProjectionErrorKind::EmptyOutput("novel".to_string()));
/// assert!(format!("{}", err).contains("novel"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Projection Error: {} at line {} in {}", kind, line, file)]
pub struct ProjectionError {
    /// The specific error condition
    pub kind: ProjectionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ProjectionError {
    /// Create a new ProjectionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProjectionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
