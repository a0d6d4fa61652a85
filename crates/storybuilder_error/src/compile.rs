//! Action compiler error types.

/// Missing-data conditions raised while compiling the action stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CompileErrorKind {
    /// No story records were supplied
    #[display("No story records to compile")]
    NoStoryRecords,
    /// The base conversion produced no actions
    #[display("Base conversion produced no actions")]
    NoActions,
    /// Same-as-previous resolution left nothing
    #[display("Resolved action stream is empty")]
    NoResolvedActions,
}

/// Error type for action compilation.
///
/// # Examples
///
/// ```
/// use storybuilder_error::{CompileError, CompileErrorKind};
///
/// let err = CompileError::new(CompileErrorKind::NoActions);
/// assert!(format!("{}", err).contains("no actions"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Compile Error: {} at line {} in {}", kind, line, file)]
pub struct CompileError {
    /// The specific error condition
    pub kind: CompileErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CompileError {
    /// Create a new CompileError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompileErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
