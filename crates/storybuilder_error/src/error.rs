//! Top-level error wrapper types.

use crate::{CompileError, ConfigError, LoaderError, OutputError, ProjectionError};

/// Every error condition the workspace can return.
///
/// # Examples
///
/// ```
/// use storybuilder_error::{ConfigError, StorybuilderError};
///
/// let err: StorybuilderError = ConfigError::new("bad rows").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorybuilderErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Project tree could not be loaded
    #[from(LoaderError)]
    Loader(LoaderError),
    /// Action stream could not be compiled
    #[from(CompileError)]
    Compile(CompileError),
    /// A format projection failed
    #[from(ProjectionError)]
    Projection(ProjectionError),
    /// An output file could not be written
    #[from(OutputError)]
    Output(OutputError),
}

/// Storybuilder error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storybuilder_error::{LoaderError, LoaderErrorKind, StorybuilderErrorKind, StorybuilderResult};
///
/// fn load() -> StorybuilderResult<()> {
///     Err(LoaderError::new(LoaderErrorKind::MissingOrder("order.yml".into())))?
/// }
///
/// let err = load().unwrap_err();
/// assert!(matches!(err.kind(), StorybuilderErrorKind::Loader(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storybuilder Error: {}", _0)]
pub struct StorybuilderError(Box<StorybuilderErrorKind>);

impl StorybuilderError {
    /// Create a new error from a kind.
    pub fn new(kind: StorybuilderErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorybuilderErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StorybuilderErrorKind
impl<T> From<T> for StorybuilderError
where
    T: Into<StorybuilderErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storybuilder operations.
pub type StorybuilderResult<T> = std::result::Result<T, StorybuilderError>;
