//! Story loader error types.

/// Specific error conditions while reading the project tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LoaderErrorKind {
    /// Failed to read a source file
    #[display("Failed to read {}: {}", path, message)]
    FileRead {
        /// File path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Failed to list a source directory
    #[display("Failed to read directory {}: {}", path, message)]
    DirectoryRead {
        /// Directory path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Front matter or manifest is not valid YAML
    #[display("Failed to parse YAML in {}: {}", path, message)]
    YamlParse {
        /// File path
        path: String,
        /// Parser message
        message: String,
    },
    /// The order manifest does not exist
    #[display("Order manifest not found: {}", _0)]
    MissingOrder(String),
    /// The order manifest has an unusable shape
    #[display("Invalid order manifest: {}", _0)]
    InvalidOrder(String),
    /// An element listed in the manifest has no file
    #[display("Element listed in order manifest has no file: {}", _0)]
    MissingElement(String),
}

/// Error type for story loading.
///
/// # Examples
///
/// ```
/// use storybuilder_error::{LoaderError, LoaderErrorKind};
///
/// let err = LoaderError::new(LoaderErrorKind::MissingOrder("order.yml".to_string()));
/// assert!(format!("{}", err).contains("order.yml"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Loader Error: {} at line {} in {}", kind, line, file)]
pub struct LoaderError {
    /// The specific error condition
    pub kind: LoaderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl LoaderError {
    /// Create a new LoaderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LoaderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
