//! Output file writer.

use std::path::{Path, PathBuf};
use storybuilder_error::{OutputError, OutputErrorKind, StorybuilderResult};

/// Write rendered text to `dir/file`, creating `dir` if needed.
///
/// Existing files are overwritten.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
#[tracing::instrument(skip(text), fields(dir = %dir.as_ref().display(), bytes = text.len()))]
pub fn write_output(dir: impl AsRef<Path>, file: &str, text: &str) -> StorybuilderResult<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| {
        OutputError::new(OutputErrorKind::DirectoryCreation(format!(
            "{}: {}",
            dir.display(),
            e
        )))
    })?;

    let path = dir.join(file);
    std::fs::write(&path, text).map_err(|e| {
        OutputError::new(OutputErrorKind::FileWrite(format!("{}: {}", path.display(), e)))
    })?;

    tracing::debug!(path = %path.display(), "Wrote output file");
    Ok(path)
}
