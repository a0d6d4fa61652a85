//! Reading element and reference files from a project directory.

use crate::front_matter::{parse_front_matter, yaml_error};
use crate::order::parse_order;
use derive_getters::Getters;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storybuilder_core::{ElementType, NameFields, NameKind, NameRecord, StoryData, StoryRecord};
use storybuilder_error::{LoaderError, LoaderErrorKind, StorybuilderResult};
use tracing::{debug, instrument, warn};

/// Manuscript order manifest file name.
pub const ORDER_FILE: &str = "order.yml";
/// Mob character table file name.
pub const MOBS_FILE: &str = "mobs.yml";
/// Fixed term table file name.
pub const FIXTURES_FILE: &str = "fixtures.yml";

const BOOK_FILE: &str = "book";
const EXTENSION: &str = "md";

/// A story project rooted at a directory.
///
/// # Example Structure
///
/// ```text
/// my-novel/
/// ├── order.yml
/// ├── book.md
/// ├── chapters/   episodes/   scenes/
/// ├── persons/    stages/     items/    words/   events/   times/
/// ├── mobs.yml
/// └── fixtures.yml
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Project {
    /// Project root directory
    root: PathBuf,
}

impl Project {
    /// Create a project handle. Nothing is read until a load method is called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of an element file.
    pub fn element_path(&self, element: ElementType, name: &str) -> PathBuf {
        let file = format!("{}.{}", name, EXTENSION);
        match element.dir() {
            Some(dir) => self.root.join(dir).join(file),
            None => self.root.join(file),
        }
    }

    /// Load every story record in manuscript order.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is missing or malformed, a listed
    /// element has no file, or any file fails to parse.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn load_story(&self) -> StorybuilderResult<StoryData> {
        let order_path = self.root.join(ORDER_FILE);
        if !order_path.is_file() {
            return Err(LoaderError::new(LoaderErrorKind::MissingOrder(
                order_path.display().to_string(),
            ))
            .into());
        }
        let text = read_text(&order_path)?;
        let entries = parse_order(&text, &order_path.display().to_string())?;

        let mut records = Vec::with_capacity(entries.len() + 1);
        records.push(self.load_element(ElementType::Book, BOOK_FILE)?);
        for entry in &entries {
            records.push(self.load_element(*entry.element(), entry.name())?);
        }

        debug!(count = records.len(), "Loaded story records");
        Ok(StoryData::new(records))
    }

    /// Load one element file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or does not parse.
    pub fn load_element(&self, element: ElementType, name: &str) -> StorybuilderResult<StoryRecord> {
        let path = self.element_path(element, name);
        if !path.is_file() {
            return Err(LoaderError::new(LoaderErrorKind::MissingElement(format!(
                "{}/{} ({})",
                element,
                name,
                path.display()
            )))
            .into());
        }
        let data = read_fields(&path)?;
        Ok(StoryRecord::new(element, name, data))
    }

    /// Load every reference file of one kind, sorted by basename.
    ///
    /// A missing directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be read or parsed.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load_names(&self, kind: NameKind) -> StorybuilderResult<Vec<NameRecord>> {
        let dir = self.root.join(kind.dir());
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "No reference directory");
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for path in markdown_files(&dir)? {
            let Some(basename) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!(path = %path.display(), "Skipping file with non UTF-8 name");
                continue;
            };
            let fields: NameFields = read_fields(&path)?;
            records.push(NameRecord::new(kind, basename, fields));
        }
        debug!(count = records.len(), "Loaded reference records");
        Ok(records)
    }

    /// Load a flat `key: display` table such as `mobs.yml`.
    ///
    /// A missing file yields an empty table. Non-string values are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load_name_table(&self, file: &str) -> StorybuilderResult<BTreeMap<String, String>> {
        let path = self.root.join(file);
        if !path.is_file() {
            return Ok(BTreeMap::new());
        }
        let text = read_text(&path)?;
        let value: Value =
            serde_yaml::from_str(&text).map_err(|e| yaml_error(&path.display().to_string(), e))?;

        let mut table = BTreeMap::new();
        if let Value::Mapping(map) = value {
            for (key, value) in map {
                match (scalar_text(&key), scalar_text(&value)) {
                    (Some(k), Some(v)) => {
                        table.insert(k, v);
                    }
                    _ => warn!(?key, file, "Skipping non-scalar name table entry"),
                }
            }
        }
        Ok(table)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn read_text(path: &Path) -> Result<String, LoaderError> {
    std::fs::read_to_string(path).map_err(|e| {
        LoaderError::new(LoaderErrorKind::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })
}

fn read_fields<T: DeserializeOwned>(path: &Path) -> Result<T, LoaderError> {
    let display = path.display().to_string();
    let text = read_text(path)?;
    let mapping = parse_front_matter(&text, &display)?;
    serde_yaml::from_value(Value::Mapping(mapping)).map_err(|e| yaml_error(&display, e))
}

fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, LoaderError> {
    let read_error = |e: std::io::Error| {
        LoaderError::new(LoaderErrorKind::DirectoryRead {
            path: dir.display().to_string(),
            message: e.to_string(),
        })
    };
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
