//! Order manifest parsing.
//!
//! ```yaml
//! book:
//!   - chapter/ch01:
//!       - episode/ep01:
//!           - scene/sc01
//!           - scene/sc02
//! ```

use crate::front_matter::yaml_error;
use serde_yaml::Value;
use std::str::FromStr;
use storybuilder_core::ElementType;
use storybuilder_error::{LoaderError, LoaderErrorKind};
use tracing::warn;

const ROOT_KEY: &str = "book";

/// One element reference in manuscript order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct OrderEntry {
    /// Element kind
    element: ElementType,
    /// File stem
    name: String,
}

impl OrderEntry {
    /// Create an entry.
    pub fn new(element: ElementType, name: impl Into<String>) -> Self {
        Self {
            element,
            name: name.into(),
        }
    }
}

/// Parse an order manifest into a depth-first list of element references.
///
/// The book itself is not listed; callers prepend it. Entries whose kind
/// is not chapter/episode/scene are skipped together with their children.
///
/// # Errors
///
/// Returns an error if the text is not YAML or has no `book` key.
///
/// # Examples
///
/// ```
/// use storybuilder_loader::parse_order;
/// use storybuilder_core::ElementType;
///
/// let entries = parse_order("book:\n  - chapter/c1:\n      - scene/s1\n", "order.yml").unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].element(), &ElementType::Scene);
/// assert_eq!(entries[1].name(), "s1");
/// ```
pub fn parse_order(text: &str, path: &str) -> Result<Vec<OrderEntry>, LoaderError> {
    let root: Value = serde_yaml::from_str(text).map_err(|e| yaml_error(path, e))?;
    let children = match &root {
        Value::Mapping(m) => m.get(ROOT_KEY).ok_or_else(|| {
            LoaderError::new(LoaderErrorKind::InvalidOrder(format!(
                "{}: missing '{}' key",
                path, ROOT_KEY
            )))
        })?,
        _ => {
            return Err(LoaderError::new(LoaderErrorKind::InvalidOrder(format!(
                "{}: top level is not a mapping",
                path
            ))));
        }
    };

    let mut entries = Vec::new();
    collect(children, &mut entries);
    Ok(entries)
}

fn collect(node: &Value, entries: &mut Vec<OrderEntry>) {
    match node {
        Value::Null => {}
        Value::Sequence(items) => {
            for item in items {
                collect(item, entries);
            }
        }
        Value::String(reference) => {
            if let Some(entry) = parse_reference(reference) {
                entries.push(entry);
            }
        }
        Value::Mapping(map) => {
            for (key, children) in map {
                let Some(reference) = key.as_str() else {
                    warn!(?key, "Skipping non-string order entry");
                    continue;
                };
                if let Some(entry) = parse_reference(reference) {
                    entries.push(entry);
                    collect(children, entries);
                }
            }
        }
        other => warn!(?other, "Skipping unrecognised order entry"),
    }
}

fn parse_reference(reference: &str) -> Option<OrderEntry> {
    let Some((kind, name)) = reference.trim().split_once('/') else {
        warn!(reference, "Order entry is not of the form kind/name");
        return None;
    };
    match ElementType::from_str(kind) {
        Ok(ElementType::Book) | Err(_) => {
            warn!(reference, kind, "Unknown element kind in order manifest");
            None
        }
        Ok(element) if !name.is_empty() => Some(OrderEntry::new(element, name)),
        Ok(_) => {
            warn!(reference, "Order entry has an empty name");
            None
        }
    }
}
