//! Applying the tag tables to projected text.

use crate::{NameSources, TagConfig, build_calling_map, build_tag_map};
use derive_getters::Getters;
use storybuilder_core::{CallingMap, TagMap, translate};

/// Tag and calling tables plus the reference prefix, built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct TagResolver {
    /// Flat tag map
    tags: TagMap,
    /// Per-person calling tables
    callings: CallingMap,
    /// Prefix marking a reference in text
    prefix: String,
}

impl TagResolver {
    /// Wrap already-built tables.
    pub fn new(tags: TagMap, callings: CallingMap, prefix: impl Into<String>) -> Self {
        Self {
            tags,
            callings,
            prefix: prefix.into(),
        }
    }

    /// Build both tables from loaded sources.
    pub fn build(sources: &NameSources, config: &TagConfig) -> Self {
        Self::new(
            build_tag_map(sources, config),
            build_calling_map(sources, config),
            config.tag_prefix().clone(),
        )
    }

    /// Resolve a subject field.
    ///
    /// An exact tag key maps straight to its display string; anything
    /// else gets prefixed-reference substitution.
    pub fn subject(&self, subject: &str) -> String {
        match self.tags.get(subject) {
            Some(name) => name.to_string(),
            None => translate(subject, self.tags.as_map(), &self.prefix),
        }
    }

    /// Substitute references in text spoken or performed by `subject`.
    ///
    /// When `subject` is a person key, that person's calling table joins
    /// the flat tag map for a single longest-key-first pass; calling
    /// entries win on equal keys. Calling values may themselves contain
    /// tag references, which are resolved against the flat map.
    pub fn text(&self, subject: &str, text: &str) -> String {
        match self.callings.get(subject) {
            Some(calling) => {
                let mut dict = self.tags.as_map().clone();
                dict.extend(calling.iter().map(|(key, value)| {
                    (key.clone(), translate(value, self.tags.as_map(), &self.prefix))
                }));
                translate(text, &dict, &self.prefix)
            }
            None => translate(text, self.tags.as_map(), &self.prefix),
        }
    }

    /// Whether `key` names a known person.
    pub fn is_person(&self, key: &str) -> bool {
        self.callings.contains(key)
    }
}
