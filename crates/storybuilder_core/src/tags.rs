//! Tag tables and the text substitution helper.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat tag key -> display string table, sorted by key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagMap(BTreeMap<String, String>);

impl TagMap {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key. Later registrations win.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Underlying mapping.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    /// Merge another table in, overwriting duplicate keys.
    pub fn extend(&mut self, other: TagMap) {
        self.0.extend(other.0);
    }
}

impl FromIterator<(String, String)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Per-person calling tables: person key -> (alias -> address term).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallingMap(BTreeMap<String, BTreeMap<String, String>>);

impl CallingMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a person's calling table.
    pub fn insert(&mut self, person: impl Into<String>, table: BTreeMap<String, String>) {
        self.0.insert(person.into(), table);
    }

    /// Calling table for a person key.
    pub fn get(&self, person: &str) -> Option<&BTreeMap<String, String>> {
        self.0.get(person)
    }

    /// Whether the key names a known person.
    pub fn contains(&self, person: &str) -> bool {
        self.0.contains_key(person)
    }

    /// Number of persons.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no persons are registered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Replace every `prefix + key` occurrence in `text` with its mapped value.
///
/// Matching is by substring, scanning left to right and preferring the
/// longest key at each position, so `$taro_b` is never split by `$taro`.
/// Replaced text is not rescanned. An empty prefix matches bare keys.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use storybuilder_core::translate;
///
/// let mut dict = BTreeMap::new();
/// dict.insert("taro".to_string(), "Taro".to_string());
/// dict.insert("taro_b".to_string(), "Big Taro".to_string());
///
/// assert_eq!(translate("$taro met $taro_b", &dict, "$"), "Taro met Big Taro");
/// assert_eq!(translate("no tags", &dict, "$"), "no tags");
/// ```
pub fn translate(text: &str, dict: &BTreeMap<String, String>, prefix: &str) -> String {
    if dict.is_empty() || text.is_empty() {
        return text.to_string();
    }
    let mut keys: Vec<(&str, &str)> = dict
        .iter()
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if let Some(after_prefix) = rest.strip_prefix(prefix) {
            if let Some((key, value)) = keys.iter().find(|(k, _)| after_prefix.starts_with(k)) {
                out.push_str(value);
                rest = &after_prefix[key.len()..];
                continue;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}
