//! Person/stage/item/word/event/time reference records.

use crate::NameKind;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declared fields of one reference file.
///
/// Only the fields the tag resolver needs are typed; everything else in
/// the front matter is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct NameFields {
    /// Short display name
    #[serde(default, deserialize_with = "crate::scalar::text")]
    name: String,
    /// Full name as `family,given`
    #[serde(default, deserialize_with = "crate::scalar::text")]
    fullname: String,
    /// How this person addresses others: alias -> address term
    #[serde(default)]
    calling: BTreeMap<String, String>,
    /// Self-reference term
    #[serde(default)]
    me: Option<String>,
}

impl NameFields {
    /// Create fields for a non-person reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create fields for a person.
    pub fn person(
        name: impl Into<String>,
        fullname: impl Into<String>,
        calling: BTreeMap<String, String>,
        me: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            fullname: fullname.into(),
            calling,
            me,
        }
    }
}

/// One reference file: its kind, basename and declared fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct NameRecord {
    /// Reference kind
    kind: NameKind,
    /// File stem, used as the tag key
    basename: String,
    /// Declared fields
    fields: NameFields,
}

impl NameRecord {
    /// Create a record.
    pub fn new(kind: NameKind, basename: impl Into<String>, fields: NameFields) -> Self {
        Self {
            kind,
            basename: basename.into(),
            fields,
        }
    }
}
