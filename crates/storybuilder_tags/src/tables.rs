//! Building the tag and calling tables from reference records.

use derive_getters::Getters;
use std::collections::BTreeMap;
use storybuilder_core::{CallingMap, NameKind, NameRecord, TagMap};
use storybuilder_error::StorybuilderResult;
use storybuilder_loader::{FIXTURES_FILE, MOBS_FILE, Project};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Kinds that register both a bare and a prefixed key, in merge order.
const PREFIXED_KINDS: [NameKind; 5] = [
    NameKind::Event,
    NameKind::Item,
    NameKind::Person,
    NameKind::Stage,
    NameKind::Word,
];

const CALLING_SELF: &str = "S";
const CALLING_ME: &str = "M";

/// Every reference record feeding the tag tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct NameSources {
    /// Person/stage/item/word/event/time records
    records: Vec<NameRecord>,
    /// Mob key -> display name
    mobs: BTreeMap<String, String>,
    /// Fixed term key -> display name
    fixtures: BTreeMap<String, String>,
}

impl NameSources {
    /// Bundle already-loaded sources.
    pub fn new(
        records: Vec<NameRecord>,
        mobs: BTreeMap<String, String>,
        fixtures: BTreeMap<String, String>,
    ) -> Self {
        Self {
            records,
            mobs,
            fixtures,
        }
    }

    /// Read every reference kind plus the mob and fixture tables.
    ///
    /// # Errors
    ///
    /// Returns an error if a reference file exists but cannot be parsed.
    #[instrument(skip_all, fields(root = %project.root().display()))]
    pub fn load(project: &Project) -> StorybuilderResult<Self> {
        let mut records = Vec::new();
        for kind in NameKind::iter() {
            records.extend(project.load_names(kind)?);
        }
        let mobs = project.load_name_table(MOBS_FILE)?;
        let fixtures = project.load_name_table(FIXTURES_FILE)?;
        debug!(
            records = records.len(),
            mobs = mobs.len(),
            fixtures = fixtures.len(),
            "Loaded name sources"
        );
        Ok(Self::new(records, mobs, fixtures))
    }

    fn of_kind(&self, kind: NameKind) -> impl Iterator<Item = &NameRecord> {
        self.records.iter().filter(move |r| *r.kind() == kind)
    }
}

/// Convert ASCII digits to their full-width forms.
///
/// # Examples
///
/// ```
/// use storybuilder_tags::fullwidth_digits;
///
/// assert_eq!(fullwidth_digits("mob12"), "mob１２");
/// ```
pub fn fullwidth_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32('０' as u32 + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Build the flat tag map.
///
/// Event, item, person, stage and word records register `basename` and
/// `<prefix>basename`. Persons add `fn_`, `ln_`, `full_` and `efull_`
/// keys from their `fullname`. Times, fixtures and mobs are merged in
/// last without prefix variants; a later source overwrites an earlier
/// key.
#[instrument(skip_all, fields(records = sources.records().len()))]
pub fn build_tag_map(sources: &NameSources, config: &crate::TagConfig) -> TagMap {
    let mut tags = TagMap::new();

    for kind in PREFIXED_KINDS {
        for record in sources.of_kind(kind) {
            let name = display_name(record);
            if let Some(prefix) = kind.tag_prefix() {
                tags.insert(format!("{}{}", prefix, record.basename()), name.clone());
            }
            if kind == NameKind::Person {
                register_person(&mut tags, record, &name);
            }
            tags.insert(record.basename().clone(), name);
        }
    }

    for record in sources.of_kind(NameKind::Time) {
        tags.insert(record.basename().clone(), display_name(record));
    }
    for (key, value) in sources.fixtures() {
        tags.insert(key.clone(), value.clone());
    }
    for (key, value) in sources.mobs() {
        tags.insert(key.clone(), value.clone());
        for i in 1..=*config.mob_count() {
            tags.insert(
                format!("{}{}", key, i),
                format!("{}{}", value, fullwidth_digits(&i.to_string())),
            );
        }
    }

    debug!(tags = tags.len(), "Built tag map");
    tags
}

/// Build the per-person calling tables.
///
/// Each person's `calling` mapping gets `S` set to the person's display
/// name and `M` set to `me`, falling back to the configured
/// self-reference term.
pub fn build_calling_map(sources: &NameSources, config: &crate::TagConfig) -> CallingMap {
    let mut callings = CallingMap::new();
    for record in sources.of_kind(NameKind::Person) {
        let fields = record.fields();
        let mut table = fields.calling().clone();
        table.insert(CALLING_SELF.to_string(), display_name(record));
        let me = fields
            .me()
            .clone()
            .unwrap_or_else(|| config.self_reference().clone());
        table.insert(CALLING_ME.to_string(), me);
        callings.insert(record.basename().clone(), table);
    }
    debug!(persons = callings.len(), "Built calling map");
    callings
}

fn display_name(record: &NameRecord) -> String {
    let name = record.fields().name().trim();
    if name.is_empty() {
        warn!(
            kind = %record.kind(),
            basename = %record.basename(),
            "Reference has no name; using basename"
        );
        record.basename().clone()
    } else {
        name.to_string()
    }
}

fn register_person(tags: &mut TagMap, record: &NameRecord, name: &str) {
    let (family, given) = match record.fields().fullname().split_once(',') {
        Some((family, given)) => (family.trim(), given.trim()),
        None => ("", name),
    };
    let key = record.basename();
    let english = if family.is_empty() {
        given.to_string()
    } else {
        format!("{} {}", given, family)
    };

    tags.insert(format!("fn_{}", key), given);
    tags.insert(format!("ln_{}", key), family);
    tags.insert(format!("full_{}", key), format!("{}{}", family, given));
    tags.insert(format!("efull_{}", key), english);
}
