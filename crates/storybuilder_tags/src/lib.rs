//! Name-tag resolution for Storybuilder.
//!
//! Builds two lookup tables from the project's reference files:
//!
//! - a flat **tag map** from short keys (`taro`, `n_taro`, `full_taro`,
//!   `park`, `mob3`, ...) to display strings
//! - a **calling map** giving, per person, how that person addresses
//!   others (plus the synthetic `S` and `M` entries)
//!
//! Both are built once per run and handed to the projectors through a
//! [`TagResolver`].
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use storybuilder_core::{NameFields, NameKind, NameRecord};
//! use storybuilder_tags::{NameSources, TagConfig, TagResolver};
//!
//! let taro = NameRecord::new(
//!     NameKind::Person,
//!     "taro",
//!     NameFields::person("Taro", "Yamada,Taro", BTreeMap::new(), None),
//! );
//! let sources = NameSources::new(vec![taro], BTreeMap::new(), BTreeMap::new());
//! let resolver = TagResolver::build(&sources, &TagConfig::default());
//!
//! assert_eq!(resolver.tags().get("full_taro"), Some("YamadaTaro"));
//! assert_eq!(resolver.text("taro", "$M am $full_taro"), "私 am YamadaTaro");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod resolver;
mod tables;

pub use config::TagConfig;
pub use resolver::TagResolver;
pub use tables::{NameSources, build_calling_map, build_tag_map, fullwidth_digits};
