//! Tag resolver configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storybuilder_error::ConfigError;

/// Settings for the `[tags]` configuration section.
///
/// # Examples
///
/// ```
/// use storybuilder_tags::TagConfig;
///
/// let config = TagConfig::default();
/// assert_eq!(*config.mob_count(), 9);
/// assert_eq!(config.tag_prefix(), "$");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TagConfig {
    /// Number of numbered copies registered per mob entry
    #[serde(default = "default_mob_count")]
    mob_count: u32,

    /// Default `M` calling value for persons without `me`
    #[serde(default = "default_self_reference")]
    self_reference: String,

    /// Marker that introduces a tag reference in prose
    #[serde(default = "default_tag_prefix")]
    tag_prefix: String,
}

fn default_mob_count() -> u32 {
    9
}

fn default_self_reference() -> String {
    "私".to_string()
}

fn default_tag_prefix() -> String {
    "$".to_string()
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            mob_count: default_mob_count(),
            self_reference: default_self_reference(),
            tag_prefix: default_tag_prefix(),
        }
    }
}

impl TagConfig {
    /// Create a config from explicit values.
    pub fn new(
        mob_count: u32,
        self_reference: impl Into<String>,
        tag_prefix: impl Into<String>,
    ) -> Self {
        Self {
            mob_count,
            self_reference: self_reference.into(),
            tag_prefix: tag_prefix.into(),
        }
    }

    /// Check that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag prefix is empty. Without a prefix every
    /// key would match inside ordinary words.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tag_prefix.is_empty() {
            return Err(ConfigError::new("tags.tag_prefix must not be empty"));
        }
        Ok(())
    }
}
