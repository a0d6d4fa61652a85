//! Layered configuration for Storybuilder.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from storybuilder.toml)
//! - `~/.config/storybuilder/storybuilder.toml` (optional)
//! - `<project>/storybuilder.toml` (optional)
//!
//! An explicit configuration file replaces the two optional layers.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use storybuilder_error::{ConfigError, StorybuilderError, StorybuilderResult};
use storybuilder_format::{CountConfig, Format};
use storybuilder_tags::TagConfig;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../storybuilder.toml");

/// Name of the per-project and per-user configuration file.
pub const CONFIG_FILE: &str = "storybuilder.toml";

/// Output locations from the `[build]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BuildConfig {
    /// Output directory, relative to the project root
    #[serde(default = "default_output_dir")]
    output_dir: String,
    /// Outline file name
    #[serde(default = "default_outline_file")]
    outline_file: String,
    /// Plot file name
    #[serde(default = "default_plot_file")]
    plot_file: String,
    /// Script file name
    #[serde(default = "default_script_file")]
    script_file: String,
    /// Novel file name
    #[serde(default = "default_novel_file")]
    novel_file: String,
    /// Scene-info file name
    #[serde(default = "default_info_file")]
    info_file: String,
    /// Data report file name
    #[serde(default = "default_data_file")]
    data_file: String,
}

fn default_output_dir() -> String {
    "build".to_string()
}

fn default_outline_file() -> String {
    "outline.md".to_string()
}

fn default_plot_file() -> String {
    "plot.md".to_string()
}

fn default_script_file() -> String {
    "script.md".to_string()
}

fn default_novel_file() -> String {
    "novel.md".to_string()
}

fn default_info_file() -> String {
    "info.md".to_string()
}

fn default_data_file() -> String {
    "data.md".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            outline_file: default_outline_file(),
            plot_file: default_plot_file(),
            script_file: default_script_file(),
            novel_file: default_novel_file(),
            info_file: default_info_file(),
            data_file: default_data_file(),
        }
    }
}

impl BuildConfig {
    /// Output file name for a format.
    pub fn file_for(&self, format: Format) -> &str {
        match format {
            Format::Outline => &self.outline_file,
            Format::Plot => &self.plot_file,
            Format::Script => &self.script_file,
            Format::Novel => &self.novel_file,
            Format::Info => &self.info_file,
        }
    }
}

/// Complete Storybuilder configuration.
///
/// # Example
///
/// ```
/// use storybuilder::StorybuilderConfig;
///
/// let config = StorybuilderConfig::bundled().unwrap();
/// assert_eq!(config.build().output_dir(), "build");
/// assert_eq!(*config.count().columns(), 20);
/// assert_eq!(config.tags().self_reference(), "私");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct StorybuilderConfig {
    /// Output locations
    #[serde(default)]
    build: BuildConfig,
    /// Manuscript paper dimensions
    #[serde(default)]
    count: CountConfig,
    /// Tag resolution settings
    #[serde(default)]
    tags: TagConfig,
}

fn build_error(e: config::ConfigError) -> StorybuilderError {
    StorybuilderError::from(ConfigError::new(format!(
        "Failed to build configuration: {}",
        e
    )))
}

fn parse_error(e: config::ConfigError) -> StorybuilderError {
    StorybuilderError::from(ConfigError::new(format!(
        "Failed to parse configuration: {}",
        e
    )))
}

impl StorybuilderConfig {
    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file does not parse.
    pub fn bundled() -> StorybuilderResult<Self> {
        Self::from_builder(
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
        )
    }

    /// Bundled defaults overridden by one explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StorybuilderResult<Self> {
        debug!("Loading configuration from file");
        Self::from_builder(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load with precedence: project file > user file > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be parsed, or the merged
    /// settings are invalid.
    #[instrument(skip(project_root), fields(root = %project_root.as_ref().display()))]
    pub fn load(project_root: impl AsRef<Path>) -> StorybuilderResult<Self> {
        debug!("Loading configuration with precedence: project > home > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storybuilder").join(CONFIG_FILE);
            builder = builder.add_source(File::from(home_config).required(false));
        }

        let project_config = project_root.as_ref().join(CONFIG_FILE);
        builder = builder.add_source(File::from(project_config).required(false));

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> StorybuilderResult<Self> {
        let config: Self = builder
            .build()
            .map_err(build_error)?
            .try_deserialize()
            .map_err(parse_error)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.count.validate()?;
        self.tags.validate()?;
        if self.build.output_dir.trim().is_empty() {
            return Err(ConfigError::new("build.output_dir must not be empty"));
        }
        Ok(())
    }
}
