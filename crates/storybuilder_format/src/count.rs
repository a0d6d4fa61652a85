//! Manuscript-paper character counting.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storybuilder_error::ConfigError;

/// Manuscript paper dimensions, from the `[count]` configuration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CountConfig {
    /// Characters per line
    #[serde(default = "default_columns")]
    columns: usize,

    /// Lines per page
    #[serde(default = "default_rows")]
    rows: usize,
}

fn default_columns() -> usize {
    20
}

fn default_rows() -> usize {
    20
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
        }
    }
}

impl CountConfig {
    /// Create a config.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Check that both dimensions are positive.
    ///
    /// # Errors
    ///
    /// Returns an error if columns or rows is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::new("count.columns must be positive"));
        }
        if self.rows == 0 {
            return Err(ConfigError::new("count.rows must be positive"));
        }
        Ok(())
    }
}

/// Character and page estimate for one rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct CountResult {
    /// Characters, excluding line breaks
    total: usize,
    /// Whitespace characters, including U+3000
    space: usize,
    /// `total - space`
    real: usize,
    /// Estimated manuscript lines
    lines: f64,
    /// Estimated manuscript pages
    pages: f64,
}

/// Estimated manuscript lines for `text`.
///
/// Each line counts 1 when it fits in `columns`, otherwise its length
/// divided by `columns` as a float. A trailing line break does not
/// start another line.
///
/// # Examples
///
/// ```
/// use storybuilder_format::count_lines;
///
/// assert_eq!(count_lines(&"a".repeat(100), 40), 2.5);
/// assert_eq!(count_lines("short\nlines", 40), 2.0);
/// assert_eq!(count_lines("short\n", 40), 1.0);
/// ```
pub fn count_lines(text: &str, columns: usize) -> f64 {
    let columns = columns.max(1);
    text.lines()
        .map(|line| {
            let len = line.chars().count();
            if len <= columns {
                1.0
            } else {
                len as f64 / columns as f64
            }
        })
        .sum()
}

/// Count `text` against the manuscript paper in `config`.
pub fn count_text(text: &str, config: &CountConfig) -> CountResult {
    let (total, space) = text
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .fold((0, 0), |(total, space), c| {
            (total + 1, space + usize::from(c.is_whitespace()))
        });
    let lines = count_lines(text, config.columns);
    CountResult {
        total,
        space,
        real: total - space,
        lines,
        pages: lines / config.rows.max(1) as f64,
    }
}
