//! Importer configuration
//!
//! [`ImportConfig`] carries every knob the auto-split import reads. It is
//! immutable once handed to the importer and validated eagerly, so invalid
//! widths or block sizes are reported before any text is scanned.
//!
//! # Examples
//!
//! ```rust
//! use subsplit_core::ImportConfig;
//!
//! let config = ImportConfig::builder()
//!     .max_line_length(37)
//!     .lines_per_block(2)
//!     .sentence_end_chars(".!?")
//!     .language("en")
//!     .build()?;
//!
//! assert_eq!(config.max_aggregate_length(), 74);
//! # Ok::<(), subsplit_core::CoreError>(())
//! ```

use crate::utils::errors::{CoreError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default maximum characters per subtitle line
pub const DEFAULT_MAX_LINE_LENGTH: usize = 43;

/// Default threshold below which the line breaker keeps text on one line
pub const DEFAULT_MERGE_LINES_SHORTER_THAN: usize = 33;

/// Default number of lines per subtitle block
pub const DEFAULT_LINES_PER_BLOCK: usize = 2;

/// Default sentence terminators
pub const DEFAULT_SENTENCE_END_CHARS: &str = ".!?";

/// Configuration for [`PlainTextImporter`](crate::PlainTextImporter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ImportConfig {
    /// Treat blank input lines as forced block boundaries
    pub split_at_blank_lines: bool,

    /// Drop lines that only carry digits and punctuation (cue numbers, timestamps)
    pub remove_lines_without_letters: bool,

    /// Maximum number of lines in one subtitle block
    pub lines_per_block: usize,

    /// Characters that end a sentence when followed by a space
    pub sentence_end_chars: String,

    /// Maximum characters per line
    pub max_line_length: usize,

    /// Text shorter than this stays on a single line when wrapping
    pub merge_lines_shorter_than: usize,

    /// Language identifier, passed through to the line breaker
    pub language: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            split_at_blank_lines: true,
            remove_lines_without_letters: true,
            lines_per_block: DEFAULT_LINES_PER_BLOCK,
            sentence_end_chars: DEFAULT_SENTENCE_END_CHARS.to_string(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            merge_lines_shorter_than: DEFAULT_MERGE_LINES_SHORTER_THAN,
            language: "en".to_string(),
        }
    }
}

impl ImportConfig {
    /// Start a builder seeded with the defaults
    #[must_use]
    pub fn builder() -> ImportConfigBuilder {
        ImportConfigBuilder::default()
    }

    /// Check the invariants the importer relies on
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidValue`] when `max_line_length` is zero or
    /// `lines_per_block` is zero, and [`CoreError::Config`] when a sentence
    /// end character is whitespace or a NUL.
    pub fn validate(&self) -> Result<()> {
        if self.max_line_length == 0 {
            return Err(CoreError::invalid_value(
                "max_line_length",
                self.max_line_length,
                "must be greater than zero",
            ));
        }

        if self.lines_per_block == 0 {
            return Err(CoreError::invalid_value(
                "lines_per_block",
                self.lines_per_block,
                "must be at least 1",
            ));
        }

        if let Some(ch) = self
            .sentence_end_chars
            .chars()
            .find(|ch| ch.is_whitespace() || *ch == '\0')
        {
            return Err(CoreError::config(format!(
                "sentence end characters may not contain whitespace or NUL (found {ch:?})"
            )));
        }

        Ok(())
    }

    /// Longest text the scanner accumulates for one block
    #[must_use]
    pub const fn max_aggregate_length(&self) -> usize {
        self.max_line_length * self.lines_per_block
    }

    /// Whether every block is a single line
    #[must_use]
    pub const fn one_line_only(&self) -> bool {
        self.lines_per_block == 1
    }

    /// Whether `ch` is one of the configured sentence terminators
    #[must_use]
    pub fn is_sentence_end(&self, ch: char) -> bool {
        self.sentence_end_chars.contains(ch)
    }
}

/// Fluent builder for [`ImportConfig`]
#[derive(Debug, Default, Clone)]
pub struct ImportConfigBuilder {
    config: ImportConfig,
}

impl ImportConfigBuilder {
    /// Treat blank input lines as forced block boundaries
    #[must_use]
    pub const fn split_at_blank_lines(mut self, enabled: bool) -> Self {
        self.config.split_at_blank_lines = enabled;
        self
    }

    /// Drop lines without letters before scanning
    #[must_use]
    pub const fn remove_lines_without_letters(mut self, enabled: bool) -> Self {
        self.config.remove_lines_without_letters = enabled;
        self
    }

    /// Set the maximum number of lines per block
    #[must_use]
    pub const fn lines_per_block(mut self, lines: usize) -> Self {
        self.config.lines_per_block = lines;
        self
    }

    /// Set the sentence terminators
    #[must_use]
    pub fn sentence_end_chars<S: Into<String>>(mut self, chars: S) -> Self {
        self.config.sentence_end_chars = chars.into();
        self
    }

    /// Set the maximum characters per line
    #[must_use]
    pub const fn max_line_length(mut self, length: usize) -> Self {
        self.config.max_line_length = length;
        self
    }

    /// Set the single-line merge threshold used by the line breaker
    #[must_use]
    pub const fn merge_lines_shorter_than(mut self, length: usize) -> Self {
        self.config.merge_lines_shorter_than = length;
        self
    }

    /// Set the language identifier
    #[must_use]
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.config.language = language.into();
        self
    }

    /// Validate and return the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`ImportConfig::validate`].
    pub fn build(self) -> Result<ImportConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
