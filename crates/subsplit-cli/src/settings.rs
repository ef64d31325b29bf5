//! Settings file loading and flag overrides
//!
//! A settings file is TOML with two optional tables:
//!
//! ```toml
//! [import]
//! max_line_length = 37
//! lines_per_block = 2
//! language = "fr"
//!
//! [srt]
//! duration_ms = 2500
//! gap_ms = 0
//! ```

use crate::args::Cli;
use crate::srt::SrtTiming;
use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use subsplit_core::ImportConfig;

/// Everything the CLI needs besides the input text
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub import: ImportConfig,
    pub srt: SrtTiming,
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid settings file")
    }

    /// Read and parse a settings file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = Self::from_toml(&text)
            .with_context(|| format!("in settings file {}", path.display()))?;
        debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Settings file (if any) with command-line flags applied on top
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply_overrides(cli);
        Ok(settings)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        let import = &mut self.import;
        if let Some(length) = cli.max_line_length {
            import.max_line_length = length;
        }
        if let Some(lines) = cli.lines_per_block {
            import.lines_per_block = lines;
        }
        if let Some(threshold) = cli.merge_lines_shorter_than {
            import.merge_lines_shorter_than = threshold;
        }
        if let Some(language) = &cli.language {
            import.language.clone_from(language);
        }
        if let Some(chars) = &cli.end_chars {
            import.sentence_end_chars.clone_from(chars);
        }
        if cli.no_blank_line_split {
            import.split_at_blank_lines = false;
        }
        if cli.keep_noise_lines {
            import.remove_lines_without_letters = false;
        }
        if let Some(duration) = cli.duration_ms {
            self.srt.duration_ms = duration;
        }
        if let Some(gap) = cli.gap_ms {
            self.srt.gap_ms = gap;
        }
    }
}
