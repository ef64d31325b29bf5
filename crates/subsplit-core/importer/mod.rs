//! Plain-text auto-split import
//!
//! Turns raw text lines into subtitle blocks in four stages:
//!
//! 1. [`classifier`]: drop lines without letters (cue numbers, timestamps)
//! 2. `normalizer`: flatten everything into one buffer with hard breaks
//! 3. `scanner`: greedy left-to-right accumulation up to the block capacity
//! 4. `engine`: wrap, shift words forward or rebalance, then emit blocks
//!
//! # Example
//!
//! ```rust
//! use subsplit_core::{ImportConfig, PlainTextImporter};
//!
//! let importer = PlainTextImporter::new(ImportConfig::default())?;
//! let blocks = importer.import_auto_split(["Hello world.", "", "This is a test."]);
//! assert_eq!(blocks, vec!["Hello world.", "This is a test."]);
//! # Ok::<(), subsplit_core::CoreError>(())
//! ```

pub mod balance;
pub mod classifier;

mod engine;
mod normalizer;
mod scanner;

pub use balance::{BalancedSplitter, SplitCandidate};
pub use classifier::contains_letters;
pub use normalizer::NormalizeStats;

use crate::config::ImportConfig;
use crate::utils::errors::Result;
use crate::utils::split_into_lines;
use crate::wrap::{AutoBreaker, LineBreaker};
use engine::FlushEngine;
use log::{debug, info};
use normalizer::FlatBuffer;
use scanner::Scanner;
use std::sync::Arc;

/// Outcome of one import call with its bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Finished subtitle blocks in input order
    pub blocks: Vec<String>,
    /// Block boundaries forced by blank lines
    ///
    /// A value `b` means block `b - 1` ended at a hard break and block `b`
    /// started after it.
    pub hard_splits: Vec<usize>,
    /// Normalization counters
    pub stats: NormalizeStats,
}

/// Auto-split importer bound to a validated configuration
///
/// Stateless between calls and cheap to clone; one instance may serve
/// concurrent imports from several threads.
#[derive(Debug, Clone)]
pub struct PlainTextImporter {
    config: ImportConfig,
    breaker: Arc<dyn LineBreaker>,
}

impl PlainTextImporter {
    /// Create an importer using the built-in [`AutoBreaker`]
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`ImportConfig::validate`].
    pub fn new(config: ImportConfig) -> Result<Self> {
        Self::with_line_breaker(config, AutoBreaker::new())
    }

    /// Create an importer with a custom line breaker
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`ImportConfig::validate`].
    pub fn with_line_breaker<B>(config: ImportConfig, breaker: B) -> Result<Self>
    where
        B: LineBreaker + 'static,
    {
        config.validate()?;
        Ok(Self {
            config,
            breaker: Arc::new(breaker),
        })
    }

    /// Configuration this importer was built with
    #[must_use]
    pub const fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Split `lines` into subtitle blocks
    ///
    /// Never fails on text input. Blocks contain at most
    /// `lines_per_block` lines joined with `'\n'`; a line exceeds
    /// `max_line_length` only when a single unbreakable span leaves no
    /// alternative.
    #[must_use]
    pub fn import_auto_split<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.import_auto_split_with_report(lines).blocks
    }

    /// Split `lines` and also return hard-split positions and counters
    #[must_use]
    pub fn import_auto_split_with_report<I, S>(&self, lines: I) -> ImportReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let buffer = FlatBuffer::from_lines(lines, &self.config);
        let engine = FlushEngine::new(&self.config, self.breaker.as_ref());
        let (blocks, hard_splits) = Scanner::new(&self.config, engine)
            .run(buffer.as_str())
            .finish();

        info!(
            "imported {} block(s) from {} line(s)",
            blocks.len(),
            buffer.stats().lines_read
        );
        debug!("hard splits at {hard_splits:?}");

        ImportReport {
            blocks,
            hard_splits,
            stats: buffer.stats(),
        }
    }

    /// Split a whole document, accepting any line terminator
    #[must_use]
    pub fn import_text(&self, text: &str) -> Vec<String> {
        self.import_auto_split(split_into_lines(text))
    }

    /// Three/four-way splitter sharing this importer's configuration
    #[must_use]
    pub fn balanced_splitter(&self) -> BalancedSplitter<'_> {
        BalancedSplitter::new(&self.config, self.breaker.as_ref())
    }
}
