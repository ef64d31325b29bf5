//! Balanced three-way and four-way splitting
//!
//! Last-resort partitioning for chunks the regular wrap cannot fit, and the
//! three-way rebalance used when a short chunk is merged into the previous
//! block. Each three-way trial width yields one [`SplitCandidate`]; the
//! candidate with exactly three lines and the smallest deviation from the
//! average line length wins.

use crate::config::ImportConfig;
use crate::utils::{char_len, split_into_lines};
use crate::wrap::{LineBreaker, WrapOptions};
use log::trace;

/// Smallest trial width tried by [`BalancedSplitter::split_to_three`]
const MIN_TRIAL_WIDTH: usize = 6;

/// One trial partition
#[derive(Debug, Clone, PartialEq)]
pub struct SplitCandidate {
    /// Trial width that produced this partition
    pub width: usize,
    /// The partitioned lines, trimmed
    pub lines: Vec<String>,
}

impl SplitCandidate {
    /// Sum of absolute differences between each line length and `average`
    #[must_use]
    pub fn deviation(&self, average: f64) -> f64 {
        self.lines
            .iter()
            .map(|line| (average - char_len(line) as f64).abs())
            .sum()
    }
}

/// Three/four-way splitter bound to an importer's configuration
#[derive(Debug, Clone, Copy)]
pub struct BalancedSplitter<'a> {
    config: &'a ImportConfig,
    breaker: &'a dyn LineBreaker,
}

impl<'a> BalancedSplitter<'a> {
    /// Create a splitter for `config`, wrapping through `breaker`
    #[must_use]
    pub fn new(config: &'a ImportConfig, breaker: &'a dyn LineBreaker) -> Self {
        Self { config, breaker }
    }

    /// Split `text` into exactly three balanced lines
    ///
    /// Tries every width from `max_line_length` down to 6, stopping as soon as
    /// a width needs more than three lines. Returns the trimmed input as the
    /// only element when no width gives exactly three lines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use subsplit_core::{ImportConfig, PlainTextImporter};
    ///
    /// let importer = PlainTextImporter::new(ImportConfig::builder().max_line_length(20).build()?)?;
    /// let lines = importer
    ///     .balanced_splitter()
    ///     .split_to_three("photograph background friendship go.");
    /// assert_eq!(lines, vec!["photograph", "background", "friendship go."]);
    /// # Ok::<(), subsplit_core::CoreError>(())
    /// ```
    #[must_use]
    pub fn split_to_three(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        let mut candidates = Vec::new();

        for width in (MIN_TRIAL_WIDTH..=self.config.max_line_length).rev() {
            let lines = partition(text, width);
            if lines.len() > 3 {
                break;
            }
            candidates.push(SplitCandidate { width, lines });
        }

        let average = char_len(text) as f64 / 3.0;
        let mut best: Option<(f64, SplitCandidate)> = None;
        for candidate in candidates.into_iter().filter(|c| c.lines.len() == 3) {
            let deviation = candidate.deviation(average);
            trace!("three-way trial width {}: deviation {deviation:.2}", candidate.width);
            if best.as_ref().map_or(true, |(lowest, _)| deviation < *lowest) {
                best = Some((deviation, candidate));
            }
        }

        best.map_or_else(|| vec![text.to_string()], |(_, candidate)| candidate.lines)
    }

    /// Wrap into lines, then wrap every line again as its own block
    #[must_use]
    pub fn split_to_four(&self, text: &str) -> Vec<String> {
        let collapsed = self.breaker.collapse(text);
        let unbounded = WrapOptions {
            max_lines: usize::MAX,
            ..self.wrap_options()
        };
        let wrapped = self.breaker.wrap(collapsed.trim(), &unbounded);

        split_into_lines(&wrapped)
            .into_iter()
            .map(|line| self.breaker.wrap(line, &self.wrap_options()))
            .collect()
    }

    /// Prefer three fitting lines, then four blocks, then the text unsplit
    ///
    /// The unsplit fallback may exceed `max_line_length`; that overflow is
    /// accepted for pathological input such as a single overlong word.
    #[must_use]
    pub fn split_to_three_or_four(&self, text: &str) -> Vec<String> {
        let text = self.breaker.collapse(text);

        let three = self.split_to_three(&text);
        if three.len() == 3
            && three
                .iter()
                .all(|line| char_len(line) <= self.config.max_line_length)
        {
            return three;
        }

        let four = self.split_to_four(&text);
        if four.len() == 4 {
            return four;
        }

        vec![text]
    }

    fn wrap_options(&self) -> WrapOptions<'a> {
        WrapOptions {
            max_line_length: self.config.max_line_length,
            max_lines: self.config.lines_per_block,
            merge_lines_shorter_than: self.config.merge_lines_shorter_than,
            language: &self.config.language,
        }
    }
}

/// Greedy space partition for one trial width
///
/// A line is cut at the previous space once the distance from the line start
/// to the current space exceeds `width`. The tail after the last space is
/// never cut.
fn partition(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start_char = 0;
    let mut start_byte = 0;
    let mut last_space: Option<(usize, usize)> = None;

    for (char_index, (byte_index, ch)) in text.char_indices().enumerate() {
        if ch != ' ' {
            continue;
        }
        if let Some((space_char, space_byte)) = last_space {
            if char_index - start_char > width && space_char > start_char {
                lines.push(text[start_byte..space_byte].trim().to_string());
                start_char = space_char + 1;
                start_byte = space_byte + 1;
            }
        }
        last_space = Some((char_index, byte_index));
    }

    lines.push(text[start_byte..].trim().to_string());
    lines
}
