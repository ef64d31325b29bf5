//! Flush and rebalance engine
//!
//! Receives every span the scanner decides to emit and turns it into one or
//! more finished blocks. Two corrective passes exist, triggered by opposite
//! conditions:
//!
//! - [`FlushEngine::shift_overlong`]: the wrap overflows, so up to
//!   [`MAX_SHIFT_ATTEMPTS`] trailing words are handed back to the scanner as a
//!   leftover, falling back to the balanced splitter.
//! - [`FlushEngine::append_or_merge`]: the wrap is short, so the previous block
//!   and this one are redistributed over a balanced three-way split.

use super::balance::BalancedSplitter;
use crate::config::ImportConfig;
use crate::utils::{char_len, collapse_spaces, exceeds_line_length};
use crate::wrap::{LineBreaker, WrapOptions};
use log::debug;
use std::collections::BTreeSet;

/// Most trailing words moved forward for one overlong span
pub(crate) const MAX_SHIFT_ATTEMPTS: usize = 3;

/// Blocks shorter than `max_line_length / SHORT_BLOCK_DIVISOR` trigger a merge attempt
const SHORT_BLOCK_DIVISOR: f64 = 2.5;

/// Where in the flat buffer a flush happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlushPoint {
    /// More text follows in the same run
    Inside,
    /// The span ends at a hard break; nothing may cross it
    HardBreak,
    /// Nothing follows at all
    EndOfText,
}

/// Output accumulator for one import call
#[derive(Debug)]
pub(crate) struct FlushEngine<'a> {
    config: &'a ImportConfig,
    breaker: &'a dyn LineBreaker,
    blocks: Vec<String>,
    hard_splits: BTreeSet<usize>,
}

impl<'a> FlushEngine<'a> {
    pub fn new(config: &'a ImportConfig, breaker: &'a dyn LineBreaker) -> Self {
        Self {
            config,
            breaker,
            blocks: Vec::new(),
            hard_splits: BTreeSet::new(),
        }
    }

    /// Emit `text` as finished blocks, returning words to carry into the next span
    ///
    /// A non-empty leftover always ends with a single space.
    pub fn flush(&mut self, text: &str, point: FlushPoint) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let text = collapse_spaces(text);
        let text = text.trim();

        if self.config.one_line_only() {
            let line = self.breaker.collapse(text);
            self.blocks.push(line);
            return String::new();
        }

        let wrapped = self.wrap(text);
        if exceeds_line_length(&wrapped, self.config.max_line_length) {
            self.shift_overlong(text, point)
        } else {
            self.append_or_merge(wrapped, point);
            String::new()
        }
    }

    /// Record that the next block starts after a hard break
    pub fn mark_hard_split(&mut self) {
        if !self.blocks.is_empty() {
            self.hard_splits.insert(self.blocks.len());
        }
    }

    /// Finished blocks and the boundaries that came from hard breaks
    ///
    /// A boundary `b` separates block `b - 1` from block `b`. Breaks after
    /// the last block separate nothing and are dropped.
    pub fn finish(self) -> (Vec<String>, Vec<usize>) {
        let count = self.blocks.len();
        let hard_splits = self
            .hard_splits
            .into_iter()
            .filter(|&boundary| boundary < count)
            .collect();
        (self.blocks, hard_splits)
    }

    /// Move trailing words forward until the wrap fits, else split balanced
    fn shift_overlong(&mut self, text: &str, point: FlushPoint) -> String {
        let mut remaining = self.breaker.collapse(text);
        let mut moved: Vec<String> = Vec::new();

        for _ in 0..MAX_SHIFT_ATTEMPTS {
            if point != FlushPoint::Inside || !self.can_move_last_word(&remaining, point) {
                break;
            }
            let Some(space) = remaining.rfind(' ').filter(|&index| index > 0) else {
                break;
            };

            moved.insert(0, remaining[space..].trim().to_string());
            remaining.truncate(space);
            let kept = remaining.trim_end().len();
            remaining.truncate(kept);

            let wrapped = self.wrap(&remaining);
            if !exceeds_line_length(&wrapped, self.config.max_line_length) {
                debug!("moved {} trailing word(s) to the next block", moved.len());
                self.blocks.push(wrapped);
                let mut leftover = moved.join(" ");
                leftover.push(' ');
                return leftover;
            }
        }

        let splitter = BalancedSplitter::new(self.config, self.breaker);
        let parts = splitter.split_to_three_or_four(text);
        debug!("overlong span split into {} block(s)", parts.len());
        self.blocks.extend(parts);
        String::new()
    }

    /// Append the wrap, or rebalance it with a short-ended previous block
    fn append_or_merge(&mut self, wrapped: String, point: FlushPoint) {
        if let Some(previous) = self.blocks.last() {
            let short = (char_len(&wrapped) as f64)
                < self.config.max_line_length as f64 / SHORT_BLOCK_DIVISOR;

            if short
                && !self.hard_splits.contains(&self.blocks.len())
                && self.can_move_last_word(previous, point)
            {
                let joined = self.breaker.collapse(&format!("{previous} {wrapped}"));
                let splitter = BalancedSplitter::new(self.config, self.breaker);
                let three = splitter.split_to_three(&joined);

                if let [first, second, third] = three.as_slice() {
                    debug!("merged short block into previous with a three-way split");
                    let head = self.wrap(&format!("{first} {second}"));
                    let tail = third.clone();
                    self.blocks.pop();
                    self.blocks.push(head);
                    self.blocks.push(tail);
                    return;
                }
            }
        }

        self.blocks.push(wrapped);
    }

    /// Whether the last word of `line` may travel to the following text
    ///
    /// Looks at the last character of the whole line, not of a particular
    /// word: a line ending a sentence is never reshaped.
    fn can_move_last_word(&self, line: &str, point: FlushPoint) -> bool {
        if point == FlushPoint::EndOfText {
            return false;
        }
        line.chars()
            .last()
            .is_some_and(|ch| !self.config.is_sentence_end(ch))
    }

    fn wrap(&self, text: &str) -> String {
        let options = WrapOptions {
            max_line_length: self.config.max_line_length,
            max_lines: self.config.lines_per_block,
            merge_lines_shorter_than: self.config.merge_lines_shorter_than,
            language: &self.config.language,
        };
        self.breaker.wrap(text, &options)
    }
}
