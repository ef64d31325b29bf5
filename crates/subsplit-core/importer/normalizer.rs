//! Input normalization into a single scanning buffer
//!
//! Every accepted input line is appended with a terminator that later turns
//! into a single space. With blank-line splitting enabled, a blank line becomes
//! one [`HARD_BREAK`] character instead. Embedded NULs are stripped first, so
//! the hard break can never come from the input itself.

use super::classifier::contains_letters;
use crate::config::ImportConfig;
use log::debug;

/// Sentinel marking a forced block boundary inside the flat buffer
pub(crate) const HARD_BREAK: char = '\0';

/// Counters collected while normalizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Input lines seen
    pub lines_read: usize,
    /// Blank lines turned into hard breaks
    pub hard_breaks: usize,
    /// Lines dropped because they carry no letters
    pub noise_lines_removed: usize,
}

/// The flattened input the scanner walks over
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FlatBuffer {
    text: String,
    stats: NormalizeStats,
}

impl FlatBuffer {
    /// Flatten `lines` according to `config`
    pub fn from_lines<I, S>(lines: I, config: &ImportConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut stats = NormalizeStats::default();

        for line in lines {
            stats.lines_read += 1;
            let line = line.as_ref().replace('\0', "");

            if line.trim().is_empty() && config.split_at_blank_lines {
                text.push(HARD_BREAK);
                stats.hard_breaks += 1;
            } else if config.remove_lines_without_letters && !contains_letters(line.trim()) {
                stats.noise_lines_removed += 1;
            } else {
                text.push_str(&line);
                text.push('\n');
            }
        }

        let text = text.replace('\n', " ");

        debug!(
            "normalized {} lines: {} hard breaks, {} noise lines removed",
            stats.lines_read, stats.hard_breaks, stats.noise_lines_removed
        );

        Self { text, stats }
    }

    /// The flattened text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Counters collected while flattening
    #[must_use]
    pub const fn stats(&self) -> NormalizeStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(split_at_blank_lines: bool, remove_lines_without_letters: bool) -> ImportConfig {
        ImportConfig::builder()
            .split_at_blank_lines(split_at_blank_lines)
            .remove_lines_without_letters(remove_lines_without_letters)
            .build()
            .unwrap()
    }

    #[test]
    fn lines_are_joined_with_spaces() {
        let buffer = FlatBuffer::from_lines(["Hello", "world"], &config(true, true));
        assert_eq!(buffer.as_str(), "Hello world ");
    }

    #[test]
    fn blank_line_becomes_hard_break() {
        let buffer = FlatBuffer::from_lines(["Hello.", "  ", "Bye."], &config(true, true));
        assert_eq!(buffer.as_str(), "Hello. \0Bye. ");
        assert_eq!(buffer.stats().hard_breaks, 1);
    }

    #[test]
    fn blank_line_without_splitting_is_noise_or_space() {
        let dropped = FlatBuffer::from_lines(["a", "", "b"], &config(false, true));
        assert_eq!(dropped.as_str(), "a b ");
        assert_eq!(dropped.stats().noise_lines_removed, 1);

        let kept = FlatBuffer::from_lines(["a", "", "b"], &config(false, false));
        assert_eq!(kept.as_str(), "a  b ");
    }

    #[test]
    fn noise_lines_are_dropped_on_request() {
        let lines = ["1", "00:00:01,000 --> 00:00:02,000", "Hi there"];

        let removed = FlatBuffer::from_lines(lines, &config(true, true));
        assert_eq!(removed.as_str(), "Hi there ");
        assert_eq!(removed.stats().noise_lines_removed, 2);
        assert_eq!(removed.stats().lines_read, 3);

        let kept = FlatBuffer::from_lines(lines, &config(true, false));
        assert_eq!(kept.as_str(), "1 00:00:01,000 --> 00:00:02,000 Hi there ");
    }

    #[test]
    fn embedded_nul_is_stripped() {
        let buffer = FlatBuffer::from_lines(["a\0b", "\0"], &config(true, true));
        assert_eq!(buffer.as_str(), "ab \0");
    }

    #[test]
    fn embedded_newlines_become_spaces() {
        let buffer = FlatBuffer::from_lines(["one\ntwo"], &config(true, true));
        assert_eq!(buffer.as_str(), "one two ");
    }
}
