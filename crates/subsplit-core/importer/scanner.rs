//! Greedy scanner over the flat buffer
//!
//! Walks the buffer one character at a time with a two-part accumulator:
//! `stable` holds words already committed since the last flush, `tentative`
//! the characters read since the last space. The length bound is only tested
//! at word boundaries, and committed text is never re-scanned.

use super::engine::{FlushEngine, FlushPoint};
use super::normalizer::HARD_BREAK;
use crate::config::ImportConfig;

/// Growable text buffer that tracks its length in characters
#[derive(Debug, Default)]
struct CharBuffer {
    text: String,
    chars: usize,
}

impl CharBuffer {
    fn push(&mut self, ch: char) {
        self.text.push(ch);
        self.chars += 1;
    }

    fn append(&mut self, other: &Self) {
        self.text.push_str(&other.text);
        self.chars += other.chars;
    }

    fn clear(&mut self) {
        self.text.clear();
        self.chars = 0;
    }

    fn reset_to(&mut self, seed: &str) {
        self.text.clear();
        self.text.push_str(seed);
        self.chars = seed.chars().count();
    }

    fn is_empty(&self) -> bool {
        self.chars == 0
    }
}

/// Scanning state for one import call
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    config: &'a ImportConfig,
    engine: FlushEngine<'a>,
    stable: CharBuffer,
    tentative: CharBuffer,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a ImportConfig, engine: FlushEngine<'a>) -> Self {
        Self {
            config,
            engine,
            stable: CharBuffer::default(),
            tentative: CharBuffer::default(),
        }
    }

    /// Scan `buffer` to the end and hand back the engine holding the output
    pub fn run(mut self, buffer: &str) -> FlushEngine<'a> {
        let max_aggregate = self.config.max_aggregate_length();
        let mut chars = buffer.chars();

        while let Some(ch) = chars.next() {
            if ch == HARD_BREAK {
                let pending = self.pending();
                let leftover = self.engine.flush(&pending, FlushPoint::HardBreak);
                self.engine.mark_hard_split();
                self.stable.reset_to(&leftover);
                self.tentative.clear();
            } else if ch == ' ' {
                if self.accumulated() > max_aggregate {
                    self.flush_stable();
                }
                self.stable.append(&self.tentative);
                if !self.stable.is_empty() {
                    self.stable.push(' ');
                }
                self.tentative.clear();
            } else if self.config.is_sentence_end(ch) && ends_sentence(&chars) {
                self.tentative.push(ch);
                if self.accumulated() > max_aggregate {
                    // the end character stays pending for the next span
                    self.flush_stable();
                } else {
                    let pending = self.pending();
                    let leftover = self.engine.flush(&pending, FlushPoint::Inside);
                    self.stable.reset_to(&leftover);
                    self.tentative.clear();
                }
            } else {
                self.tentative.push(ch);
            }
        }

        let pending = self.pending();
        self.engine.flush(&pending, FlushPoint::EndOfText);
        self.engine
    }

    fn accumulated(&self) -> usize {
        self.stable.chars + self.tentative.chars
    }

    fn pending(&self) -> String {
        let mut pending = String::with_capacity(self.stable.text.len() + self.tentative.text.len());
        pending.push_str(&self.stable.text);
        pending.push_str(&self.tentative.text);
        pending
    }

    fn flush_stable(&mut self) {
        let leftover = self.engine.flush(&self.stable.text, FlushPoint::Inside);
        self.stable.reset_to(&leftover);
    }
}

/// A sentence end counts only when a space follows and at least one more
/// character comes after that space.
fn ends_sentence(rest: &std::str::Chars<'_>) -> bool {
    let mut lookahead = rest.clone();
    lookahead.next() == Some(' ') && lookahead.next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::AutoBreaker;

    #[test]
    fn sentence_end_needs_a_following_word() {
        assert!(ends_sentence(&" a".chars()));
        assert!(!ends_sentence(&" ".chars()));
        assert!(!ends_sentence(&"a b".chars()));
        assert!(!ends_sentence(&"".chars()));
    }

    #[test]
    fn char_buffer_tracks_scalar_count() {
        let mut buffer = CharBuffer::default();
        buffer.push('é');
        buffer.push('a');
        assert_eq!(buffer.chars, 2);
        buffer.reset_to("日本 ");
        assert_eq!(buffer.chars, 3);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn each_sentence_is_flushed_on_its_own() {
        let config = ImportConfig::default();
        let engine = FlushEngine::new(&config, &AutoBreaker);
        let (blocks, _) = Scanner::new(&config, engine)
            .run("Hello there. How are you? Fine. ")
            .finish();
        assert_eq!(blocks, vec!["Hello there.", "How are you?", "Fine."]);
    }
}
