//! Balanced word-boundary line breaker
//!
//! Collapses its input to one line, decides how many lines are needed and
//! then places the breaks with a small dynamic program over word boundaries.
//! The cost of a line combines:
//!
//! - overflow past the maximum width (dominant, so any layout that fits wins)
//! - squared deviation from the even line length
//! - a penalty for ending a line on a word the language keeps attached to the
//!   next one (articles, titles)
//! - a bonus for ending a line at sentence or clause punctuation
//!
//! Words are never split, so a single word wider than the limit is returned
//! as-is.

use super::{LanguageRules, LineBreaker, WrapOptions};
use crate::utils::{char_len, collapse_spaces, collapse_to_one_line};

const OVERFLOW_WEIGHT: f64 = 1_000_000.0;
const FORBIDDEN_LINE_START_PENALTY: f64 = 100_000.0;
const NO_BREAK_AFTER_PENALTY: f64 = 120.0;
const SENTENCE_END_BONUS: f64 = 40.0;
const CLAUSE_END_BONUS: f64 = 15.0;

/// Default [`LineBreaker`] implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoBreaker;

impl AutoBreaker {
    /// Create a new line breaker
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LineBreaker for AutoBreaker {
    fn wrap(&self, text: &str, options: &WrapOptions<'_>) -> String {
        let single = collapse_spaces(&collapse_to_one_line(text));
        let words: Vec<&str> = single.split(' ').filter(|word| !word.is_empty()).collect();

        if words.len() < 2 || options.max_lines < 2 {
            return single;
        }

        let total = char_len(&single);
        if total <= options.max_line_length && total < options.merge_lines_shorter_than {
            return single;
        }

        let lengths: Vec<usize> = words.iter().map(|word| char_len(word)).collect();
        let line_count = greedy_line_count(&lengths, options.max_line_length)
            .max(2)
            .min(options.max_lines)
            .min(words.len());

        let rules = LanguageRules::for_language(options.language);
        let layout = Layout {
            words: &words,
            prefix: prefix_sums(&lengths),
            max_line_length: options.max_line_length,
            target: total as f64 / line_count as f64,
            rules,
        };

        let ends = layout.balanced_breaks(line_count);
        let mut result = String::with_capacity(single.len());
        let mut start = 0;
        for (index, end) in ends.into_iter().enumerate() {
            if index > 0 {
                result.push('\n');
            }
            result.push_str(&words[start..end].join(" "));
            start = end;
        }
        result
    }
}

/// Fewest lines a first-fit wrap needs at `max_line_length`
fn greedy_line_count(lengths: &[usize], max_line_length: usize) -> usize {
    let mut count = 1;
    let mut current = 0;

    for (index, &length) in lengths.iter().enumerate() {
        if index == 0 {
            current = length;
        } else if current + 1 + length <= max_line_length {
            current += 1 + length;
        } else {
            count += 1;
            current = length;
        }
    }

    count
}

fn prefix_sums(lengths: &[usize]) -> Vec<usize> {
    let mut prefix = Vec::with_capacity(lengths.len() + 1);
    prefix.push(0);
    for &length in lengths {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + length);
    }
    prefix
}

struct Layout<'a> {
    words: &'a [&'a str],
    prefix: Vec<usize>,
    max_line_length: usize,
    target: f64,
    rules: LanguageRules,
}

impl Layout<'_> {
    /// Width of the line holding `words[start..end]`
    fn line_length(&self, start: usize, end: usize) -> usize {
        self.prefix[end] - self.prefix[start] + (end - start - 1)
    }

    fn line_cost(&self, start: usize, end: usize, is_last: bool) -> f64 {
        let length = self.line_length(start, end);
        let overflow = length.saturating_sub(self.max_line_length) as f64;
        let deviation = length as f64 - self.target;
        let mut cost = overflow.mul_add(OVERFLOW_WEIGHT, deviation * deviation);

        if is_last {
            return cost;
        }

        let last_word = self.words[end - 1];
        if !self.rules.allows_break_after(last_word) {
            cost += NO_BREAK_AFTER_PENALTY;
        }
        if !self.rules.allows_line_start(self.words[end]) {
            cost += FORBIDDEN_LINE_START_PENALTY;
        }
        match last_word.chars().last() {
            Some('.' | '!' | '?') => cost -= SENTENCE_END_BONUS,
            Some(',' | ';' | ':') => cost -= CLAUSE_END_BONUS,
            _ => {}
        }

        cost
    }

    /// Exclusive end index of every line in the cheapest `line_count`-line layout
    fn balanced_breaks(&self, line_count: usize) -> Vec<usize> {
        let word_count = self.words.len();
        let mut cost = vec![vec![f64::INFINITY; word_count + 1]; line_count + 1];
        let mut from = vec![vec![0usize; word_count + 1]; line_count + 1];
        cost[0][0] = 0.0;

        for line in 1..=line_count {
            let is_last = line == line_count;
            // leave at least one word for every remaining line
            let max_end = word_count - (line_count - line);
            for end in line..=max_end {
                for start in (line - 1)..end {
                    let base = cost[line - 1][start];
                    if base.is_infinite() {
                        continue;
                    }
                    let candidate = base + self.line_cost(start, end, is_last);
                    if candidate < cost[line][end] {
                        cost[line][end] = candidate;
                        from[line][end] = start;
                    }
                }
            }
        }

        let mut ends = vec![0; line_count];
        let mut end = word_count;
        for line in (1..=line_count).rev() {
            ends[line - 1] = end;
            end = from[line][end];
        }
        ends
    }
}
