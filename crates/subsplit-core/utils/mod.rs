//! Utility functions and shared types for subsplit core
//!
//! Contains the small text helpers shared by the importer and the line
//! breaker, plus the crate error type.
//!
//! All lengths in this crate are measured in Unicode scalar values
//! (`char`s), never in bytes.
//!
//! # Example
//!
//! ```rust
//! use subsplit_core::utils::{char_len, collapse_to_one_line, split_into_lines};
//!
//! let wrapped = "Hello\nworld";
//! assert_eq!(split_into_lines(wrapped), vec!["Hello", "world"]);
//! assert_eq!(collapse_to_one_line(wrapped), "Hello world");
//! assert_eq!(char_len("héllo"), 5);
//! ```

pub mod errors;

pub use errors::CoreError;

/// Length of `text` in characters
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split text on any line terminator (`\r\n`, `\n` or a lone `\r`)
#[must_use]
pub fn split_into_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    lines.push(&text[start..]);
    lines
}

/// Remove all internal line breaks, joining the trimmed lines with one space
///
/// Lines that are empty after trimming are skipped so no double spaces are
/// introduced.
#[must_use]
pub fn collapse_to_one_line(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for line in split_into_lines(text) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(line);
    }

    result
}

/// Collapse runs of ASCII spaces into a single space
///
/// Other whitespace (tabs, line breaks) is left untouched.
#[must_use]
pub fn collapse_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_space = false;

    for ch in text.chars() {
        if ch == ' ' {
            if previous_space {
                continue;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
        result.push(ch);
    }

    result
}

/// Check whether any line of `text` is longer than `max_line_length`
#[must_use]
pub fn exceeds_line_length(text: &str, max_line_length: usize) -> bool {
    split_into_lines(text)
        .iter()
        .any(|line| char_len(line) > max_line_length)
}
