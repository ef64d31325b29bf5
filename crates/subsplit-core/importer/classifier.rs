//! Noise-line detection
//!
//! Plain-text transcripts often still carry cue numbers and bare timestamps
//! from a previous subtitle format. [`contains_letters`] is the heuristic used
//! to spot those lines so the normalizer can drop them.

/// Characters removed before the emptiness check
const STRIPPED_PUNCTUATION: [char; 6] = [':', '.', ',', '-', '>', '/'];

/// Characters that never count as content on their own
const BOILERPLATE: [char; 7] = ['\r', '\n', '\t', ' ', '.', '?', '\0'];

/// Check whether a line carries meaningful text
///
/// Two stages, in this order:
///
/// 1. Remove ASCII digits and `: . , - > /`; if nothing but whitespace is
///    left the line has no letters.
/// 2. Otherwise the line has letters if any character falls outside
///    `\r \n \t ' ' . ? \0`.
///
/// # Examples
///
/// ```rust
/// use subsplit_core::contains_letters;
///
/// assert!(contains_letters("Hello"));
/// assert!(!contains_letters("123"));
/// assert!(!contains_letters("12:34:56"));
/// assert!(!contains_letters("00:00:01,000 --> 00:00:04,000"));
/// assert!(!contains_letters("..."));
/// ```
#[must_use]
pub fn contains_letters(line: &str) -> bool {
    let only_noise = line
        .chars()
        .filter(|ch| !ch.is_ascii_digit() && !STRIPPED_PUNCTUATION.contains(ch))
        .all(char::is_whitespace);
    if only_noise {
        return false;
    }

    line.chars().any(|ch| !BOILERPLATE.contains(&ch))
}
