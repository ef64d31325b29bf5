//! Line breaking collaborators used by the importer
//!
//! The importer never decides *where* inside a block a line break goes; it
//! asks a [`LineBreaker`]. The crate ships [`AutoBreaker`], a balanced
//! word-boundary wrapper with per-language break rules, and callers can plug in
//! their own implementation through
//! [`PlainTextImporter::with_line_breaker`](crate::PlainTextImporter::with_line_breaker).
//!
//! # Example
//!
//! ```rust
//! use subsplit_core::wrap::{AutoBreaker, LineBreaker, WrapOptions};
//!
//! let options = WrapOptions {
//!     max_line_length: 20,
//!     max_lines: 2,
//!     merge_lines_shorter_than: 15,
//!     language: "en",
//! };
//! let wrapped = AutoBreaker::new().wrap("The quick brown fox jumps over it", &options);
//! assert_eq!(wrapped, "The quick brown\nfox jumps over it");
//! ```

mod auto_break;
mod language;

pub use auto_break::AutoBreaker;
pub use language::LanguageRules;

use crate::utils::collapse_to_one_line;
use core::fmt;

/// Parameters for a single wrap request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions<'a> {
    /// Maximum characters per line, exceeded only when unavoidable
    pub max_line_length: usize,
    /// Maximum number of lines to produce
    pub max_lines: usize,
    /// Text shorter than this (that also fits one line) is never broken
    pub merge_lines_shorter_than: usize,
    /// Language identifier used to pick break rules
    pub language: &'a str,
}

/// Wraps text into lines and collapses it back
///
/// Implementations must only turn spaces into line breaks (`'\n'`); they may
/// not add, drop or reorder any other character.
pub trait LineBreaker: fmt::Debug + Send + Sync {
    /// Insert line breaks so no line exceeds `options.max_line_length` where avoidable
    fn wrap(&self, text: &str, options: &WrapOptions<'_>) -> String;

    /// Remove every internal line break, producing one line
    fn collapse(&self, text: &str) -> String {
        collapse_to_one_line(text)
    }
}
