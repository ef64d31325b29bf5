//! # Subsplit Core
//!
//! Greedy auto-split of plain text into balanced, length-bounded subtitle
//! blocks. Feed it the lines of a transcript or script and get back a
//! sequence of blocks, each holding at most `lines_per_block` lines of at most
//! `max_line_length` characters.
//!
//! ## Features
//!
//! - **Single pass**: one left-to-right scan, committed text is never re-read
//! - **Hard breaks**: blank input lines force a block boundary
//! - **Noise filtering**: cue numbers and timestamps are dropped
//! - **Rebalancing**: overlong spans shift words forward, short tails merge back
//! - **Pluggable wrapping**: bring your own [`LineBreaker`]
//! - **Thread-safe**: [`PlainTextImporter`] is `Send + Sync` and stateless
//!
//! ## Quick Start
//!
//! ```rust
//! use subsplit_core::{ImportConfig, PlainTextImporter};
//!
//! let config = ImportConfig::builder()
//!     .max_line_length(43)
//!     .lines_per_block(2)
//!     .build()?;
//! let importer = PlainTextImporter::new(config)?;
//!
//! let blocks = importer.import_auto_split([
//!     "1",
//!     "00:00:01,000 --> 00:00:02,000",
//!     "Hello world.",
//!     "",
//!     "This is a test.",
//! ]);
//! assert_eq!(blocks, vec!["Hello world.", "This is a test."]);
//! # Ok::<(), subsplit_core::CoreError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod importer;
pub mod utils;
pub mod wrap;

pub use config::{ImportConfig, ImportConfigBuilder};
pub use importer::{
    contains_letters, BalancedSplitter, ImportReport, NormalizeStats, PlainTextImporter,
};
pub use utils::CoreError;
pub use wrap::{AutoBreaker, LineBreaker, WrapOptions};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for subsplit operations, using the crate's unified `CoreError`.
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn importer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlainTextImporter>();
        assert_send_sync::<ImportConfig>();
    }

    #[test]
    fn end_to_end_default_config() {
        let importer = PlainTextImporter::new(ImportConfig::default()).unwrap();
        let blocks = importer.import_auto_split(["Hello world.", "", "This is a test."]);
        assert_eq!(blocks, vec!["Hello world.", "This is a test."]);
    }
}
