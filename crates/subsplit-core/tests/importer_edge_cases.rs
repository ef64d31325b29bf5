//! Edge case tests for the plain-text auto-split importer.
//!
//! Covers hard breaks, noise filtering, word shifting, balanced fallback,
//! short-block merging and single-line mode through the public API.

use subsplit_core::{ImportConfig, PlainTextImporter};

fn narrow_importer() -> PlainTextImporter {
    let config = ImportConfig::builder()
        .max_line_length(20)
        .lines_per_block(2)
        .merge_lines_shorter_than(15)
        .sentence_end_chars(".!?")
        .language("en")
        .build()
        .unwrap();
    PlainTextImporter::new(config).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// A blank line separates blocks even without sentence punctuation
    #[test]
    fn test_blank_line_forces_boundary() {
        let importer = PlainTextImporter::new(ImportConfig::default()).unwrap();
        let report = importer.import_auto_split_with_report(["Hello world.", "", "This is a test."]);
        assert_eq!(report.blocks, vec!["Hello world.", "This is a test."]);
        assert_eq!(report.hard_splits, vec![1]);

        let config = ImportConfig::builder().sentence_end_chars("").build().unwrap();
        let importer = PlainTextImporter::new(config).unwrap();
        let report = importer.import_auto_split_with_report(["Hello world.", "", "This is a test."]);
        assert_eq!(report.blocks, vec!["Hello world.", "This is a test."]);
        assert_eq!(report.hard_splits, vec![1]);
    }

    /// Without blank-line splitting, blank lines are just dropped
    #[test]
    fn test_blank_lines_ignored_when_disabled() {
        let config = ImportConfig::builder()
            .split_at_blank_lines(false)
            .build()
            .unwrap();
        let importer = PlainTextImporter::new(config).unwrap();
        let report = importer.import_auto_split_with_report(["Hello world.", "", "This is a test."]);
        assert_eq!(report.blocks, vec!["Hello world.", "This is a test."]);
        assert!(report.hard_splits.is_empty());
        assert_eq!(report.stats.hard_breaks, 0);
    }

    /// Trailing and leading blank lines create no boundaries
    #[test]
    fn test_outer_blank_lines_have_no_boundary() {
        let importer = PlainTextImporter::new(ImportConfig::default()).unwrap();
        let report = importer.import_auto_split_with_report(["", "", "Hello world.", "", ""]);
        assert_eq!(report.blocks, vec!["Hello world."]);
        assert!(report.hard_splits.is_empty());
    }

    /// Cue numbers and timestamps from an old SRT are removed
    #[test]
    fn test_srt_leftovers_removed() {
        let importer = PlainTextImporter::new(ImportConfig::default()).unwrap();
        let blocks = importer.import_auto_split([
            "1",
            "00:00:01,000 --> 00:00:02,500",
            "Hello world.",
            "",
            "2",
            "00:00:03,000 --> 00:00:04,000",
            "This is a test.",
        ]);
        assert_eq!(blocks, vec!["Hello world.", "This is a test."]);
    }

    /// Noise lines survive when filtering is turned off
    #[test]
    fn test_noise_kept_when_disabled() {
        let config = ImportConfig::builder()
            .remove_lines_without_letters(false)
            .split_at_blank_lines(false)
            .build()
            .unwrap();
        let importer = PlainTextImporter::new(config).unwrap();
        let blocks = importer.import_auto_split(["42", "Hello"]);
        assert_eq!(blocks, vec!["42 Hello"]);
    }

    /// A short sentence is merged back into the block before it
    #[test]
    fn test_short_tail_merges_with_previous() {
        let blocks =
            narrow_importer().import_auto_split(["rain fell over dark town when none were go on. Stop"]);
        assert_eq!(
            blocks,
            vec!["rain fell over\ndark town when", "none were go on.", "Stop"]
        );
    }

    /// A hard break between the two blocks prevents the merge
    #[test]
    fn test_hard_break_prevents_merge() {
        let report = narrow_importer().import_auto_split_with_report([
            "rain fell over dark town when none were",
            "",
            "go on. Stop",
        ]);
        assert_eq!(
            report.blocks,
            vec!["rain fell over dark\ntown when none were", "go on.", "Stop"]
        );
        assert_eq!(report.hard_splits, vec![1]);
    }

    /// Overlong spans hand their last word to the next block
    #[test]
    fn test_trailing_word_shifted_forward() {
        let blocks =
            narrow_importer().import_auto_split(["butterflies grandmother hummingbird intelligent"]);
        assert_eq!(
            blocks,
            vec!["butterflies\ngrandmother", "hummingbird\nintelligent"]
        );
    }

    /// A span ending a sentence cannot shift and is split three ways instead
    #[test]
    fn test_sentence_span_split_three_ways() {
        let blocks = narrow_importer().import_auto_split(["photograph background friendship go. Next"]);
        assert_eq!(
            blocks,
            vec!["photograph", "background", "friendship go.", "Next"]
        );
    }

    /// Spans that cannot be split at all are emitted unchanged
    #[test]
    fn test_unsplittable_span_kept_whole() {
        let blocks = narrow_importer().import_auto_split(["butterflies grandmother hummingbird. More"]);
        assert_eq!(blocks, vec!["butterflies grandmother hummingbird.", "More"]);
    }

    /// A single word longer than the limit passes through
    #[test]
    fn test_overlong_word_passes_through() {
        let word = "Pneumonoultramicroscopicsilicovolcanoconiosis";
        let blocks = narrow_importer().import_auto_split([word]);
        assert_eq!(blocks, vec![word]);
    }

    /// One line per block: blocks are filled greedily and never wrapped
    #[test]
    fn test_single_line_blocks() {
        let config = ImportConfig::builder()
            .max_line_length(20)
            .lines_per_block(1)
            .build()
            .unwrap();
        let importer = PlainTextImporter::new(config).unwrap();
        let blocks = importer.import_auto_split(["one two three four five six seven eight nine ten"]);
        assert_eq!(
            blocks,
            vec!["one two three four", "five six seven eight", "nine ten"]
        );
    }

    /// Every sentence terminated by a configured char ends its block
    #[test]
    fn test_each_sentence_own_block() {
        let importer = PlainTextImporter::new(ImportConfig::default()).unwrap();
        let blocks = importer.import_auto_split(["Hello there. How are you? Fine."]);
        assert_eq!(blocks, vec!["Hello there.", "How are you?", "Fine."]);
    }

    /// Embedded NULs in the input never act as hard breaks
    #[test]
    fn test_input_nul_is_stripped() {
        let importer = PlainTextImporter::new(ImportConfig::default()).unwrap();
        let report = importer.import_auto_split_with_report(["Hello\0 world."]);
        assert_eq!(report.blocks, vec!["Hello world."]);
        assert!(report.hard_splits.is_empty());
    }

    /// Lengths are counted in characters, not bytes
    #[test]
    fn test_multibyte_text_counts_chars() {
        let importer = narrow_importer();
        // 20 characters but 26 bytes: fits one block of two balanced lines
        let blocks = importer.import_auto_split(["Ça été très élégant."]);
        assert_eq!(blocks, vec!["Ça été très\nélégant."]);
    }

    /// Re-importing collapsed output reproduces the same blocks
    #[test]
    fn test_reimport_is_stable() {
        let importer = narrow_importer();
        let first = importer.import_auto_split(["butterflies grandmother hummingbird intelligent"]);
        let collapsed: Vec<String> = first.iter().map(|block| block.replace('\n', " ")).collect();

        let config = ImportConfig {
            split_at_blank_lines: false,
            ..importer.config().clone()
        };
        let again = PlainTextImporter::new(config).unwrap().import_auto_split(&collapsed);
        assert_eq!(again, first);
    }
}
