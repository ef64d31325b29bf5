//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Split plain text into length-bounded subtitle blocks
#[derive(Parser, Debug, Clone)]
#[command(name = "subsplit", author, version, about, long_about = None)]
pub struct Cli {
    /// Plain-text input file (UTF-8, optional BOM)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// TOML settings file; command-line flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum characters per line
    #[arg(long, value_name = "N")]
    pub max_line_length: Option<usize>,

    /// Maximum lines per subtitle block
    #[arg(long, value_name = "N")]
    pub lines_per_block: Option<usize>,

    /// Text shorter than this is kept on one line
    #[arg(long, value_name = "N")]
    pub merge_lines_shorter_than: Option<usize>,

    /// Language used for line-break rules (en, fr, de, ...)
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Characters that end a sentence
    #[arg(long, value_name = "CHARS")]
    pub end_chars: Option<String>,

    /// Do not treat blank lines as block boundaries
    #[arg(long)]
    pub no_blank_line_split: bool,

    /// Keep lines without letters (cue numbers, timestamps)
    #[arg(long)]
    pub keep_noise_lines: bool,

    /// Duration of each SRT cue in milliseconds
    #[arg(long, value_name = "MS")]
    pub duration_ms: Option<u64>,

    /// Gap between consecutive SRT cues in milliseconds
    #[arg(long, value_name = "MS")]
    pub gap_ms: Option<u64>,
}

/// How blocks are written out
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Blocks separated by a blank line
    Plain,
    /// SubRip cues on a fixed timeline
    Srt,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "subsplit",
            "in.txt",
            "--format",
            "srt",
            "--max-line-length",
            "37",
            "--no-blank-line-split",
            "--end-chars",
            ".!",
        ])
        .unwrap();

        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.format, OutputFormat::Srt);
        assert_eq!(cli.max_line_length, Some(37));
        assert!(cli.no_blank_line_split);
        assert!(!cli.keep_noise_lines);
        assert_eq!(cli.end_chars.as_deref(), Some(".!"));
        assert_eq!(cli.lines_per_block, None);
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["subsplit"]).is_err());
    }
}
