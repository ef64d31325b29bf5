//! Output rendering: plain blocks and SubRip cues

use serde::Deserialize;
use std::fmt::Write;

/// Fixed timeline used when writing SRT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SrtTiming {
    /// Length of each cue
    pub duration_ms: u64,
    /// Silence between cues
    pub gap_ms: u64,
}

impl Default for SrtTiming {
    fn default() -> Self {
        Self {
            duration_ms: 2_000,
            gap_ms: 100,
        }
    }
}

impl SrtTiming {
    /// Start and end of cue `index` (zero-based)
    #[must_use]
    pub const fn span(&self, index: u64) -> (u64, u64) {
        let start = index * (self.duration_ms + self.gap_ms);
        (start, start + self.duration_ms)
    }
}

/// `HH:MM:SS,mmm`
#[must_use]
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = ms / 60_000 % 60;
    let seconds = ms / 1_000 % 60;
    let millis = ms % 1_000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Blocks separated by one blank line
#[must_use]
pub fn render_plain(blocks: &[String]) -> String {
    let mut out = String::new();
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(block);
        out.push('\n');
    }
    out
}

/// Numbered SRT cues laid out on `timing`
#[must_use]
pub fn render_srt(blocks: &[String], timing: SrtTiming) -> String {
    let mut out = String::new();
    for (index, block) in (0u64..).zip(blocks) {
        let (start, end) = timing.span(index);
        // writing into a String cannot fail
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            format_timestamp(start),
            format_timestamp(end),
            block
        );
    }
    out
}
