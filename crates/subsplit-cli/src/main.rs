//! `subsplit`: plain text in, subtitle blocks out
//!
//! Reads a UTF-8 text file, splits it with [`PlainTextImporter`] and writes
//! either plain blocks separated by blank lines or SRT cues on a fixed
//! timeline. Set `RUST_LOG=debug` to see the split decisions.

mod args;
mod settings;
mod srt;

use anyhow::{Context, Result};
use args::{Cli, OutputFormat};
use clap::Parser;
use log::info;
use settings::Settings;
use std::fs;
use std::io::{self, Write};
use subsplit_core::PlainTextImporter;

const UTF8_BOM: char = '\u{feff}';

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::resolve(cli)?;
    let importer = PlainTextImporter::new(settings.import.clone())
        .map_err(|err| anyhow::anyhow!("{err} ({})", err.suggestion()))
        .context("invalid import settings")?;

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let text = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw);

    let blocks = importer.import_text(text);
    info!("{} block(s) from {}", blocks.len(), cli.input.display());

    let rendered = match cli.format {
        OutputFormat::Plain => srt::render_plain(&blocks),
        OutputFormat::Srt => srt::render_srt(&blocks, settings.srt),
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}
