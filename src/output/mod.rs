pub mod json;
pub mod terminal;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;

use crate::formatting::FormattingConfig;
use crate::session::{Renderer, Snapshot};

pub use json::JsonWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_snapshot(&mut self, snapshot: &Snapshot) -> Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    formatting: FormattingConfig,
    writer: Box<dyn Write>,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}

/// Render a snapshot to a string in the requested format.
pub fn render_to_string(
    snapshot: &Snapshot,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<String> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Terminal => {
            TerminalWriter::new(&mut buffer, formatting).write_snapshot(snapshot)?
        }
        OutputFormat::Json => JsonWriter::new(&mut buffer).write_snapshot(snapshot)?,
    }
    Ok(String::from_utf8(buffer)?)
}

/// Write a rendered snapshot to `path`, creating parent directories.
pub fn write_snapshot_file(
    path: &Path,
    snapshot: &Snapshot,
    format: OutputFormat,
) -> Result<()> {
    let content = render_to_string(snapshot, format, FormattingConfig::plain())?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Bridges a [`Session`](crate::session::Session) to an [`OutputWriter`].
///
/// Render callbacks cannot fail, so write errors are logged and dropped.
pub struct WriterRenderer {
    writer: Box<dyn OutputWriter>,
}

impl WriterRenderer {
    pub fn new(writer: Box<dyn OutputWriter>) -> Self {
        Self { writer }
    }
}

impl Renderer for WriterRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        if let Err(e) = self.writer.write_snapshot(snapshot) {
            tracing::warn!("Failed to render snapshot: {:#}", e);
        }
    }
}
