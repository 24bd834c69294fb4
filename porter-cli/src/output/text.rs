//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use porter_engine::DocumentOutput;
use std::io::{self, Write};

/// Plain text formatter - one stem per line, documents written as stemmed
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_stem(&mut self, _word: &str, stem: &str) -> Result<()> {
        writeln!(self.writer, "{stem}")?;
        Ok(())
    }

    fn format_document(&mut self, _source: &str, document: &DocumentOutput) -> Result<()> {
        self.writer.write_all(document.text.as_bytes())?;
        if !document.text.is_empty() && !document.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
