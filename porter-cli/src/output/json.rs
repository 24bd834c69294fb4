//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use porter_engine::DocumentOutput;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs word/stem records as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<StemRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StemRecord {
    /// The word as stemmed (lowercased)
    pub word: String,
    /// Its stem
    pub stem: String,
    /// File the word came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_stem(&mut self, word: &str, stem: &str) -> Result<()> {
        self.records.push(StemRecord {
            word: word.to_string(),
            stem: stem.to_string(),
            source: None,
        });
        Ok(())
    }

    fn format_document(&mut self, source: &str, document: &DocumentOutput) -> Result<()> {
        self.records.extend(
            document
                .words
                .iter()
                .zip(&document.stems)
                .map(|(word, stem)| StemRecord {
                    word: word.clone(),
                    stem: stem.clone(),
                    source: Some(source.to_string()),
                }),
        );
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
