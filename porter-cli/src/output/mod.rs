//! Output formatting module

use anyhow::Result;
use porter_engine::DocumentOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single word and its stem
    fn format_stem(&mut self, word: &str, stem: &str) -> Result<()>;

    /// Format and output a stemmed document
    fn format_document(&mut self, source: &str, document: &DocumentOutput) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One stem per line; documents keep their layout
    Text,
    /// JSON array of word/stem records
    Json,
}

impl OutputFormat {
    /// Every supported format with a one-line description
    pub fn all() -> [(OutputFormat, &'static str); 2] {
        [
            (
                OutputFormat::Text,
                "one stem per line; documents keep their layout",
            ),
            (OutputFormat::Json, "JSON array of word/stem records"),
        ]
    }

    /// Name accepted by `--format`
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
