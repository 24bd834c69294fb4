//! Explain command implementation

use crate::input::normalize_word;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use porter_core::{StepTrace, Stemmer};
use serde::Serialize;
use std::io::{self, Write};

/// Arguments for the explain command
#[derive(Debug, Args)]
pub struct ExplainArgs {
    /// Word to trace through the pipeline
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// The word after every step, plus the final stem
#[derive(Debug, Serialize)]
pub struct Explanation {
    /// Lowercased input
    pub word: String,
    /// Word after each step that ran
    pub steps: Vec<StepTrace>,
    /// Final stem
    pub stem: String,
}

impl ExplainArgs {
    /// Execute the explain command
    pub fn execute(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    /// Trace the word and write the report
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let explanation = explain(&self.word)?;

        match self.format {
            OutputFormat::Text => {
                writeln!(out, "{:<8}{}", "input", explanation.word)?;
                for step in &explanation.steps {
                    writeln!(out, "{:<8}{}", step.step.name(), step.word)?;
                }
                writeln!(out, "{:<8}{}", "stem", explanation.stem)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &explanation)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Trace `word` through a fresh stemmer
pub fn explain(word: &str) -> Result<Explanation> {
    let word = normalize_word(word);
    let steps = Stemmer::new()
        .trace(&word)
        .with_context(|| format!("Failed to explain {word:?}"))?;
    let stem = steps
        .last()
        .map_or_else(|| word.clone(), |last| last.word.clone());

    Ok(Explanation { word, steps, stem })
}
