//! Stem command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{normalize_word, resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use porter_engine::{BatchStemmer, ExecutionMode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the stem command
#[derive(Debug, Args)]
pub struct StemArgs {
    /// Words to stem (lowercased first)
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Force parallel processing even for small batches
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "PORTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl StemArgs {
    /// Execute the stem command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::debug!("Arguments: {:?}", self);

        if self.words.is_empty() && self.input.is_empty() {
            return Err(CliError::NoInput.into());
        }

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };
        let stemmer = self.batch_stemmer(&config)?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, config.output.pretty_json))
            }
        };

        self.stem_words(&stemmer, formatter.as_mut())?;
        self.stem_files(&stemmer, formatter.as_mut())?;
        formatter.finish()
    }

    /// Engine settings from the config file, overridden by flags
    fn batch_stemmer(&self, config: &CliConfig) -> Result<BatchStemmer> {
        let mut engine = config.engine_config();
        if self.threads.is_some() {
            engine.threads = self.threads;
        }
        if self.parallel {
            engine.execution_mode = ExecutionMode::Parallel;
        }

        log::info!(
            "Execution mode: {}, worker threads: {}",
            engine.execution_mode.name(),
            engine.threads.unwrap_or_else(num_cpus::get)
        );

        BatchStemmer::new(engine).context("Failed to set up the stemmer")
    }

    fn stem_words(&self, stemmer: &BatchStemmer, formatter: &mut dyn OutputFormatter) -> Result<()> {
        if self.words.is_empty() {
            return Ok(());
        }

        let words: Vec<String> = self.words.iter().map(|w| normalize_word(w)).collect();
        let output = stemmer
            .stem_words(&words)
            .context("Failed to stem command-line words")?;

        for (word, stem) in words.iter().zip(&output.stems) {
            formatter.format_stem(word, stem)?;
        }
        Ok(())
    }

    fn stem_files(&self, stemmer: &BatchStemmer, formatter: &mut dyn OutputFormatter) -> Result<()> {
        if self.input.is_empty() {
            return Ok(());
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to stem", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let source = path.display().to_string();
            let content = FileReader::read_text(path)?;
            let document = stemmer
                .stem_document(&content)
                .with_context(|| format!("Failed to stem file: {source}"))?;

            log::debug!(
                "{}: {} words in {:.2} ms ({})",
                source,
                document.metadata.words_processed,
                document.metadata.processing_time_ms,
                document.metadata.execution_mode.name()
            );

            formatter.format_document(&source, &document)?;
            progress.file_completed(&source, document.words.len());
        }

        progress.finish();
        Ok(())
    }
}
