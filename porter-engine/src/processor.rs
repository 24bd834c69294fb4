//! Batch stemming entry point

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
    text::letter_runs,
};
use std::time::Instant;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Stems for a batch, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutput {
    /// One stem per input word
    pub stems: Vec<String>,
    /// Processing metadata
    pub metadata: BatchMetadata,
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
pub struct BatchMetadata {
    /// Mode that actually ran (never `Adaptive`)
    pub execution_mode: ExecutionMode,
    /// Number of words stemmed
    pub words_processed: usize,
    /// Wall-clock time in milliseconds
    pub processing_time_ms: f64,
}

/// A stemmed document and the words it was split into
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOutput {
    /// The document with every word replaced by its stem
    pub text: String,
    /// Lowercased words, in document order
    pub words: Vec<String>,
    /// Stem of each word
    pub stems: Vec<String>,
    /// Processing metadata for the word batch
    pub metadata: BatchMetadata,
}

/// Stems word batches, sequentially or across worker threads
#[derive(Debug)]
pub struct BatchStemmer {
    config: EngineConfig,
    sequential: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel: ParallelExecutor,
}

impl BatchStemmer {
    /// Create a batch stemmer from a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            sequential: SequentialExecutor::new(config.initial_capacity),
            #[cfg(feature = "parallel")]
            parallel: ParallelExecutor::new(config.threads, config.initial_capacity)?,
            config,
        })
    }

    /// Create a builder for custom configuration
    pub fn builder() -> BatchStemmerBuilder {
        BatchStemmerBuilder::new()
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Stem a batch using the configured execution mode
    pub fn stem_words<S: AsRef<str> + Sync>(&self, words: &[S]) -> Result<BatchOutput> {
        self.stem_words_with_mode(words, self.config.execution_mode)
    }

    /// Stem a batch with an explicit execution mode
    pub fn stem_words_with_mode<S: AsRef<str> + Sync>(
        &self,
        words: &[S],
        mode: ExecutionMode,
    ) -> Result<BatchOutput> {
        let start = Instant::now();
        let mode = match mode {
            ExecutionMode::Adaptive => auto_select(words.len(), self.config.parallel_threshold),
            other => other,
        };

        tracing::debug!(mode = mode.name(), words = words.len(), "stemming batch");

        let (stems, mode_used) = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => (self.parallel.stem_words(words)?, self.parallel.mode()),
            _ => (self.sequential.stem_words(words)?, self.sequential.mode()),
        };

        Ok(BatchOutput {
            metadata: BatchMetadata {
                execution_mode: mode_used,
                words_processed: stems.len(),
                processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            },
            stems,
        })
    }

    /// Stem every word of a document as one batch
    ///
    /// Produces the same text as [`crate::text::stem_text`], but the words
    /// go through the configured execution mode.
    pub fn stem_document(&self, text: &str) -> Result<DocumentOutput> {
        let runs: Vec<(usize, &str)> = letter_runs(text).collect();
        let words: Vec<String> = runs
            .iter()
            .map(|(_, run)| run.to_ascii_lowercase())
            .collect();

        let BatchOutput { stems, metadata } = self.stem_words(&words)?;

        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        for (&(offset, run), stem) in runs.iter().zip(&stems) {
            out.push_str(&text[copied..offset]);
            out.push_str(stem);
            copied = offset + run.len();
        }
        out.push_str(&text[copied..]);

        Ok(DocumentOutput {
            text: out,
            words,
            stems,
            metadata,
        })
    }
}

impl Default for BatchStemmer {
    fn default() -> Self {
        Self {
            sequential: SequentialExecutor::new(EngineConfig::default().initial_capacity),
            #[cfg(feature = "parallel")]
            parallel: ParallelExecutor::global(EngineConfig::default().initial_capacity),
            config: EngineConfig::default(),
        }
    }
}

/// Builder for [`BatchStemmer`]
#[derive(Debug, Default)]
pub struct BatchStemmerBuilder {
    config: EngineConfig,
}

impl BatchStemmerBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the worker thread count (None = rayon's global pool)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the batch size at which adaptive mode goes parallel
    pub fn parallel_threshold(mut self, words: usize) -> Self {
        self.config.parallel_threshold = words;
        self
    }

    /// Set the initial buffer size of each stemmer context
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Build the batch stemmer
    pub fn build(self) -> Result<BatchStemmer> {
        BatchStemmer::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineError;

    #[test]
    fn test_builder_sets_fields() {
        let stemmer = BatchStemmer::builder()
            .execution_mode(ExecutionMode::Sequential)
            .threads(Some(2))
            .parallel_threshold(5)
            .initial_capacity(8)
            .build()
            .unwrap();

        let config = stemmer.config();
        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.parallel_threshold, 5);
        assert_eq!(config.initial_capacity, 8);
    }

    #[test]
    fn test_builder_rejects_zero_threads() {
        let err = BatchStemmer::builder().threads(Some(0)).build().unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn test_adaptive_small_batch_runs_sequential() {
        let stemmer = BatchStemmer::default();
        let output = stemmer.stem_words(&["motoring", "sing"]).unwrap();

        assert_eq!(output.stems, vec!["motor", "sing"]);
        assert_eq!(output.metadata.execution_mode, ExecutionMode::Sequential);
        assert_eq!(output.metadata.words_processed, 2);
        assert!(output.metadata.processing_time_ms >= 0.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_adaptive_large_batch_runs_parallel() {
        let stemmer = BatchStemmer::builder()
            .parallel_threshold(3)
            .threads(Some(2))
            .build()
            .unwrap();
        let output = stemmer
            .stem_words(&["feed", "agreed", "plastered", "bled"])
            .unwrap();

        assert_eq!(output.stems, vec!["feed", "agre", "plaster", "bled"]);
        assert_eq!(output.metadata.execution_mode, ExecutionMode::Parallel);
    }

    #[test]
    fn test_stem_document_matches_text_pass() {
        let document = "Sized, HOPPING and troubled -- 3 rational falling ties.";

        let mut expected = String::new();
        crate::text::stem_text(&mut porter_core::Stemmer::new(), document, &mut expected)
            .unwrap();

        let output = BatchStemmer::default().stem_document(document).unwrap();
        assert_eq!(output.text, expected);
        assert_eq!(output.text, "size, hop and troubl -- 3 ration fall ti.");
        assert_eq!(output.words[1], "hopping");
        assert_eq!(output.stems[1], "hop");
        assert_eq!(output.metadata.words_processed, 7);
    }

    #[test]
    fn test_stem_document_without_words() {
        let output = BatchStemmer::default().stem_document("1, 2, 3!").unwrap();
        assert_eq!(output.text, "1, 2, 3!");
        assert!(output.words.is_empty());
    }

    #[test]
    fn test_explicit_mode_overrides_config() {
        let stemmer = BatchStemmer::new(EngineConfig::parallel()).unwrap();
        let output = stemmer
            .stem_words_with_mode(&["hopeful"], ExecutionMode::Sequential)
            .unwrap();
        assert_eq!(output.stems, vec!["hope"]);
        assert_eq!(output.metadata.execution_mode, ExecutionMode::Sequential);
    }
}
