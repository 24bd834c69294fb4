//! Execution strategies for word batches

use crate::error::{EngineError, Result};
use porter_core::Stemmer;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One stemmer context on the calling thread
    Sequential,
    /// One stemmer context per worker thread
    Parallel,
    /// Choose by batch size
    Adaptive,
}

impl ExecutionMode {
    /// Lowercase name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Stem every word, preserving input order
    fn stem_words<S: AsRef<str> + Sync>(&self, words: &[S]) -> Result<Vec<String>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on batch size
pub fn auto_select(word_count: usize, threshold: usize) -> ExecutionMode {
    if word_count < threshold.max(1) {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Stem one word in a context, attaching the word to any failure
pub(crate) fn stem_one(stemmer: &mut Stemmer, word: &str) -> Result<String> {
    stemmer
        .stem_str(word)
        .map(str::to_owned)
        .map_err(|source| EngineError::stem(word, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_select_small_batches_stay_sequential() {
        assert_eq!(auto_select(0, 100), ExecutionMode::Sequential);
        assert_eq!(auto_select(99, 100), ExecutionMode::Sequential);
        assert_eq!(auto_select(0, 0), ExecutionMode::Sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_auto_select_large_batches_go_parallel() {
        assert_eq!(auto_select(100, 100), ExecutionMode::Parallel);
        assert_eq!(auto_select(1, 0), ExecutionMode::Parallel);
    }

    #[test]
    fn test_stem_one_reports_word() {
        let mut stemmer = Stemmer::new();
        assert_eq!(stem_one(&mut stemmer, "ponies").unwrap(), "poni");

        let err = stem_one(&mut stemmer, "Ponies").unwrap_err();
        assert!(matches!(err, EngineError::Stem { ref word, .. } if word == "Ponies"));
    }
}
