//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{stem_one, ExecutionMode, Executor},
};
use porter_core::Stemmer;

/// Single-threaded executor sharing one stemmer context across the batch
#[derive(Debug, Clone, Copy)]
pub struct SequentialExecutor {
    initial_capacity: usize,
}

impl SequentialExecutor {
    /// Create a new sequential executor
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}

impl Executor for SequentialExecutor {
    fn stem_words<S: AsRef<str> + Sync>(&self, words: &[S]) -> Result<Vec<String>> {
        let mut stemmer = Stemmer::with_capacity(self.initial_capacity);
        let mut stems = Vec::with_capacity(words.len());

        for word in words {
            stems.push(stem_one(&mut stemmer, word.as_ref())?);
        }

        stemmer.destroy();
        Ok(stems)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
