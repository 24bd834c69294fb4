//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{stem_one, ExecutionMode, Executor},
};
use porter_core::Stemmer;
use rayon::prelude::*;
use rayon::ThreadPool;

/// Multi-threaded executor with one stemmer context per worker
#[derive(Debug)]
pub struct ParallelExecutor {
    initial_capacity: usize,
    pool: Option<ThreadPool>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    ///
    /// With `threads` set, a dedicated pool of that size is built;
    /// otherwise rayon's global pool is used.
    pub fn new(threads: Option<usize>, initial_capacity: usize) -> Result<Self> {
        let Some(count) = threads else {
            return Ok(Self::global(initial_capacity));
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(count)
            .thread_name(|i| format!("porter-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        Ok(Self {
            initial_capacity,
            pool: Some(pool),
        })
    }

    /// Executor on rayon's global pool
    pub fn global(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            pool: None,
        }
    }

    /// Number of workers that will share a batch
    pub fn worker_count(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads().min(num_cpus::get().max(1)),
        }
    }

    fn stem_parallel<S: AsRef<str> + Sync>(&self, words: &[S]) -> Result<Vec<String>> {
        let capacity = self.initial_capacity;
        words
            .par_iter()
            .map_init(
                || Stemmer::with_capacity(capacity),
                |stemmer, word| stem_one(stemmer, word.as_ref()),
            )
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn stem_words<S: AsRef<str> + Sync>(&self, words: &[S]) -> Result<Vec<String>> {
        tracing::debug!(
            words = words.len(),
            workers = self.worker_count(),
            "stemming batch in parallel"
        );
        match &self.pool {
            Some(pool) => pool.install(|| self.stem_parallel(words)),
            None => self.stem_parallel(words),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SequentialExecutor;

    fn vocabulary() -> Vec<String> {
        ["relational", "conditional", "hopping", "sized", "adjustment", "enjoy"]
            .iter()
            .cycle()
            .take(600)
            .map(|w| w.to_string())
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let words = vocabulary();
        let parallel = ParallelExecutor::new(Some(4), 2).unwrap();
        let sequential = SequentialExecutor::new(2);

        assert_eq!(
            parallel.stem_words(&words).unwrap(),
            sequential.stem_words(&words).unwrap()
        );
        assert_eq!(parallel.worker_count(), 4);
    }

    #[test]
    fn test_parallel_global_pool() {
        let executor = ParallelExecutor::new(None, 32).unwrap();
        let stems = executor.stem_words(&["hopping", "falling"]).unwrap();
        assert_eq!(stems, vec!["hop", "fall"]);
        assert!(executor.worker_count() >= 1);
        assert_eq!(executor.mode(), ExecutionMode::Parallel);
    }

    #[test]
    fn test_parallel_reports_failure() {
        let mut words = vocabulary();
        words[321] = "Broken".to_string();
        let executor = ParallelExecutor::new(Some(2), 32).unwrap();
        let err = executor.stem_words(&words).unwrap_err();
        assert!(matches!(err, EngineError::Stem { ref word, .. } if word == "Broken"));
    }
}
