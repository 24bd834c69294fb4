//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::ExecutionMode;
use porter_core::DEFAULT_CAPACITY;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of worker threads (None = rayon's global pool)
    pub threads: Option<usize>,
    /// Minimum batch size, in words, for adaptive mode to go parallel
    pub parallel_threshold: usize,
    /// Initial buffer size of each stemmer context
    pub initial_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 10_000,
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Single context, no worker threads
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Always fan out across worker threads
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            parallel_threshold: 0,
            ..Self::default()
        }
    }

    /// Check the configuration for values the engine cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
