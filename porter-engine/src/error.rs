//! Engine error types

use porter_core::StemError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A word could not be stemmed
    #[error("failed to stem {word:?}: {source}")]
    Stem {
        /// The word that was rejected
        word: String,
        /// The core error
        #[source]
        source: StemError,
    },

    /// Core error not tied to a particular word
    #[error("core error: {0}")]
    Core(#[from] StemError),

    /// Worker pool could not be built
    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

impl EngineError {
    /// Attach the offending word to a core error
    pub fn stem(word: &str, source: StemError) -> Self {
        EngineError::Stem {
            word: word.to_string(),
            source,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
