//! Application orchestration for Porter stemming
//!
//! This crate provides execution strategies and batch coordination on top
//! of `porter-core`. Each worker owns its own [`porter_core::Stemmer`], so
//! no stemmer context is ever shared between threads.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod processor;
pub mod text;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{auto_select, ExecutionMode, Executor};
pub use processor::{
    BatchMetadata, BatchOutput, BatchStemmer, BatchStemmerBuilder, DocumentOutput,
};
pub use text::stem_text;

// Re-export from core for convenience
pub use porter_core::{StemError, StepTrace, Stemmer};
