//! Porter stemming algorithm with reusable, thread-confined contexts
//!
//! This crate reduces lowercase English words to their stems by stripping
//! suffixes in the ordered steps of the Porter algorithm (the thread-safe
//! reference release, including its published departures from the 1980
//! paper).
//!
//! # Architecture
//!
//! - **Classifier**: consonant/vowel predicates and the measure `m`
//! - **Rules**: static suffix tables, one per step, grouped by last letter
//! - **Engine**: applies the steps in order to a word buffer
//! - **Stemmer**: owns the buffer and is reused across calls
//!
//! # Example
//!
//! ```rust
//! use porter_core::Stemmer;
//!
//! let mut stemmer = Stemmer::new();
//!
//! let k = stemmer.stem(b"caresses", 7).unwrap();
//! assert_eq!(&stemmer.as_bytes()[..=k], b"caress");
//!
//! assert_eq!(stemmer.stem_str("relational").unwrap(), "relat");
//! ```

#![warn(missing_docs)]

pub mod buffer;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod rules;
pub mod stemmer;

pub use buffer::WordBuffer;
pub use classifier::LetterClass;
pub use engine::Outcome;
pub use error::{Result, StemError};
pub use rules::{Condition, Step, StepId, SuffixRule, STEPS};
pub use stemmer::{stem, StepTrace, Stemmer, DEFAULT_CAPACITY};
