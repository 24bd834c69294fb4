//! Reusable stemmer context
//!
//! A [`Stemmer`] owns the word buffer the engine works on. Contexts share
//! no mutable state, so independent threads can each stem with their own
//! context without locking. A single context is not meant to be shared
//! between threads.

use crate::buffer::WordBuffer;
use crate::engine;
use crate::error::{Result, StemError};
use crate::rules::StepId;

/// Initial buffer size of a new context
pub const DEFAULT_CAPACITY: usize = 32;

/// The word as it stood after one step of the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepTrace {
    /// The step that just ran
    pub step: StepId,
    /// The word after that step
    pub word: String,
}

/// Stemmer context wrapping a reusable word buffer
#[derive(Debug, Clone)]
pub struct Stemmer {
    buffer: WordBuffer,
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer {
    /// Create a context with the default buffer size
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a context with room for `capacity` bytes before growing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: WordBuffer::with_capacity(capacity),
        }
    }

    /// Release the context and its buffer
    pub fn destroy(self) {
        drop(self);
    }

    /// Stem `word[..=end_index]` and return the new end index
    ///
    /// The input is copied into the context's buffer, which grows first if
    /// the word does not fit. Read the result with [`Stemmer::as_bytes`].
    /// The returned index never exceeds `end_index`.
    ///
    /// # Errors
    ///
    /// Fails if `word` is empty, `end_index` is outside it, the range holds
    /// anything but `a..=z`, or the buffer cannot grow.
    pub fn stem(&mut self, word: &[u8], end_index: usize) -> Result<usize> {
        if word.is_empty() {
            return Err(StemError::EmptyWord);
        }
        if end_index >= word.len() {
            return Err(StemError::EndIndexOutOfRange {
                end_index,
                len: word.len(),
            });
        }

        let word = &word[..=end_index];
        validate(word)?;

        self.buffer.load(word)?;
        engine::run(&mut self.buffer)?;

        self.buffer.end_index().ok_or(StemError::EmptyWord)
    }

    /// Stem a whole word and borrow the result
    ///
    /// The empty string stems to itself.
    pub fn stem_str(&mut self, word: &str) -> Result<&str> {
        if word.is_empty() {
            self.buffer.clear();
            return Ok("");
        }
        self.stem(word.as_bytes(), word.len() - 1)?;
        Ok(self.as_str())
    }

    /// Stem `word`, recording the word after every step that ran
    ///
    /// Like [`Stemmer::stem_str`], the empty string stems to itself and
    /// records no steps.
    pub fn trace(&mut self, word: &str) -> Result<Vec<StepTrace>> {
        let bytes = word.as_bytes();
        if bytes.is_empty() {
            self.buffer.clear();
            return Ok(Vec::new());
        }
        validate(bytes)?;
        self.buffer.load(bytes)?;

        let mut steps = Vec::new();
        engine::run_with(&mut self.buffer, |step, word| {
            steps.push(StepTrace {
                step,
                word: ascii_to_string(word),
            });
        })?;
        Ok(steps)
    }

    /// The current stem
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// The current stem as text
    pub fn as_str(&self) -> &str {
        // The buffer only ever holds validated ASCII letters
        std::str::from_utf8(self.buffer.as_bytes()).unwrap_or_default()
    }

    /// Index of the last byte of the current stem
    pub fn end_index(&self) -> Option<usize> {
        self.buffer.end_index()
    }

    /// Length of the current stem
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if no stem is held
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Allocated buffer size in bytes
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

fn validate(word: &[u8]) -> Result<()> {
    match word.iter().position(|b| !b.is_ascii_lowercase()) {
        Some(position) => Err(StemError::InvalidByte {
            byte: word[position],
            position,
        }),
        None => Ok(()),
    }
}

fn ascii_to_string(word: &[u8]) -> String {
    word.iter().map(|&b| b as char).collect()
}

/// Stem `word` with a fresh context
///
/// Convenient for one-off calls; reuse a [`Stemmer`] when stemming many
/// words.
pub fn stem(word: &str) -> Result<String> {
    let mut stemmer = Stemmer::new();
    stemmer.stem_str(word).map(str::to_owned)
}
