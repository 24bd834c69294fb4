//! Core error types (deterministic only)

use thiserror::Error;

/// Errors raised by the stemmer context
///
/// The rule engine itself is total over lowercase ASCII letters; every
/// variant here is either a caller contract violation or a failed
/// allocation while growing the word buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StemError {
    /// The word buffer could not grow to the requested capacity
    #[error("failed to grow word buffer to {requested} bytes")]
    Allocation {
        /// Capacity that was requested
        requested: usize,
    },

    /// The supplied end index does not address a byte of the word
    #[error("end index {end_index} out of range for word of length {len}")]
    EndIndexOutOfRange {
        /// End index passed by the caller
        end_index: usize,
        /// Length of the supplied word
        len: usize,
    },

    /// Nothing to stem
    #[error("cannot stem an empty word")]
    EmptyWord,

    /// A byte outside `a..=z` was found in the word
    #[error("invalid byte 0x{byte:02x} at position {position}: expected a lowercase ASCII letter")]
    InvalidByte {
        /// The offending byte
        byte: u8,
        /// Its position in the word
        position: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, StemError>;
