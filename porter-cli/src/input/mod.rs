//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// Lowercase a command-line word before stemming
pub fn normalize_word(word: &str) -> String {
    word.to_ascii_lowercase()
}
