//! Running text through the stemmer
//!
//! Words are maximal runs of ASCII letters. Each run is lowercased and
//! stemmed; every other character is copied through unchanged, so the
//! output keeps the layout of the input.

use crate::error::{EngineError, Result};
use porter_core::Stemmer;

/// Iterator over `(byte_offset, run)` pairs of ASCII-letter runs
#[derive(Debug, Clone)]
pub struct LetterRuns<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for LetterRuns<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        let start = self.pos + bytes[self.pos..]
            .iter()
            .position(u8::is_ascii_alphabetic)?;
        let end = bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .map_or(bytes.len(), |n| start + n);

        self.pos = end;
        Some((start, &self.text[start..end]))
    }
}

/// Letter runs of `text`, in order
pub fn letter_runs(text: &str) -> LetterRuns<'_> {
    LetterRuns { text, pos: 0 }
}

/// Lowercased words of `text`, ready for batch stemming
pub fn words(text: &str) -> Vec<String> {
    letter_runs(text)
        .map(|(_, run)| run.to_ascii_lowercase())
        .collect()
}

/// Stem every word of `text` into `out`, returning the number of words
pub fn stem_text(stemmer: &mut Stemmer, text: &str, out: &mut String) -> Result<usize> {
    let mut word = String::new();
    let mut copied = 0;
    let mut count = 0;

    for (offset, run) in letter_runs(text) {
        out.push_str(&text[copied..offset]);

        word.clear();
        word.extend(run.chars().map(|c| c.to_ascii_lowercase()));
        let stem = stemmer
            .stem_str(&word)
            .map_err(|source| EngineError::stem(&word, source))?;
        out.push_str(stem);

        copied = offset + run.len();
        count += 1;
    }

    out.push_str(&text[copied..]);
    Ok(count)
}
