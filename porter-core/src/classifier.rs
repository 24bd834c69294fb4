//! Letter classification for suffix stripping
//!
//! Whether a letter is a consonant depends on the letter before it (`y`
//! after a consonant is a vowel), so every predicate here classifies the
//! word with a single left-to-right scan. Nothing is cached: callers pass
//! the live prefix after each mutation.

/// Classification of a single letter position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterClass {
    /// Consonant, including `y` at the start or after a vowel
    Consonant,
    /// One of `a e i o u`, or `y` following a consonant
    Vowel,
}

impl LetterClass {
    /// Check if this is a consonant
    #[inline]
    pub fn is_consonant(self) -> bool {
        matches!(self, LetterClass::Consonant)
    }

    /// Check if this is a vowel
    #[inline]
    pub fn is_vowel(self) -> bool {
        matches!(self, LetterClass::Vowel)
    }
}

/// Forward scan yielding the class of each letter in a word
#[derive(Debug, Clone)]
pub struct Classes<'a> {
    letters: std::slice::Iter<'a, u8>,
    prev: Option<LetterClass>,
}

impl Iterator for Classes<'_> {
    type Item = LetterClass;

    fn next(&mut self) -> Option<LetterClass> {
        let &letter = self.letters.next()?;
        let class = match letter {
            b'a' | b'e' | b'i' | b'o' | b'u' => LetterClass::Vowel,
            b'y' => match self.prev {
                Some(LetterClass::Consonant) => LetterClass::Vowel,
                _ => LetterClass::Consonant,
            },
            _ => LetterClass::Consonant,
        };
        self.prev = Some(class);
        Some(class)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.letters.size_hint()
    }
}

impl ExactSizeIterator for Classes<'_> {}

/// Classify every letter of `word`, left to right
pub fn classes(word: &[u8]) -> Classes<'_> {
    Classes {
        letters: word.iter(),
        prev: None,
    }
}

/// Check whether position `i` of `word` holds a consonant
///
/// # Panics
///
/// Panics if `i` is not a valid index into `word`.
pub fn is_consonant(word: &[u8], i: usize) -> bool {
    assert!(i < word.len(), "letter index {i} out of range");
    classes(&word[..=i])
        .last()
        .is_some_and(LetterClass::is_consonant)
}

/// Porter measure `m` of `word`
///
/// Any word can be written `[C](VC)^m[V]`; this returns `m`, the number of
/// vowel runs that are followed by a consonant run.
pub fn measure(word: &[u8]) -> usize {
    let mut m = 0;
    let mut prev = None;
    for class in classes(word) {
        if class.is_consonant() && prev == Some(LetterClass::Vowel) {
            m += 1;
        }
        prev = Some(class);
    }
    m
}

/// Check whether any letter in `word[lo..=hi]` is a vowel
///
/// Classification still starts from index 0 so a leading `y` in the range
/// is judged against the letter before it.
pub fn contains_vowel(word: &[u8], lo: usize, hi: usize) -> bool {
    if lo > hi || hi >= word.len() {
        return false;
    }
    classes(&word[..=hi])
        .skip(lo)
        .any(LetterClass::is_vowel)
}

/// Check whether the whole of `word` contains a vowel
pub fn has_vowel(word: &[u8]) -> bool {
    classes(word).any(LetterClass::is_vowel)
}

/// Check whether `word` ends consonant-vowel-consonant
///
/// The final consonant must not be `w`, `x` or `y`, so `hop` qualifies but
/// `snow`, `box` and `tray` do not.
pub fn ends_with_cvc(word: &[u8]) -> bool {
    let n = word.len();
    if n < 3 {
        return false;
    }
    if matches!(word[n - 1], b'w' | b'x' | b'y') {
        return false;
    }
    classes(word).skip(n - 3).eq([
        LetterClass::Consonant,
        LetterClass::Vowel,
        LetterClass::Consonant,
    ])
}

/// Check whether `word` ends in two identical consonants
pub fn ends_with_double_consonant(word: &[u8]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(word: &str) -> String {
        classes(word.as_bytes())
            .map(|c| if c.is_consonant() { 'c' } else { 'v' })
            .collect()
    }

    #[test]
    fn test_y_depends_on_previous_letter() {
        assert_eq!(pattern("toy"), "cvc");
        assert_eq!(pattern("syzygy"), "cvcvcv");
        assert_eq!(pattern("yes"), "cvc");
        assert_eq!(pattern("by"), "cv");
    }

    #[test]
    fn test_is_consonant() {
        let word = b"happy";
        assert!(is_consonant(word, 0));
        assert!(!is_consonant(word, 1));
        assert!(is_consonant(word, 3));
        assert!(!is_consonant(word, 4));
    }

    #[test]
    fn test_measure_examples() {
        for word in ["tr", "ee", "tree", "y", "by"] {
            assert_eq!(measure(word.as_bytes()), 0, "{word}");
        }
        for word in ["trouble", "oats", "trees", "ivy"] {
            assert_eq!(measure(word.as_bytes()), 1, "{word}");
        }
        for word in ["troubles", "private", "oaten", "orrery"] {
            assert_eq!(measure(word.as_bytes()), 2, "{word}");
        }
        assert_eq!(measure(b""), 0);
    }

    #[test]
    fn test_contains_vowel_range() {
        assert!(contains_vowel(b"plaster", 0, 6));
        assert!(!contains_vowel(b"bled", 0, 1));
        // "y" after a consonant counts as a vowel even when the
        // consonant sits outside the range
        assert!(contains_vowel(b"sky", 2, 2));
        assert!(!contains_vowel(b"abc", 2, 1));
        assert!(!contains_vowel(b"abc", 0, 3));
    }

    #[test]
    fn test_has_vowel() {
        assert!(has_vowel(b"motor"));
        assert!(!has_vowel(b"s"));
        assert!(!has_vowel(b""));
    }

    #[test]
    fn test_ends_with_cvc() {
        assert!(ends_with_cvc(b"hop"));
        assert!(ends_with_cvc(b"fil"));
        assert!(!ends_with_cvc(b"snow"));
        assert!(!ends_with_cvc(b"box"));
        assert!(!ends_with_cvc(b"tray"));
        assert!(!ends_with_cvc(b"fail"));
        assert!(!ends_with_cvc(b"at"));
    }

    #[test]
    fn test_ends_with_double_consonant() {
        assert!(ends_with_double_consonant(b"hopp"));
        assert!(ends_with_double_consonant(b"fall"));
        assert!(!ends_with_double_consonant(b"agree"));
        assert!(!ends_with_double_consonant(b"l"));
    }
}
