//! Owned word buffer with explicit capacity
//!
//! Storage only ever grows. Stemming changes the logical length; bytes
//! past it are stale and are overwritten by the next load or append.

use crate::error::{Result, StemError};

/// Mutable, growable buffer holding the word being stemmed
#[derive(Debug, Clone)]
pub struct WordBuffer {
    /// Physical storage; its length is the capacity
    storage: Box<[u8]>,
    /// Number of live bytes, `storage[..len]`
    len: usize,
}

impl WordBuffer {
    /// Create an empty buffer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Allocated size in bytes
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of live bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no word is loaded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the last live byte (`k`), or `None` when empty
    #[inline]
    pub fn end_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// The live word
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// Last live byte
    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// Make sure at least `needed` bytes fit, reallocating if necessary
    ///
    /// Capacity at least doubles on each growth. Live bytes are preserved.
    pub fn reserve(&mut self, needed: usize) -> Result<()> {
        if needed <= self.capacity() {
            return Ok(());
        }

        let new_capacity = needed.max(self.capacity().saturating_mul(2));
        let mut grown: Vec<u8> = Vec::new();
        grown
            .try_reserve_exact(new_capacity)
            .map_err(|_| StemError::Allocation {
                requested: new_capacity,
            })?;
        grown.extend_from_slice(self.as_bytes());
        grown.resize(new_capacity, 0);

        tracing::debug!(
            from = self.capacity(),
            to = new_capacity,
            "growing word buffer"
        );
        self.storage = grown.into_boxed_slice();
        Ok(())
    }

    /// Replace the live contents with `word`, growing first if needed
    pub fn load(&mut self, word: &[u8]) -> Result<()> {
        self.reserve(word.len())?;
        self.storage[..word.len()].copy_from_slice(word);
        self.len = word.len();
        Ok(())
    }

    /// Check if the live word ends with `suffix`
    #[inline]
    pub fn ends_with(&self, suffix: &[u8]) -> bool {
        self.as_bytes().ends_with(suffix)
    }

    /// Shorten the live word to `len` bytes; storage is untouched
    ///
    /// # Panics
    ///
    /// Panics if `len` is longer than the live word.
    pub fn truncate(&mut self, len: usize) {
        assert!(len <= self.len, "cannot truncate {} bytes to {len}", self.len);
        self.len = len;
    }

    /// Keep the first `stem_len` bytes and append `replacement`
    ///
    /// Growth is checked before writing, so a replacement longer than the
    /// suffix it replaces never writes past the allocation.
    pub fn replace_tail(&mut self, stem_len: usize, replacement: &[u8]) -> Result<()> {
        self.truncate(stem_len);
        let new_len = stem_len + replacement.len();
        self.reserve(new_len)?;
        self.storage[stem_len..new_len].copy_from_slice(replacement);
        self.len = new_len;
        Ok(())
    }

    /// Append a single byte
    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.reserve(self.len + 1)?;
        self.storage[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Forget the live word without touching storage
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_view() {
        let mut buf = WordBuffer::with_capacity(8);
        buf.load(b"cats").unwrap();
        assert_eq!(buf.as_bytes(), b"cats");
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.end_index(), Some(3));
        assert_eq!(buf.last(), Some(b's'));
        assert!(buf.ends_with(b"ts"));
    }

    #[test]
    fn test_load_grows_capacity() {
        let mut buf = WordBuffer::with_capacity(2);
        buf.load(b"internationalization").unwrap();
        assert!(buf.capacity() >= 20);
        assert_eq!(buf.as_bytes(), b"internationalization");
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let mut buf = WordBuffer::with_capacity(4);
        buf.load(b"abcdefghij").unwrap();
        let grown = buf.capacity();
        buf.load(b"ab").unwrap();
        assert_eq!(buf.capacity(), grown);
        buf.truncate(1);
        assert_eq!(buf.capacity(), grown);
    }

    #[test]
    fn test_reserve_doubles() {
        let mut buf = WordBuffer::with_capacity(16);
        buf.reserve(17).unwrap();
        assert_eq!(buf.capacity(), 32);
        buf.reserve(100).unwrap();
        assert_eq!(buf.capacity(), 100);
    }

    #[test]
    fn test_reserve_failure_is_reported() {
        let mut buf = WordBuffer::with_capacity(1);
        let err = buf.reserve(usize::MAX).unwrap_err();
        assert!(matches!(err, StemError::Allocation { .. }));
    }

    #[test]
    fn test_replace_tail_grows_at_capacity() {
        let mut buf = WordBuffer::with_capacity(5);
        buf.load(b"sized").unwrap();
        buf.replace_tail(3, b"ize").unwrap();
        assert_eq!(buf.as_bytes(), b"sizize");
        assert!(buf.capacity() >= 6);
    }

    #[test]
    fn test_push_at_capacity() {
        let mut buf = WordBuffer::with_capacity(3);
        buf.load(b"hop").unwrap();
        buf.push(b'e').unwrap();
        assert_eq!(buf.as_bytes(), b"hope");
    }

    #[test]
    fn test_stale_bytes_are_hidden() {
        let mut buf = WordBuffer::with_capacity(8);
        buf.load(b"motoring").unwrap();
        buf.truncate(5);
        assert_eq!(buf.as_bytes(), b"motor");
        buf.push(b'x').unwrap();
        assert_eq!(buf.as_bytes(), b"motorx");
    }

    #[test]
    #[should_panic]
    fn test_truncate_past_end_panics() {
        let mut buf = WordBuffer::with_capacity(4);
        buf.load(b"ab").unwrap();
        buf.truncate(3);
    }
}
