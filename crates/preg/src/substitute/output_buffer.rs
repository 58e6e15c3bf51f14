//! # Output Buffer

use crate::PregResult;

/// A growable output byte buffer, with a tracked allocation size.
///
/// The tracked capacity is always at least one more than the length,
/// and follows a fixed growth rule; see [`OutputBuffer::grow_for`].
/// Allocation failures surface as [`crate::PregError::OutOfMemory`].
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    buf: Vec<u8>,
    alloc: usize,
}

impl OutputBuffer {
    /// An empty buffer with no allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty buffer with `capacity` bytes reserved.
    pub fn with_capacity(capacity: usize) -> PregResult<Self> {
        let mut buf = Self::new();
        buf.grow_exact(capacity.saturating_sub(1))?;
        Ok(buf)
    }

    /// The written length.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Is nothing written?
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The tracked allocation size.
    pub fn capacity(&self) -> usize {
        self.alloc
    }

    /// The written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Drop the written bytes; the allocation is kept.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Consume the buffer, returning the written bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    fn reserve_to(
        &mut self,
        alloc: usize,
    ) -> PregResult<()> {
        self.buf
            .try_reserve_exact(alloc.saturating_sub(self.buf.len()))?;
        self.alloc = alloc;
        Ok(())
    }

    /// Make room for a total length of `required`, growing geometrically.
    ///
    /// When ``required + 1`` exceeds the capacity, it grows to
    /// ``capacity + 2 * required + 1``.
    pub fn grow_for(
        &mut self,
        required: usize,
    ) -> PregResult<()> {
        if required.saturating_add(1) > self.alloc {
            let alloc = self
                .alloc
                .saturating_add(required.saturating_mul(2))
                .saturating_add(1);
            log::debug!("growing output buffer from {} to {alloc} bytes", self.alloc);
            self.reserve_to(alloc)?;
        }
        Ok(())
    }

    /// Make room for a total length of exactly `required`.
    ///
    /// When ``required + 1`` exceeds the capacity, it grows to ``required + 1``.
    pub fn grow_exact(
        &mut self,
        required: usize,
    ) -> PregResult<()> {
        if required.saturating_add(1) > self.alloc {
            self.reserve_to(required.saturating_add(1))?;
        }
        Ok(())
    }

    /// Append bytes.
    pub fn extend(
        &mut self,
        bytes: &[u8],
    ) {
        self.buf.extend_from_slice(bytes);
        self.alloc = self.alloc.max(self.buf.len() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PregError;

    #[test]
    fn test_growth_rule() {
        let mut buf = OutputBuffer::with_capacity(5).unwrap();
        assert_eq!(buf.capacity(), 5);

        buf.grow_for(4).unwrap();
        assert_eq!(buf.capacity(), 5);

        buf.grow_for(5).unwrap();
        assert_eq!(buf.capacity(), 5 + 2 * 5 + 1);

        buf.grow_exact(100).unwrap();
        assert_eq!(buf.capacity(), 101);

        buf.grow_exact(50).unwrap();
        assert_eq!(buf.capacity(), 101);
    }

    #[test]
    fn test_write_and_clear() {
        let mut buf = OutputBuffer::new();
        assert_eq!(buf.capacity(), 0);

        buf.extend(b"abc");
        assert_eq!(buf.as_bytes(), b"abc");
        assert!(buf.capacity() > buf.len());

        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 4);

        buf.extend(b"xy");
        assert_eq!(buf.into_vec(), b"xy".to_vec());
    }

    #[test]
    fn test_allocation_failure() {
        let mut buf = OutputBuffer::new();
        buf.extend(b"a");
        assert_eq!(buf.grow_exact(usize::MAX / 2), Err(PregError::OutOfMemory));
        assert_eq!(buf.as_bytes(), b"a");

        assert_eq!(
            OutputBuffer::with_capacity(usize::MAX / 2).unwrap_err(),
            PregError::OutOfMemory
        );
    }
}
