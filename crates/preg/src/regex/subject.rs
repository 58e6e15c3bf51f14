//! # Subject Text

use core::{cell::OnceCell, str::Utf8Error};

/// A subject byte string, with lazily validated UTF-8 text.
///
/// The byte engine searches the bytes directly; the backtracking engine
/// needs `&str`, so validation happens once per subject, not per match.
#[derive(Debug, Clone)]
pub struct Subject<'s> {
    bytes: &'s [u8],
    text: OnceCell<Result<&'s str, Utf8Error>>,
}

impl<'s> From<&'s [u8]> for Subject<'s> {
    fn from(bytes: &'s [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'s> Subject<'s> {
    /// Wrap a subject.
    pub fn new(bytes: &'s [u8]) -> Self {
        Self {
            bytes,
            text: OnceCell::new(),
        }
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &'s [u8] {
        self.bytes
    }

    /// The byte length.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Is the subject empty?
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The subject as UTF-8 text; validated on first use.
    pub fn as_text(&self) -> Result<&'s str, Utf8Error> {
        *self
            .text
            .get_or_init(|| core::str::from_utf8(self.bytes))
    }

    /// The width of the UTF-8 character starting at `pos`.
    ///
    /// Judged by the lead byte alone; stray continuation bytes are one wide,
    /// and truncated sequences are clamped to the end of the subject.
    ///
    /// ## Returns
    /// `0` at or past the end; otherwise between `1` and `4`.
    pub fn char_len_at(
        &self,
        pos: usize,
    ) -> usize {
        let Some(&lead) = self.bytes.get(pos) else {
            return 0;
        };
        let width = match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        width.min(self.bytes.len() - pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_validation() {
        let subject = Subject::new("héllo".as_bytes());
        assert_eq!(subject.as_text(), Ok("héllo"));
        assert_eq!(subject.len(), 6);

        let subject = Subject::new(b"ab\xffcd");
        assert!(subject.as_text().is_err());
        assert_eq!(subject.as_bytes(), b"ab\xffcd");
    }

    #[test]
    fn test_char_len_at() {
        let subject = Subject::new("aé€😀".as_bytes());
        assert_eq!(subject.char_len_at(0), 1);
        assert_eq!(subject.char_len_at(1), 2);
        assert_eq!(subject.char_len_at(3), 3);
        assert_eq!(subject.char_len_at(6), 4);
        assert_eq!(subject.char_len_at(10), 0);

        let truncated = Subject::new(b"a\xe2\x82");
        assert_eq!(truncated.char_len_at(1), 2);
        assert_eq!(truncated.char_len_at(2), 1);
    }
}
