//! # Match Queries

use crate::{
    PregResult,
    regex::{ExecOptions, ExecOutcome, MatchOffsets, PatternMatcher, Subject},
    search::find_occurrence,
};

/// A capture group, by index or by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupRef<'a> {
    /// A group index; `0` is the whole match.
    Index(usize),

    /// A named group.
    Name(&'a str),
}

impl Default for GroupRef<'_> {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl From<usize> for GroupRef<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for GroupRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl GroupRef<'_> {
    /// Resolve to a group index of `matcher`.
    ///
    /// ## Returns
    /// The index; `None` for an unknown name or an index past the last group.
    pub fn resolve<M>(
        &self,
        matcher: &M,
    ) -> PregResult<Option<usize>>
    where
        M: PatternMatcher + ?Sized,
    {
        Ok(match *self {
            Self::Index(index) => (index <= matcher.capture_count()?).then_some(index),
            Self::Name(name) => matcher.group_index(name),
        })
    }
}

/// Locate a group of the `occurrence`-th match.
fn locate<M>(
    matcher: &M,
    subject: &[u8],
    group: GroupRef<'_>,
    occurrence: usize,
) -> PregResult<Option<core::ops::Range<usize>>>
where
    M: PatternMatcher + ?Sized,
{
    let Some(index) = group.resolve(matcher)? else {
        return Ok(None);
    };
    let found = find_occurrence(matcher, &Subject::new(subject), occurrence)?;
    Ok(found.and_then(|o| o.group(index)))
}

/// The bytes of a group of the `occurrence`-th match.
///
/// ## Arguments
/// * `matcher` - the compiled pattern.
/// * `subject` - the subject bytes.
/// * `group` - which group.
/// * `occurrence` - which match, counting from 1; `0` is treated as `1`.
///
/// ## Returns
/// The captured bytes; `None` if there is no such match, or the group is
/// unknown or did not participate.
pub fn capture<'s, M>(
    matcher: &M,
    subject: &'s [u8],
    group: GroupRef<'_>,
    occurrence: usize,
) -> PregResult<Option<&'s [u8]>>
where
    M: PatternMatcher + ?Sized,
{
    Ok(locate(matcher, subject, group, occurrence)?.and_then(|span| subject.get(span)))
}

/// The 1-based byte position of a group of the `occurrence`-th match.
///
/// See [`capture`].
pub fn position<M>(
    matcher: &M,
    subject: &[u8],
    group: GroupRef<'_>,
    occurrence: usize,
) -> PregResult<Option<u64>>
where
    M: PatternMatcher + ?Sized,
{
    Ok(locate(matcher, subject, group, occurrence)?.map(|span| span.start as u64 + 1))
}

/// Does `matcher` match anywhere in `subject`?
///
/// An empty subject never matches.
pub fn is_match<M>(
    matcher: &M,
    subject: &[u8],
) -> PregResult<bool>
where
    M: PatternMatcher + ?Sized,
{
    if subject.is_empty() {
        return Ok(false);
    }
    let mut offsets = MatchOffsets::with_group_capacity(1)?;
    let outcome = matcher.exec(
        &Subject::new(subject),
        0,
        ExecOptions::default(),
        &mut offsets,
    )?;
    Ok(!matches!(outcome, ExecOutcome::NoMatch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::{CompiledPattern, MatchLimits};

    fn pattern(raw: &str) -> CompiledPattern {
        CompiledPattern::from_delimited(raw.as_bytes(), &MatchLimits::default()).unwrap()
    }

    #[test]
    fn test_capture() {
        let p = pattern(r"/(?<word>[a-z]+)(\d)?/");
        let subject = b"ab1 cd ef2";

        assert_eq!(capture(&p, subject, GroupRef::default(), 1).unwrap(), Some(&b"ab1"[..]));
        assert_eq!(capture(&p, subject, GroupRef::Index(1), 2).unwrap(), Some(&b"cd"[..]));
        assert_eq!(capture(&p, subject, GroupRef::Name("word"), 3).unwrap(), Some(&b"ef"[..]));
        assert_eq!(capture(&p, subject, GroupRef::Index(2), 3).unwrap(), Some(&b"2"[..]));

        // Non-participating, unknown, out of range, past the last match.
        assert_eq!(capture(&p, subject, GroupRef::Index(2), 2).unwrap(), None);
        assert_eq!(capture(&p, subject, GroupRef::Name("nope"), 1).unwrap(), None);
        assert_eq!(capture(&p, subject, GroupRef::Index(3), 1).unwrap(), None);
        assert_eq!(capture(&p, subject, GroupRef::Index(0), 4).unwrap(), None);
    }

    #[test]
    fn test_position() {
        let p = pattern(r"/(\d)(\d)/");
        let subject = b"ab12cd34";
        assert_eq!(position(&p, subject, GroupRef::Index(0), 1).unwrap(), Some(3));
        assert_eq!(position(&p, subject, GroupRef::Index(2), 1).unwrap(), Some(4));
        assert_eq!(position(&p, subject, GroupRef::Index(1), 2).unwrap(), Some(7));
        assert_eq!(position(&p, subject, GroupRef::Index(1), 3).unwrap(), None);
    }

    #[test]
    fn test_is_match() {
        assert!(is_match(&pattern("/b/"), b"abc").unwrap());
        assert!(!is_match(&pattern("/d/"), b"abc").unwrap());
        assert!(!is_match(&pattern("/x*/"), b"").unwrap());

        // More groups than the offsets hold still counts.
        assert!(is_match(&pattern("/(a)(b)/"), b"ab").unwrap());
    }
}
