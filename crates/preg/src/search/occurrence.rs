//! # Occurrence Search

use core::ops::Range;

use crate::{
    PregResult,
    regex::{
        ExecError,
        ExecErrorKind,
        ExecOptions,
        ExecOutcome,
        MatchOffsets,
        PatternMatcher,
        Subject,
    },
};

/// The offsets of one match, found by [`find_occurrence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    offsets: MatchOffsets,
    match_count: usize,
}

impl Occurrence {
    /// The span of the whole match.
    pub fn span(&self) -> Option<Range<usize>> {
        self.group(0)
    }

    /// The span of group `group`, if it participated.
    pub fn group(
        &self,
        group: usize,
    ) -> Option<Range<usize>> {
        if group < self.match_count {
            self.offsets.group(group)
        } else {
            None
        }
    }

    /// One more than the highest participating group.
    pub fn match_count(&self) -> usize {
        self.match_count
    }
}

/// Find the `occurrence`-th match of `matcher` in `subject`.
///
/// Matches are counted from the start of the subject, with the same
/// empty-match advancement as substitution.
///
/// ## Arguments
/// * `matcher` - the compiled pattern.
/// * `subject` - the subject.
/// * `occurrence` - which match, counting from 1; `0` is treated as `1`.
///
/// ## Returns
/// The [`Occurrence`]; `None` if there are fewer matches.
pub fn find_occurrence<M>(
    matcher: &M,
    subject: &Subject<'_>,
    occurrence: usize,
) -> PregResult<Option<Occurrence>>
where
    M: PatternMatcher + ?Sized,
{
    let target = occurrence.max(1);
    let mut offsets = MatchOffsets::for_capture_count(matcher.capture_count()?)?;
    let mut seen = 0;
    let mut start = 0;
    let mut not_empty = false;

    loop {
        let options = ExecOptions::default().with_not_empty_at_start(not_empty);
        let match_count = match matcher.exec(subject, start, options, &mut offsets)? {
            ExecOutcome::Matched(count) => count,
            ExecOutcome::TooManySubstrings => offsets.group_capacity(),
            ExecOutcome::NoMatch => {
                if not_empty && start < subject.len() {
                    start += matcher.advance_len(subject, start).max(1);
                    not_empty = false;
                    continue;
                }
                return Ok(None);
            }
        };

        let whole = offsets
            .group(0)
            .filter(|span| span.start >= start && span.end <= subject.len())
            .ok_or_else(|| ExecError::from(ExecErrorKind::Internal))?;

        seen += 1;
        if seen == target {
            return Ok(Some(Occurrence {
                offsets,
                match_count,
            }));
        }

        not_empty = whole.is_empty();
        start = whole.end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::{CompiledPattern, MatchLimits};

    fn spans(
        raw: &str,
        subject: &str,
    ) -> Vec<Range<usize>> {
        let pattern =
            CompiledPattern::from_delimited(raw.as_bytes(), &MatchLimits::default()).unwrap();
        let subject = Subject::new(subject.as_bytes());
        (1..)
            .map_while(|n| {
                find_occurrence(&pattern, &subject, n)
                    .unwrap()
                    .and_then(|o| o.span())
            })
            .collect()
    }

    #[test]
    fn test_occurrences() {
        assert_eq!(spans(r"/\d+/", "a1b22c333"), vec![1..2, 3..5, 6..9]);
        assert_eq!(spans("/x/", "abc"), Vec::<Range<usize>>::new());
    }

    #[test]
    fn test_empty_matches_advance() {
        assert_eq!(spans("/b*/", "abc"), vec![0..0, 1..2, 2..2, 3..3]);
    }

    #[test]
    fn test_zero_is_first() {
        let pattern =
            CompiledPattern::from_delimited(b"/(a)|(b)/", &MatchLimits::default()).unwrap();
        let subject = Subject::new(b"xb");
        let found = find_occurrence(&pattern, &subject, 0).unwrap().unwrap();
        assert_eq!(found.span(), Some(1..2));
        assert_eq!(found.match_count(), 3);
        assert_eq!(found.group(1), None);
        assert_eq!(found.group(2), Some(1..2));
        assert_eq!(found.group(3), None);
    }
}
