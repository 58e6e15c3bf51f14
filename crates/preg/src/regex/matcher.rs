//! # Pattern Matcher Trait

use crate::{
    PregResult,
    regex::{ExecError, ExecOptions, ExecOutcome, MatchOffsets, Subject},
};

/// A compiled pattern which can be executed at an offset.
///
/// This is the seam between the match loops (substitution, search)
/// and the regex engine.
pub trait PatternMatcher {
    /// The number of capturing groups, excluding the whole match.
    fn capture_count(&self) -> PregResult<usize>;

    /// The index of the named group `name`, if there is one.
    fn group_index(
        &self,
        name: &str,
    ) -> Option<usize>;

    /// Search `subject` for a match starting at or after `start`.
    ///
    /// ## Arguments
    /// * `subject` - the subject.
    /// * `start` - the byte offset to search from.
    /// * `options` - per-call options.
    /// * `offsets` - cleared, then filled with the participating groups.
    ///
    /// ## Returns
    /// The [`ExecOutcome`], or an engine [`ExecError`].
    fn exec(
        &self,
        subject: &Subject<'_>,
        start: usize,
        options: ExecOptions,
        offsets: &mut MatchOffsets,
    ) -> Result<ExecOutcome, ExecError>;

    /// How many bytes to step over after an empty match at `pos`.
    ///
    /// Defaults to a single byte; `0` at the end of the subject.
    fn advance_len(
        &self,
        subject: &Subject<'_>,
        pos: usize,
    ) -> usize {
        usize::from(pos < subject.len())
    }
}
