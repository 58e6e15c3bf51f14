//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

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

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(regex::Error),

    /// Error from `fancy_regex`.
    Fancy(fancy_regex::Error),

    /// Group nesting deeper than the recursion limit.
    NestLimit {
        /// The deepest group nesting in the pattern.
        depth: usize,

        /// The recursion limit.
        limit: usize,
    },
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err)
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err)
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
            Self::NestLimit { depth, limit } => {
                write!(f, "group nesting depth {depth} exceeds the recursion limit {limit}")
            }
        }
    }
}

impl core::error::Error for ErrorWrapper {}

impl ErrorWrapper {
    /// The byte offset of a parse error, where the engine reports one.
    ///
    /// ## Returns
    /// The offset, or `0` when the engine gives no position.
    pub fn offset(&self) -> usize {
        match self {
            Self::Fancy(fancy_regex::Error::ParseError(pos, _)) => *pos,
            _ => 0,
        }
    }
}

/// Map a backtracking engine failure onto an exec code.
fn fancy_exec_error(err: fancy_regex::Error) -> ExecError {
    use fancy_regex::{Error, RuntimeError};
    match err {
        Error::RuntimeError(RuntimeError::BacktrackLimitExceeded) => {
            ExecErrorKind::MatchLimit.into()
        }
        Error::RuntimeError(RuntimeError::StackOverflow) => ExecErrorKind::RecursionLimit.into(),
        _ => ExecErrorKind::Internal.into(),
    }
}

/// Copy a found match into `offsets`, applying the start constraints.
///
/// ## Arguments
/// * `groups` - every group span, group 0 first.
fn record_match<I>(
    mut groups: I,
    start: usize,
    options: ExecOptions,
    offsets: &mut MatchOffsets,
) -> ExecOutcome
where
    I: Iterator<Item = Option<Range<usize>>>,
{
    let Some(Some(whole)) = groups.next() else {
        return ExecOutcome::NoMatch;
    };
    if options.requires_start() && whole.start != start {
        return ExecOutcome::NoMatch;
    }
    if options.not_empty_at_start && whole.is_empty() {
        return ExecOutcome::NoMatch;
    }

    offsets.set_group(0, whole);
    let capacity = offsets.group_capacity();
    let mut count = 1;
    let mut overflow = false;
    for (group, span) in groups.enumerate().map(|(i, span)| (i + 1, span)) {
        let Some(span) = span else {
            continue;
        };
        if group < capacity {
            offsets.set_group(group, span);
            count = group + 1;
        } else {
            overflow = true;
        }
    }

    if overflow {
        ExecOutcome::TooManySubstrings
    } else {
        ExecOutcome::Matched(count)
    }
}

/// Wrapper for regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::bytes::Regex`.
    Basic(regex::bytes::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::bytes::Regex> for RegexWrapper {
    fn from(regex: regex::bytes::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::bytes::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        match self {
            Self::Basic(_) => true,
            Self::Fancy(_) => false,
        }
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        match self {
            Self::Basic(_) => false,
            Self::Fancy(_) => true,
        }
    }

    /// Get the compiled regex source, inline flags included.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// The number of groups, including the whole match.
    pub fn captures_len(&self) -> usize {
        match self {
            Self::Basic(regex) => regex.captures_len(),
            Self::Fancy(regex) => regex.captures_len(),
        }
    }

    /// Run one throwaway search, so lazily built engine state is ready.
    ///
    /// ## Returns
    /// `Ok(())`, or the engine error the search raised.
    pub fn optimize(&self) -> Result<(), ErrorWrapper> {
        match self {
            Self::Basic(regex) => {
                let _ = regex.is_match(b"");
                Ok(())
            }
            Self::Fancy(regex) => regex.is_match("").map(|_| ()).map_err(ErrorWrapper::from),
        }
    }
}

impl PatternMatcher for RegexWrapper {
    fn capture_count(&self) -> PregResult<usize> {
        Ok(self.captures_len().saturating_sub(1))
    }

    fn group_index(
        &self,
        name: &str,
    ) -> Option<usize> {
        match self {
            Self::Basic(regex) => regex.capture_names().position(|n| n == Some(name)),
            Self::Fancy(regex) => regex.capture_names().position(|n| n == Some(name)),
        }
    }

    fn exec(
        &self,
        subject: &Subject<'_>,
        start: usize,
        options: ExecOptions,
        offsets: &mut MatchOffsets,
    ) -> Result<ExecOutcome, ExecError> {
        if start > subject.len() {
            return Err(ExecErrorKind::BadOffset.into());
        }
        offsets.clear();

        match self {
            Self::Basic(regex) => {
                let Some(caps) = regex.captures_at(subject.as_bytes(), start) else {
                    return Ok(ExecOutcome::NoMatch);
                };
                let groups = (0..caps.len()).map(|g| caps.get(g).map(|m| m.range()));
                Ok(record_match(groups, start, options, offsets))
            }
            Self::Fancy(regex) => {
                let text = subject
                    .as_text()
                    .map_err(|_| ExecError::from(ExecErrorKind::BadUtf8))?;
                if !text.is_char_boundary(start) {
                    return Err(ExecErrorKind::BadUtf8Offset.into());
                }
                match regex.captures_from_pos(text, start) {
                    Ok(None) => Ok(ExecOutcome::NoMatch),
                    Ok(Some(caps)) => {
                        let groups = (0..caps.len()).map(|g| caps.get(g).map(|m| m.range()));
                        Ok(record_match(groups, start, options, offsets))
                    }
                    Err(err) => Err(fancy_exec_error(err)),
                }
            }
        }
    }

    fn advance_len(
        &self,
        subject: &Subject<'_>,
        pos: usize,
    ) -> usize {
        match self {
            Self::Basic(_) => usize::from(pos < subject.len()),
            Self::Fancy(_) => subject.char_len_at(pos),
        }
    }
}
