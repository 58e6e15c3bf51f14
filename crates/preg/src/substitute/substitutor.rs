//! # Substitution Loop

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
    substitute::{OutputBuffer, ReplacementTemplate},
};

/// A non-fatal condition observed during substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[non_exhaustive]
pub enum Warning {
    /// A match had more groups than the offsets could hold.
    #[strum(to_string = "Matched, but too many substrings")]
    TooManySubstrings,
}

/// Counters from a [`substitute_into`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// The number of replacements made.
    pub replacements: u32,

    /// Warnings, in the order they occurred.
    pub warnings: Vec<Warning>,
}

/// The result of [`substitute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    bytes: Vec<u8>,
    report: SubstitutionReport,
}

impl Substitution {
    /// The output bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the output bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The number of replacements made.
    pub fn replacements(&self) -> u32 {
        self.report.replacements
    }

    /// Warnings, in the order they occurred.
    pub fn warnings(&self) -> &[Warning] {
        &self.report.warnings
    }
}

/// Check the offsets an engine reported for a match found at or after `start`.
///
/// ## Returns
/// The span of the whole match; or an `INTERNAL` error for offsets which
/// fall outside the subject, or for a repeated empty match.
fn checked_match(
    offsets: &MatchOffsets,
    match_count: usize,
    start: usize,
    len: usize,
    not_empty: bool,
) -> Result<core::ops::Range<usize>, ExecError> {
    let internal = || ExecError::from(ExecErrorKind::Internal);
    let whole = offsets.group(0).ok_or_else(internal)?;
    if whole.start < start || (not_empty && whole.is_empty() && whole.start == start) {
        return Err(internal());
    }
    for group in 0..match_count.min(offsets.group_capacity()) {
        if let Some(span) = offsets.group(group)
            && (span.start > span.end || span.end > len)
        {
            return Err(internal());
        }
    }
    Ok(whole)
}

/// Replace matches of `matcher` in `subject` into `out`.
///
/// Searching resumes at the end of each match. After an empty match, the
/// next attempt must be non-empty and start at the same offset; when it
/// fails, one advancement unit is copied through and the search moves on.
///
/// ## Arguments
/// * `matcher` - the compiled pattern.
/// * `subject` - the subject bytes.
/// * `template` - the replacement template.
/// * `limit` - the maximum number of replacements; `None` for unlimited.
/// * `out` - cleared, then filled with the result; left empty on error.
///
/// ## Returns
/// A [`SubstitutionReport`], or:
/// * [`crate::PregError::OutOfMemory`] - the buffer could not grow.
/// * [`crate::PregError::EngineExec`] - the engine failed.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(matcher, subject, template, out))
)]
pub fn substitute_into<M>(
    matcher: &M,
    subject: &[u8],
    template: &ReplacementTemplate<'_>,
    limit: Option<u32>,
    out: &mut OutputBuffer,
) -> PregResult<SubstitutionReport>
where
    M: PatternMatcher + ?Sized,
{
    out.clear();
    let result = replace_loop(matcher, subject, template, limit, out);
    if result.is_err() {
        out.clear();
    }
    result
}

fn replace_loop<M>(
    matcher: &M,
    subject: &[u8],
    template: &ReplacementTemplate<'_>,
    limit: Option<u32>,
    out: &mut OutputBuffer,
) -> PregResult<SubstitutionReport>
where
    M: PatternMatcher + ?Sized,
{
    let len = subject.len();
    out.grow_exact(len.saturating_mul(2))?;

    let text = Subject::new(subject);
    let mut offsets = MatchOffsets::for_capture_count(matcher.capture_count()?)?;
    let mut report = SubstitutionReport::default();
    let mut remaining = limit;
    let mut start = 0;
    let mut not_empty = false;

    loop {
        let options = ExecOptions::default().with_not_empty_at_start(not_empty);
        let match_count = match matcher.exec(&text, start, options, &mut offsets)? {
            ExecOutcome::Matched(count) => Some(count),
            ExecOutcome::TooManySubstrings => {
                log::warn!("{}", Warning::TooManySubstrings);
                report.warnings.push(Warning::TooManySubstrings);
                Some(offsets.group_capacity())
            }
            ExecOutcome::NoMatch => None,
        };

        match match_count {
            Some(count) if remaining != Some(0) => {
                let whole = checked_match(&offsets, count, start, len, not_empty)?;
                report.replacements = report.replacements.saturating_add(1);

                let required = out.len()
                    + (whole.start - start)
                    + template.expanded_len(subject, &offsets, count);
                out.grow_for(required)?;
                out.extend(&subject[start..whole.start]);
                template.expand_into(out, subject, &offsets, count);

                if let Some(n) = remaining.as_mut() {
                    *n -= 1;
                }
                not_empty = whole.is_empty();
                start = whole.end;
            }
            _ if not_empty && start < len => {
                let step = matcher.advance_len(&text, start).clamp(1, len - start);
                out.grow_for(out.len() + step)?;
                out.extend(&subject[start..start + step]);
                not_empty = false;
                start += step;
            }
            _ => {
                out.grow_exact(out.len() + (len - start))?;
                out.extend(&subject[start..]);
                return Ok(report);
            }
        }
    }
}

/// Replace matches of `matcher` in `subject`, into a new buffer.
///
/// See [`substitute_into`].
pub fn substitute<M>(
    matcher: &M,
    subject: &[u8],
    template: &ReplacementTemplate<'_>,
    limit: Option<u32>,
) -> PregResult<Substitution>
where
    M: PatternMatcher + ?Sized,
{
    let mut out = OutputBuffer::new();
    let report = substitute_into(matcher, subject, template, limit, &mut out)?;
    Ok(Substitution {
        bytes: out.into_vec(),
        report,
    })
}
