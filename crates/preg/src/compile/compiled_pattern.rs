//! # Compiled Pattern

use crate::{
    PregError,
    PregResult,
    compile::MatchLimits,
    pattern::{PatternFlags, PatternSpec, parse_delimited},
    regex::{
        ExecError,
        ExecOptions,
        ExecOutcome,
        MatchOffsets,
        PatternMatcher,
        RegexPattern,
        RegexWrapper,
        Subject,
    },
};

/// A pattern compiled for matching.
///
/// Holds the engine handle, the capture count, and the flags it was
/// built with. The engine is released on drop.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: RegexWrapper,
    capture_count: usize,
    flags: PatternFlags,
    body: String,
    studied: bool,
}

/// Compile a parsed pattern.
///
/// ## Arguments
/// * `spec` - the parsed pattern.
/// * `limits` - resource limits forced onto the engine.
///
/// ## Returns
/// The [`CompiledPattern`], or:
/// * [`PregError::CompileFailed`] - the engine rejected the body.
/// * [`PregError::IntrospectionFailed`] - the capture count was unavailable.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(spec, limits)))]
pub fn compile(
    spec: &PatternSpec,
    limits: &MatchLimits,
) -> PregResult<CompiledPattern> {
    let body = String::from_utf8_lossy(spec.body()).into_owned();
    let source = core::str::from_utf8(spec.body()).map_err(|err| PregError::CompileFailed {
        pattern: body.clone(),
        message: "invalid UTF-8 sequence".to_string(),
        offset: err.valid_up_to(),
    })?;

    let regex = RegexPattern::from(source)
        .compile_with(spec.flags(), limits)
        .map_err(|err| PregError::CompileFailed {
            pattern: body.clone(),
            message: err.to_string(),
            offset: err.offset(),
        })?;

    if spec.study()
        && let Err(err) = regex.optimize()
    {
        log::warn!("study of /{body}/ failed: {err}");
    }

    // Group 0 is always counted, so this only fails for an engine which
    // reports no groups at all.
    let capture_count = regex
        .captures_len()
        .checked_sub(1)
        .ok_or(PregError::IntrospectionFailed)?;

    Ok(CompiledPattern {
        regex,
        capture_count,
        flags: spec.flags(),
        body,
        studied: spec.study(),
    })
}

impl CompiledPattern {
    /// Parse and compile a delimited pattern, such as ``/abc/i``.
    ///
    /// ## Arguments
    /// * `raw` - the delimited pattern.
    /// * `limits` - resource limits forced onto the engine.
    pub fn from_delimited(
        raw: &[u8],
        limits: &MatchLimits,
    ) -> PregResult<Self> {
        compile(&parse_delimited(raw)?, limits)
    }

    /// Does `raw` parse and compile?
    pub fn check(raw: &[u8]) -> bool {
        Self::from_delimited(raw, &MatchLimits::default()).is_ok()
    }

    /// The engine handle.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }

    /// The compile flags.
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// The pattern body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Was the pattern studied?
    pub fn studied(&self) -> bool {
        self.studied
    }

    /// Allocate offsets sized for this pattern.
    pub fn new_offsets(&self) -> PregResult<MatchOffsets> {
        MatchOffsets::for_capture_count(self.capture_count)
    }
}

impl PatternMatcher for CompiledPattern {
    fn capture_count(&self) -> PregResult<usize> {
        Ok(self.capture_count)
    }

    fn group_index(
        &self,
        name: &str,
    ) -> Option<usize> {
        self.regex.group_index(name)
    }

    fn exec(
        &self,
        subject: &Subject<'_>,
        start: usize,
        options: ExecOptions,
        offsets: &mut MatchOffsets,
    ) -> Result<ExecOutcome, ExecError> {
        let anchored = options.anchored || self.flags.contains(PatternFlags::ANCHORED);
        self.regex
            .exec(subject, start, options.with_anchored(anchored), offsets)
    }

    fn advance_len(
        &self,
        subject: &Subject<'_>,
        pos: usize,
    ) -> usize {
        if self.flags.contains(PatternFlags::UTF8) {
            subject.char_len_at(pos)
        } else {
            self.regex.advance_len(subject, pos)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(raw: &str) -> CompiledPattern {
        CompiledPattern::from_delimited(raw.as_bytes(), &MatchLimits::default()).unwrap()
    }

    fn first_match(
        pattern: &CompiledPattern,
        subject: &str,
    ) -> Option<core::ops::Range<usize>> {
        let mut offsets = pattern.new_offsets().unwrap();
        let subject = Subject::new(subject.as_bytes());
        match pattern
            .exec(&subject, 0, ExecOptions::default(), &mut offsets)
            .unwrap()
        {
            ExecOutcome::NoMatch => None,
            _ => offsets.group(0),
        }
    }

    #[test]
    fn test_compile() {
        let pattern = compiled("/(a)(?<name>b)c/i");
        assert_eq!(pattern.capture_count(), Ok(2));
        assert_eq!(pattern.group_index("name"), Some(2));
        assert_eq!(pattern.body(), "(a)(?<name>b)c");
        assert_eq!(pattern.flags(), PatternFlags::CASELESS);
        assert!(!pattern.studied());
        assert_eq!(first_match(&pattern, "xABC"), Some(1..4));
    }

    #[test]
    fn test_flags_apply() {
        assert_eq!(first_match(&compiled("/^b/m"), "a\nb"), Some(2..3));
        assert_eq!(first_match(&compiled("/^b/"), "a\nb"), None);
        assert_eq!(first_match(&compiled("/a.b/s"), "a\nb"), Some(0..3));
        assert_eq!(first_match(&compiled("/a b/x"), "ab"), Some(0..2));
        assert_eq!(first_match(&compiled("/a+/U"), "aaa"), Some(0..1));
        assert_eq!(first_match(&compiled("/b/A"), "ab"), None);
        assert_eq!(first_match(&compiled("/a/A"), "ab"), Some(0..1));
    }

    #[test]
    fn test_study_and_fallback() {
        let pattern = compiled(r"/(\w)\1/S");
        assert!(pattern.studied());
        assert!(pattern.regex().is_fancy());
        assert_eq!(first_match(&pattern, "abccd"), Some(2..4));
    }

    #[test]
    fn test_compile_failure_echoes_body() {
        let err = CompiledPattern::from_delimited(b"/a(b/", &MatchLimits::default()).unwrap_err();
        match err {
            PregError::CompileFailed { pattern, message, .. } => {
                assert_eq!(pattern, "a(b");
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err =
            CompiledPattern::from_delimited(b"/ab\xff/", &MatchLimits::default()).unwrap_err();
        assert!(matches!(err, PregError::CompileFailed { offset: 2, .. }));
    }

    #[test]
    fn test_recursion_limit() {
        let shallow = MatchLimits::default().with_recursion_limit(2);
        for raw in [&b"/((((((a))))))/"[..], &br"/((((((a))))))\6/"[..]] {
            let err = CompiledPattern::from_delimited(raw, &shallow).unwrap_err();
            assert!(matches!(err, PregError::CompileFailed { .. }), "{err:?}");
        }

        let pattern =
            CompiledPattern::from_delimited(br"/((((((a))))))\6/", &MatchLimits::default())
                .unwrap();
        assert!(pattern.regex().is_fancy());
        assert_eq!(first_match(&pattern, "xaa"), Some(1..3));
    }

    #[test]
    fn test_check() {
        assert!(CompiledPattern::check(b"/abc/i"));
        assert!(!CompiledPattern::check(b"/a(/"));
        assert!(!CompiledPattern::check(b"abc"));
        assert!(!CompiledPattern::check(b"/abc/q"));
    }

    #[test]
    fn test_utf8_advance() {
        let subject = Subject::new("éa".as_bytes());
        assert_eq!(compiled("/a/u").advance_len(&subject, 0), 2);
        assert_eq!(compiled("/a/").advance_len(&subject, 0), 1);
    }
}
