//! # Sessions
//!
//! A [`PregSession`] holds the state which outlives one call: a constant
//! pattern compiled once up front, and the output buffer reused by every
//! substitution. Non-constant patterns are compiled per call.

use core::ops::Deref;

use crate::{
    PregError,
    PregResult,
    compile::{CompiledPattern, MatchLimits},
    substitute::{OutputBuffer, ReplacementTemplate, SubstitutionReport, substitute_into},
};

/// The output buffer size when no maximum result length is known.
pub const DEFAULT_RETURN_BUFFER_SIZE: usize = 1_024_000;

/// The largest result length the host can return.
///
/// A larger `max_length` is treated as unknown.
pub const MAX_RESULT_LENGTH: usize = i32::MAX as usize;

/// Options for a [`PregSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Limits forced onto every compiled pattern.
    pub limits: MatchLimits,

    /// The maximum result length, when the caller knows one.
    pub max_length: Option<usize>,
}

impl SessionOptions {
    /// Set [`SessionOptions::limits`].
    pub fn with_limits(
        self,
        limits: MatchLimits,
    ) -> Self {
        Self { limits, ..self }
    }

    /// Set [`SessionOptions::max_length`].
    pub fn with_max_length(
        self,
        max_length: Option<usize>,
    ) -> Self {
        Self { max_length, ..self }
    }

    /// The initial output buffer size.
    ///
    /// ## Returns
    /// ``max_length + 1`` for a `max_length` in `1..=MAX_RESULT_LENGTH`;
    /// otherwise [`DEFAULT_RETURN_BUFFER_SIZE`].
    pub fn return_buffer_size(&self) -> usize {
        match self.max_length {
            Some(max) if (1..=MAX_RESULT_LENGTH).contains(&max) => max + 1,
            _ => DEFAULT_RETURN_BUFFER_SIZE,
        }
    }
}

/// A compiled pattern, either cached by the session or built for one call.
#[derive(Debug)]
pub enum PatternRef<'a> {
    /// The session's constant pattern.
    Cached(&'a CompiledPattern),

    /// A pattern compiled for this call; dropped with it.
    Owned(CompiledPattern),
}

impl Deref for PatternRef<'_> {
    type Target = CompiledPattern;

    fn deref(&self) -> &CompiledPattern {
        match self {
            Self::Cached(pattern) => pattern,
            Self::Owned(pattern) => pattern,
        }
    }
}

/// Compile a per-call pattern argument; a missing pattern is empty.
fn compile_arg(
    raw: Option<&[u8]>,
    limits: &MatchLimits,
) -> PregResult<CompiledPattern> {
    CompiledPattern::from_delimited(raw.ok_or(PregError::EmptyPattern)?, limits)
}

/// Per-query matching state.
#[derive(Debug)]
pub struct PregSession {
    constant: Option<CompiledPattern>,
    buffer: OutputBuffer,
    options: SessionOptions,
}

impl PregSession {
    /// Start a session.
    ///
    /// ## Arguments
    /// * `constant_pattern` - a pattern known for the whole session;
    ///   compiled now, and reused by every call.
    /// * `options` - the session options.
    ///
    /// ## Returns
    /// The session; or the constant pattern's compile error.
    ///
    /// The output buffer is sized up front when it can be; otherwise it
    /// starts empty and grows on demand.
    pub fn init(
        constant_pattern: Option<&[u8]>,
        options: SessionOptions,
    ) -> PregResult<Self> {
        let constant = constant_pattern
            .map(|raw| CompiledPattern::from_delimited(raw, &options.limits))
            .transpose()?;

        let size = options.return_buffer_size();
        let buffer = OutputBuffer::with_capacity(size).unwrap_or_else(|err| {
            log::warn!("preg session: output buffer of {size} bytes: {err}");
            OutputBuffer::new()
        });

        log::debug!(
            "preg session: constant={}, match_limit={}, recursion_limit={}, buffer={}",
            constant.is_some(),
            options.limits.match_limit(),
            options.limits.recursion_limit(),
            buffer.capacity(),
        );

        Ok(Self {
            constant,
            buffer,
            options,
        })
    }

    /// The session options.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// The constant pattern, if one was given at init.
    pub fn constant_pattern(&self) -> Option<&CompiledPattern> {
        self.constant.as_ref()
    }

    /// The pattern for one call.
    ///
    /// ## Arguments
    /// * `raw` - the call's pattern argument; ignored when the session
    ///   has a constant pattern.
    pub fn pattern_for(
        &self,
        raw: Option<&[u8]>,
    ) -> PregResult<PatternRef<'_>> {
        match &self.constant {
            Some(pattern) => Ok(PatternRef::Cached(pattern)),
            None => compile_arg(raw, &self.options.limits).map(PatternRef::Owned),
        }
    }

    /// Substitute into the session buffer.
    ///
    /// See [`crate::substitute::substitute_into`]; the result is read
    /// back with [`PregSession::output`].
    pub fn replace(
        &mut self,
        raw_pattern: Option<&[u8]>,
        subject: &[u8],
        template: &ReplacementTemplate<'_>,
        limit: Option<u32>,
    ) -> PregResult<SubstitutionReport> {
        self.buffer.clear();
        let pattern = match &self.constant {
            Some(pattern) => PatternRef::Cached(pattern),
            None => PatternRef::Owned(compile_arg(raw_pattern, &self.options.limits)?),
        };
        substitute_into(&*pattern, subject, template, limit, &mut self.buffer)
    }

    /// The output of the last [`PregSession::replace`].
    pub fn output(&self) -> &[u8] {
        self.buffer.as_bytes()
    }
}
