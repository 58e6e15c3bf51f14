//! # Match Execution Types

use core::fmt::{Display, Formatter};

/// Per-call execution options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecOptions {
    /// The match must start exactly at the search offset.
    pub anchored: bool,

    /// The match must start at the search offset, and must not be empty.
    ///
    /// Used to step past a previous empty match.
    pub not_empty_at_start: bool,
}

impl ExecOptions {
    /// Set [`ExecOptions::anchored`].
    pub fn with_anchored(
        self,
        anchored: bool,
    ) -> Self {
        Self { anchored, ..self }
    }

    /// Set [`ExecOptions::not_empty_at_start`].
    pub fn with_not_empty_at_start(
        self,
        not_empty_at_start: bool,
    ) -> Self {
        Self {
            not_empty_at_start,
            ..self
        }
    }

    /// Must the match begin at the search offset?
    pub fn requires_start(&self) -> bool {
        self.anchored || self.not_empty_at_start
    }
}

/// The non-error result of a single match attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// A match; the value is one more than the highest participating group.
    Matched(usize),

    /// A match whose participating groups did not all fit the offsets buffer.
    ///
    /// The groups which fit were recorded.
    TooManySubstrings,

    /// No match at or after the search offset.
    NoMatch,
}

/// Symbolic names for engine error codes.
///
/// The discriminant is the negated code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::FromRepr, strum::IntoStaticStr, strum::EnumIter,
)]
#[repr(u8)]
#[non_exhaustive]
pub enum ExecErrorKind {
    /// No match.
    #[strum(to_string = "PCRE_ERROR_NOMATCH")]
    NoMatch = 1,

    /// A required argument was missing.
    #[strum(to_string = "PCRE_ERROR_NULL")]
    Null = 2,

    /// An unsupported option was passed.
    #[strum(to_string = "PCRE_ERROR_BADOPTION")]
    BadOption = 3,

    /// The compiled pattern was corrupt.
    #[strum(to_string = "PCRE_ERROR_BADMAGIC")]
    BadMagic = 4,

    /// The compiled pattern contained an unknown instruction.
    #[strum(to_string = "PCRE_ERROR_UNKNOWN_OPCODE")]
    UnknownOpcode = 5,

    /// The engine could not allocate working memory.
    #[strum(to_string = "PCRE_ERROR_NOMEMORY")]
    NoMemory = 6,

    /// A requested substring did not exist.
    #[strum(to_string = "PCRE_ERROR_NOSUBSTRING")]
    NoSubstring = 7,

    /// The backtracking limit was exceeded.
    #[strum(to_string = "PCRE_ERROR_MATCHLIMIT")]
    MatchLimit = 8,

    /// A callout failed.
    #[strum(to_string = "PCRE_ERROR_CALLOUT")]
    Callout = 9,

    /// The subject was not valid UTF-8.
    #[strum(to_string = "PCRE_ERROR_BADUTF8")]
    BadUtf8 = 10,

    /// The start offset was not on a UTF-8 character boundary.
    #[strum(to_string = "PCRE_ERROR_BADUTF8_OFFSET")]
    BadUtf8Offset = 11,

    /// A partial match.
    #[strum(to_string = "PCRE_ERROR_PARTIAL")]
    Partial = 12,

    /// The pattern cannot be partially matched.
    #[strum(to_string = "PCRE_ERROR_BADPARTIAL")]
    BadPartial = 13,

    /// An internal engine inconsistency.
    #[strum(to_string = "PCRE_ERROR_INTERNAL")]
    Internal = 14,

    /// A negative offsets count.
    #[strum(to_string = "PCRE_ERROR_BADCOUNT")]
    BadCount = 15,

    /// Unsupported item for DFA matching.
    #[strum(to_string = "PCRE_ERROR_DFA_UITEM")]
    DfaUitem = 16,

    /// Unsupported condition for DFA matching.
    #[strum(to_string = "PCRE_ERROR_DFA_UCOND")]
    DfaUcond = 17,

    /// Match limit unsupported for DFA matching.
    #[strum(to_string = "PCRE_ERROR_DFA_UMLIMIT")]
    DfaUmlimit = 18,

    /// DFA workspace too small.
    #[strum(to_string = "PCRE_ERROR_DFA_WSSIZE")]
    DfaWssize = 19,

    /// DFA recursion failure.
    #[strum(to_string = "PCRE_ERROR_DFA_RECURSE")]
    DfaRecurse = 20,

    /// The recursion limit was exceeded.
    #[strum(to_string = "PCRE_ERROR_RECURSIONLIMIT, try increasing mysqld:thread_stack")]
    RecursionLimit = 21,

    /// A null workspace limit.
    #[strum(to_string = "PCRE_ERROR_NULLWSLIMIT")]
    NullWsLimit = 22,

    /// An invalid newline convention.
    #[strum(to_string = "PCRE_ERROR_BADNEWLINE")]
    BadNewline = 23,

    /// The start offset was past the end of the subject.
    #[strum(to_string = "PCRE_ERROR_BADOFFSET")]
    BadOffset = 24,

    /// The subject ended inside a UTF-8 character.
    #[strum(to_string = "PCRE_ERROR_SHORTUTF8")]
    ShortUtf8 = 25,
}

impl ExecErrorKind {
    /// The engine code for this kind; always negative.
    pub fn code(self) -> i32 {
        -(self as i32)
    }

    /// The symbolic name.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Name reported for non-negative codes.
pub const NO_ERROR_NAME: &str = "NO_ERROR";

/// Name reported for codes outside the known table.
pub const UNKNOWN_ERROR_NAME: &str = "UNKNOWN_ERROR";

/// A failed match attempt, carrying a raw engine code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExecError {
    code: i32,
}

impl From<ExecErrorKind> for ExecError {
    fn from(kind: ExecErrorKind) -> Self {
        Self { code: kind.code() }
    }
}

impl ExecError {
    /// Wrap a raw code.
    pub fn new(code: i32) -> Self {
        Self { code }
    }

    /// The raw code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The known kind for this code, if any.
    pub fn kind(&self) -> Option<ExecErrorKind> {
        self.code
            .checked_neg()
            .and_then(|c| u8::try_from(c).ok())
            .and_then(ExecErrorKind::from_repr)
    }

    /// The symbolic name for this code.
    ///
    /// ## Returns
    /// * `"NO_ERROR"` for non-negative codes.
    /// * the kind name for known negative codes.
    /// * `"UNKNOWN_ERROR"` otherwise.
    pub fn name(&self) -> &'static str {
        if self.code >= 0 {
            return NO_ERROR_NAME;
        }
        self.kind().map_or(UNKNOWN_ERROR_NAME, ExecErrorKind::name)
    }
}

impl Display for ExecError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "regex exec returned error {} ({})", self.code, self.name())
    }
}

impl core::error::Error for ExecError {}
