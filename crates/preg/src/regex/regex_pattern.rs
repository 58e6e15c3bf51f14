//! # Regex Pattern Labels

use crate::{
    compile::MatchLimits,
    pattern::PatternFlags,
    regex::{ErrorWrapper, RegexWrapper},
};

/// Inline flag letters, for flags the engines express inline.
const INLINE_FLAGS: [(PatternFlags, char); 5] = [
    (PatternFlags::CASELESS, 'i'),
    (PatternFlags::MULTILINE, 'm'),
    (PatternFlags::DOTALL, 's'),
    (PatternFlags::EXTENDED, 'x'),
    (PatternFlags::UNGREEDY, 'U'),
];

/// Label for regex patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RegexPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

/// Build the inline flag group prefix for `flags`.
///
/// The byte engine runs in ASCII mode unless the `u` flag is set;
/// the backtracking engine is always Unicode-aware.
fn inline_prefix(
    flags: PatternFlags,
    basic: bool,
) -> String {
    let on: String = INLINE_FLAGS
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|(_, c)| *c)
        .collect();
    let off = if basic && !flags.contains(PatternFlags::UTF8) {
        "-u"
    } else {
        ""
    };
    if on.is_empty() && off.is_empty() {
        String::new()
    } else {
        format!("(?{on}{off})")
    }
}

/// Shift a fancy parse error position back past the inline prefix.
fn rebase_error(
    err: fancy_regex::Error,
    prefix_len: usize,
) -> fancy_regex::Error {
    match err {
        fancy_regex::Error::ParseError(pos, inner) => {
            fancy_regex::Error::ParseError(pos.saturating_sub(prefix_len), inner)
        }
        err => err,
    }
}

/// The deepest group nesting in `pattern`.
///
/// Escaped characters and class contents are skipped.
fn group_depth(pattern: &str) -> usize {
    let mut bytes = pattern.bytes().peekable();
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_class = false;
    while let Some(b) = bytes.next() {
        match b {
            b'\\' => {
                bytes.next();
            }
            b'[' if !in_class => {
                in_class = true;
                bytes.next_if_eq(&b'^');
                bytes.next_if_eq(&b']');
            }
            b']' if in_class => in_class = false,
            b'(' if !in_class => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b')' if !in_class => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a `RegexWrapper`, with default flags and limits.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        self.compile_with(PatternFlags::EMPTY, &MatchLimits::default())
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// ## Arguments
    /// * `flags` - compile flags; those with inline equivalents are prefixed.
    /// * `limits` - the engine resource limits.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    /// Error offsets are relative to the pattern, not the prefix.
    pub fn compile_with(
        &self,
        flags: PatternFlags,
        limits: &MatchLimits,
    ) -> Result<RegexWrapper, ErrorWrapper> {
        let basic = |pattern: &str| {
            let source = format!("{}{pattern}", inline_prefix(flags, true));
            regex::bytes::RegexBuilder::new(&source)
                .nest_limit(u32::try_from(limits.recursion_limit()).unwrap_or(u32::MAX))
                .build()
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from)
        };
        // The backtracking engine has no nest limit of its own.
        let fancy = |pattern: &str| {
            let depth = group_depth(pattern);
            if depth > limits.recursion_limit() {
                return Err(ErrorWrapper::NestLimit {
                    depth,
                    limit: limits.recursion_limit(),
                });
            }
            let prefix = inline_prefix(flags, false);
            let source = format!("{prefix}{pattern}");
            fancy_regex::RegexBuilder::new(&source)
                .backtrack_limit(limits.match_limit())
                .build()
                .map(RegexWrapper::from)
                .map_err(|err| ErrorWrapper::from(rebase_error(err, prefix.len())))
        };

        match self {
            Self::Basic(pattern) => basic(pattern),
            Self::Fancy(pattern) => fancy(pattern),
            Self::Adaptive(pattern) => basic(pattern).or_else(|_| fancy(pattern)),
        }
    }
}
