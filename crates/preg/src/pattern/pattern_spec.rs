//! # Pattern Spec

use crate::{
    PregError,
    PregResult,
    pattern::PatternFlags,
};

/// Bracket delimiter pairs; these nest.
const BRACKET_PAIRS: [(u8, u8); 4] = [(b'(', b')'), (b'[', b']'), (b'{', b'}'), (b'<', b'>')];

/// A parsed delimited pattern.
///
/// Built by [`parse_delimited`], and consumed by compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    /// The bytes between the delimiters, escapes included.
    body: Vec<u8>,

    /// Compile flags selected by the modifiers.
    flags: PatternFlags,

    /// Was the ``S`` (study) modifier given?
    study: bool,
}

impl PatternSpec {
    /// Build a spec directly from its parts.
    ///
    /// ## Arguments
    /// * `body` - the regex body; must not be empty.
    /// * `flags` - the compile flags.
    /// * `study` - request engine-side optimization.
    pub fn new<B: Into<Vec<u8>>>(
        body: B,
        flags: PatternFlags,
        study: bool,
    ) -> PregResult<Self> {
        let body = body.into();
        if body.is_empty() {
            return Err(PregError::EmptyPattern);
        }
        Ok(Self { body, flags, study })
    }

    /// The regex body, verbatim.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The compile flags.
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Was optimization requested?
    pub fn study(&self) -> bool {
        self.study
    }
}

/// The whitespace set skipped before the delimiter.
fn is_pattern_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Find the index of the end delimiter in `rest`.
///
/// A backslash skips the following byte. When `open != close`,
/// nested `open` bytes must be balanced before `close` ends the body.
fn find_end_delimiter(
    rest: &[u8],
    open: u8,
    close: u8,
) -> Option<usize> {
    let mut depth = 1usize;
    let mut idx = 0;
    while idx < rest.len() {
        let b = rest[idx];
        if b == b'\\' && idx + 1 < rest.len() {
            idx += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        } else if b == open {
            depth += 1;
        }
        idx += 1;
    }
    None
}

/// Parse a delimited pattern, such as ``/abc/i``.
///
/// ## Arguments
/// * `raw` - the full pattern text; leading whitespace is skipped.
///
/// ## Returns
/// The parsed [`PatternSpec`], or:
/// * [`PregError::EmptyPattern`] - nothing but whitespace, or an empty body.
/// * [`PregError::BadDelimiter`] - an alphanumeric or backslash delimiter.
/// * [`PregError::UnterminatedPattern`] - no matching end delimiter.
/// * [`PregError::UnknownModifier`] - an unrecognized trailing letter.
pub fn parse_delimited(raw: &[u8]) -> PregResult<PatternSpec> {
    let start = raw
        .iter()
        .position(|&b| !is_pattern_space(b))
        .ok_or(PregError::EmptyPattern)?;

    let open = raw[start];
    if open.is_ascii_alphanumeric() || open == b'\\' {
        return Err(PregError::BadDelimiter);
    }

    let close = BRACKET_PAIRS
        .iter()
        .find(|(o, _)| *o == open)
        .map_or(open, |(_, c)| *c);

    let rest = &raw[start + 1..];
    let end = find_end_delimiter(rest, open, close).ok_or(PregError::UnterminatedPattern {
        delimiter: char::from(close),
    })?;

    let mut flags = PatternFlags::EMPTY;
    let mut study = false;
    for &m in &rest[end + 1..] {
        match m {
            b'S' => study = true,
            b' ' | b'\n' => {}
            _ => match PatternFlags::from_modifier(m) {
                Some(flag) => flags |= flag,
                None => return Err(PregError::UnknownModifier(char::from(m))),
            },
        }
    }

    PatternSpec::new(&rest[..end], flags, study)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_pattern() {
        let spec = parse_delimited(b"/abc/i").unwrap();
        assert_eq!(spec.body(), b"abc");
        assert_eq!(spec.flags(), PatternFlags::CASELESS);
        assert!(!spec.study());
    }

    #[test]
    fn test_leading_whitespace_and_modifiers() {
        let spec = parse_delimited(b" \t\n#a/b#imsxADUXu S\n").unwrap();
        assert_eq!(spec.body(), b"a/b");
        assert!(spec.study());
        assert_eq!(spec.flags().to_string(), "imsxADUXu");
    }

    #[test]
    fn test_escaped_delimiter_is_kept_verbatim() {
        let spec = parse_delimited(br"/a\/b\\/").unwrap();
        assert_eq!(spec.body(), br"a\/b\\");
    }

    #[test]
    fn test_nested_brackets() {
        let spec = parse_delimited(b"(a(b)c)i").unwrap();
        assert_eq!(spec.body(), b"a(b)c");
        assert_eq!(spec.flags(), PatternFlags::CASELESS);

        let spec = parse_delimited(b"{x{2,3}}").unwrap();
        assert_eq!(spec.body(), b"x{2,3}");

        let spec = parse_delimited(br"<a\>b>").unwrap();
        assert_eq!(spec.body(), br"a\>b");

        // Unbalanced nesting never closes.
        assert_eq!(
            parse_delimited(b"[a[b]"),
            Err(PregError::UnterminatedPattern { delimiter: ']' })
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_delimited(b""), Err(PregError::EmptyPattern));
        assert_eq!(parse_delimited(b"  \n "), Err(PregError::EmptyPattern));
        assert_eq!(parse_delimited(b"//"), Err(PregError::EmptyPattern));
        assert_eq!(parse_delimited(b"5abc5"), Err(PregError::BadDelimiter));
        assert_eq!(parse_delimited(b"xabcx"), Err(PregError::BadDelimiter));
        assert_eq!(parse_delimited(br"\abc\"), Err(PregError::BadDelimiter));
        assert_eq!(
            parse_delimited(b"/abc"),
            Err(PregError::UnterminatedPattern { delimiter: '/' })
        );
        assert_eq!(
            parse_delimited(br"/abc\/"),
            Err(PregError::UnterminatedPattern { delimiter: '/' })
        );
        assert_eq!(
            parse_delimited(b"/abc/e"),
            Err(PregError::UnknownModifier('e'))
        );
    }

    #[test]
    fn test_trailing_backslash_does_not_escape_past_end() {
        assert_eq!(
            parse_delimited(b"/abc\\"),
            Err(PregError::UnterminatedPattern { delimiter: '/' })
        );
    }
}
