//! # Replacement Templates

use core::ops::Range;

use crate::{regex::MatchOffsets, substitute::OutputBuffer};

/// One piece of a [`ReplacementTemplate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken {
    /// Bytes copied verbatim; a span of the raw template.
    Literal(Range<usize>),

    /// The bytes of a capture group.
    Backref(usize),
}

/// A pre-tokenized replacement template.
///
/// Backreferences are written ``$N``, ``${N}``, ``\N`` or ``\{N}``; bare
/// forms read every consecutive digit. A ``\`` or ``$`` which directly
/// follows a literal ``\`` replaces that backslash, so ``\\`` yields ``\``
/// and ``\$`` yields ``$``.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTemplate<'t> {
    raw: &'t [u8],
    tokens: Vec<TemplateToken>,
}

/// Read a backreference starting at `raw[idx]`, which is ``\`` or ``$``.
///
/// ## Returns
/// The group index and the index just past the reference; or `None`
/// if this is not a well-formed reference.
fn read_backref(
    raw: &[u8],
    idx: usize,
) -> Option<(usize, usize)> {
    let mut pos = idx + 1;
    let braced = raw.get(pos) == Some(&b'{');
    if braced {
        pos += 1;
    }

    let digits = raw.get(pos..)?.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let group = raw[pos..pos + digits].iter().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    });
    pos += digits;

    if braced {
        if raw.get(pos) != Some(&b'}') {
            return None;
        }
        pos += 1;
    }
    Some((group, pos))
}

fn push_literal(
    tokens: &mut Vec<TemplateToken>,
    span: Range<usize>,
) {
    if !span.is_empty() {
        tokens.push(TemplateToken::Literal(span));
    }
}

/// The bytes of group `group`, or nothing if it did not participate.
fn group_bytes<'s>(
    subject: &'s [u8],
    offsets: &MatchOffsets,
    match_count: usize,
    group: usize,
) -> &'s [u8] {
    if group >= match_count {
        return &[];
    }
    offsets
        .group(group)
        .and_then(|span| subject.get(span))
        .unwrap_or(&[])
}

impl<'t> ReplacementTemplate<'t> {
    /// Tokenize a template.
    pub fn parse(raw: &'t [u8]) -> Self {
        let mut tokens = Vec::new();
        let mut literal_start = 0;
        let mut after_backslash = false;
        let mut idx = 0;
        while idx < raw.len() {
            let b = raw[idx];
            if b == b'\\' || b == b'$' {
                if after_backslash {
                    // Drop the preceding backslash; this byte is literal.
                    push_literal(&mut tokens, literal_start..idx - 1);
                    literal_start = idx;
                    after_backslash = false;
                    idx += 1;
                    continue;
                }
                if let Some((group, next)) = read_backref(raw, idx) {
                    push_literal(&mut tokens, literal_start..idx);
                    tokens.push(TemplateToken::Backref(group));
                    literal_start = next;
                    idx = next;
                    continue;
                }
            }
            after_backslash = b == b'\\';
            idx += 1;
        }
        push_literal(&mut tokens, literal_start..raw.len());

        Self { raw, tokens }
    }

    /// The token list.
    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    /// Does the template reference any group?
    pub fn has_backrefs(&self) -> bool {
        self.tokens
            .iter()
            .any(|t| matches!(t, TemplateToken::Backref(_)))
    }

    /// The expanded length for one match.
    ///
    /// ## Arguments
    /// * `subject` - the subject the match was found in.
    /// * `offsets` - the match offsets.
    /// * `match_count` - groups at or past this count expand to nothing.
    pub fn expanded_len(
        &self,
        subject: &[u8],
        offsets: &MatchOffsets,
        match_count: usize,
    ) -> usize {
        self.tokens
            .iter()
            .map(|token| match token {
                TemplateToken::Literal(span) => span.len(),
                TemplateToken::Backref(g) => group_bytes(subject, offsets, match_count, *g).len(),
            })
            .sum()
    }

    /// Append the expansion for one match to `out`.
    ///
    /// See [`ReplacementTemplate::expanded_len`].
    pub fn expand_into(
        &self,
        out: &mut OutputBuffer,
        subject: &[u8],
        offsets: &MatchOffsets,
        match_count: usize,
    ) {
        for token in &self.tokens {
            match token {
                TemplateToken::Literal(span) => out.extend(&self.raw[span.clone()]),
                TemplateToken::Backref(g) => {
                    out.extend(group_bytes(subject, offsets, match_count, *g))
                }
            }
        }
    }
}
