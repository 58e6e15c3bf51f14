//! # Pattern Flags

use core::{
    fmt::{Display, Formatter},
    ops::{BitOr, BitOrAssign},
};

/// A set of compile options, selected by pattern modifier letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PatternFlags(u16);

/// Modifier letters, in display order, with their flags.
const MODIFIERS: [(u8, PatternFlags); 9] = [
    (b'i', PatternFlags::CASELESS),
    (b'm', PatternFlags::MULTILINE),
    (b's', PatternFlags::DOTALL),
    (b'x', PatternFlags::EXTENDED),
    (b'A', PatternFlags::ANCHORED),
    (b'D', PatternFlags::DOLLAR_ENDONLY),
    (b'U', PatternFlags::UNGREEDY),
    (b'X', PatternFlags::EXTRA),
    (b'u', PatternFlags::UTF8),
];

impl PatternFlags {
    /// No flags.
    pub const EMPTY: Self = Self(0);

    /// ``i`` - case-insensitive matching.
    pub const CASELESS: Self = Self(1 << 0);

    /// ``m`` - ``^`` and ``$`` match at line boundaries.
    pub const MULTILINE: Self = Self(1 << 1);

    /// ``s`` - ``.`` matches newlines.
    pub const DOTALL: Self = Self(1 << 2);

    /// ``x`` - whitespace and ``#`` comments in the body are ignored.
    pub const EXTENDED: Self = Self(1 << 3);

    /// ``A`` - matches must start at the search offset.
    pub const ANCHORED: Self = Self(1 << 4);

    /// ``D`` - ``$`` matches only at the very end of the subject.
    pub const DOLLAR_ENDONLY: Self = Self(1 << 5);

    /// ``U`` - quantifiers are lazy by default, and ``?`` makes them greedy.
    pub const UNGREEDY: Self = Self(1 << 6);

    /// ``X`` - unknown escapes are errors.
    pub const EXTRA: Self = Self(1 << 7);

    /// ``u`` - the body and subject are treated as UTF-8.
    pub const UTF8: Self = Self(1 << 8);

    /// Look up the flag for a modifier letter.
    ///
    /// ## Arguments
    /// * `modifier` - the modifier byte.
    ///
    /// ## Returns
    /// The flag, or `None` if `modifier` does not name a compile flag.
    pub fn from_modifier(modifier: u8) -> Option<Self> {
        MODIFIERS
            .iter()
            .find(|(m, _)| *m == modifier)
            .map(|(_, flag)| *flag)
    }

    /// Are all of `other`'s flags set?
    pub const fn contains(
        self,
        other: Self,
    ) -> bool {
        self.0 & other.0 == other.0
    }

    /// Is no flag set?
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set all of `other`'s flags.
    pub fn insert(
        &mut self,
        other: Self,
    ) {
        self.0 |= other.0;
    }

    /// The modifier letters for the set flags.
    pub fn modifiers(self) -> String {
        MODIFIERS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(m, _)| char::from(*m))
            .collect()
    }
}

impl BitOr for PatternFlags {
    type Output = Self;

    fn bitor(
        self,
        rhs: Self,
    ) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PatternFlags {
    fn bitor_assign(
        &mut self,
        rhs: Self,
    ) {
        self.insert(rhs);
    }
}

impl Display for PatternFlags {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(&self.modifiers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_modifier() {
        assert_eq!(
            PatternFlags::from_modifier(b'i'),
            Some(PatternFlags::CASELESS)
        );
        assert_eq!(PatternFlags::from_modifier(b'u'), Some(PatternFlags::UTF8));
        assert_eq!(PatternFlags::from_modifier(b'S'), None);
        assert_eq!(PatternFlags::from_modifier(b'e'), None);
    }

    #[test]
    fn test_set_ops() {
        let mut flags = PatternFlags::EMPTY;
        assert!(flags.is_empty());

        flags |= PatternFlags::MULTILINE;
        flags.insert(PatternFlags::CASELESS);

        assert!(flags.contains(PatternFlags::CASELESS));
        assert!(flags.contains(PatternFlags::CASELESS | PatternFlags::MULTILINE));
        assert!(!flags.contains(PatternFlags::DOTALL));
        assert_eq!(flags.to_string(), "im");
    }
}
