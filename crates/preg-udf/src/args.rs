//! # Host Arguments
//!
//! The host passes each function a positional argument list. Every
//! argument carries its value, its declared type, and whether it is a
//! constant of the query. A NULL value is distinct from an empty string,
//! and a literal `NULL` constant is distinct from a column which happens
//! to be NULL on some row.

use std::borrow::Cow;

/// The declared type of a host argument.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ArgKind {
    /// A string, or anything the host converts to one.
    #[default]
    String,

    /// An integer.
    Int,

    /// A floating point or decimal number.
    Real,
}

/// The value of a host argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UdfValue<'a> {
    /// SQL NULL.
    Null,

    /// String bytes.
    Bytes(&'a [u8]),

    /// An integer.
    Int(i64),

    /// A floating point number.
    Real(f64),
}

/// One host argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UdfArg<'a> {
    value: UdfValue<'a>,
    kind: ArgKind,
    is_constant: bool,
    declared_null: bool,
    length: usize,
}

impl<'a> UdfArg<'a> {
    fn new(
        value: UdfValue<'a>,
        kind: ArgKind,
        length: usize,
    ) -> Self {
        Self {
            value,
            kind,
            is_constant: false,
            declared_null: false,
            length,
        }
    }

    /// A string argument.
    pub fn bytes(value: &'a [u8]) -> Self {
        Self::new(UdfValue::Bytes(value), ArgKind::String, value.len())
    }

    /// An integer argument.
    pub fn int(value: i64) -> Self {
        Self::new(UdfValue::Int(value), ArgKind::Int, 21)
    }

    /// A floating point argument.
    pub fn real(value: f64) -> Self {
        Self::new(UdfValue::Real(value), ArgKind::Real, 24)
    }

    /// A NULL value of the given type; a column with no value on this row,
    /// or a non-constant argument at init.
    pub fn null(kind: ArgKind) -> Self {
        Self::new(UdfValue::Null, kind, 0)
    }

    /// The literal `NULL` written in the query.
    pub fn null_literal() -> Self {
        Self {
            is_constant: true,
            declared_null: true,
            ..Self::null(ArgKind::String)
        }
    }

    /// Mark this argument as a constant of the query.
    pub fn constant(self) -> Self {
        Self {
            is_constant: true,
            ..self
        }
    }

    /// Set the maximum length the host reports for this argument.
    pub fn with_length(
        self,
        length: usize,
    ) -> Self {
        Self { length, ..self }
    }

    /// The argument value.
    pub fn value(&self) -> UdfValue<'a> {
        self.value
    }

    /// The declared type.
    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    /// Is this argument a constant of the query?
    pub fn is_constant(&self) -> bool {
        self.is_constant
    }

    /// Is the value NULL?
    pub fn is_null(&self) -> bool {
        matches!(self.value, UdfValue::Null)
    }

    /// Is this the literal `NULL`, as opposed to a NULL column?
    pub fn is_null_constant(&self) -> bool {
        self.declared_null && self.is_null()
    }

    /// The (maximum) length the host reports for this argument.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The value as string bytes, converting numbers to their decimal text.
    ///
    /// ## Returns
    /// `None` for NULL.
    pub fn to_bytes(&self) -> Option<Cow<'a, [u8]>> {
        match self.value {
            UdfValue::Null => None,
            UdfValue::Bytes(bytes) => Some(Cow::Borrowed(bytes)),
            UdfValue::Int(value) => Some(Cow::Owned(value.to_string().into_bytes())),
            UdfValue::Real(value) => Some(Cow::Owned(value.to_string().into_bytes())),
        }
    }

    /// The value as an integer.
    ///
    /// ## Returns
    /// `None` unless the value is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self.value {
            UdfValue::Int(value) => Some(value),
            _ => None,
        }
    }
}

/// The positional argument list of one host call.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UdfArgs<'a> {
    args: Vec<UdfArg<'a>>,
}

impl<'a> From<Vec<UdfArg<'a>>> for UdfArgs<'a> {
    fn from(args: Vec<UdfArg<'a>>) -> Self {
        Self { args }
    }
}

impl<'a> FromIterator<UdfArg<'a>> for UdfArgs<'a> {
    fn from_iter<I: IntoIterator<Item = UdfArg<'a>>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().collect(),
        }
    }
}

impl<'a> UdfArgs<'a> {
    /// The number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Are there no arguments?
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The argument at `index`.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&UdfArg<'a>> {
        self.args.get(index)
    }

    /// Iterate over the arguments.
    pub fn iter(&self) -> impl Iterator<Item = &UdfArg<'a>> {
        self.args.iter()
    }

    /// The declared type of the argument at `index`.
    pub fn kind(
        &self,
        index: usize,
    ) -> Option<ArgKind> {
        self.get(index).map(UdfArg::kind)
    }

    /// Is the argument at `index` present and the literal `NULL`?
    pub fn is_null_constant(
        &self,
        index: usize,
    ) -> bool {
        self.get(index).is_some_and(UdfArg::is_null_constant)
    }

    /// Is the argument at `index` present and a constant?
    pub fn is_constant(
        &self,
        index: usize,
    ) -> bool {
        self.get(index).is_some_and(UdfArg::is_constant)
    }

    /// The argument at `index` as string bytes; `None` if absent or NULL.
    pub fn bytes(
        &self,
        index: usize,
    ) -> Option<Cow<'a, [u8]>> {
        self.get(index).and_then(UdfArg::to_bytes)
    }

    /// The argument at `index` as an integer; `None` if absent, NULL, or
    /// not an integer.
    pub fn int(
        &self,
        index: usize,
    ) -> Option<i64> {
        self.get(index).and_then(UdfArg::as_int)
    }

    /// The reported length of the argument at `index`; `0` if absent.
    pub fn length(
        &self,
        index: usize,
    ) -> usize {
        self.get(index).map_or(0, UdfArg::length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_not_empty() {
        let empty = UdfArg::bytes(b"");
        assert!(!empty.is_null());
        assert_eq!(empty.to_bytes().as_deref(), Some(&b""[..]));

        let column = UdfArg::null(ArgKind::String);
        assert!(column.is_null());
        assert!(!column.is_null_constant());
        assert_eq!(column.to_bytes(), None);

        let literal = UdfArg::null_literal();
        assert!(literal.is_null());
        assert!(literal.is_constant());
        assert!(literal.is_null_constant());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(UdfArg::int(-7).to_bytes().as_deref(), Some(&b"-7"[..]));
        assert_eq!(UdfArg::int(-7).as_int(), Some(-7));
        assert_eq!(UdfArg::bytes(b"7").as_int(), None);
        assert_eq!(UdfArg::real(1.5).to_bytes().as_deref(), Some(&b"1.5"[..]));
        assert_eq!(UdfArg::real(1.5).kind(), ArgKind::Real);
    }

    #[test]
    fn test_args_accessors() {
        let args: UdfArgs = [
            UdfArg::bytes(b"/a/").constant(),
            UdfArg::null_literal(),
            UdfArg::int(3).with_length(1),
        ]
        .into_iter()
        .collect();

        assert_eq!(args.len(), 3);
        assert!(args.is_constant(0));
        assert!(!args.is_null_constant(0));
        assert!(args.is_null_constant(1));
        assert!(!args.is_null_constant(5));
        assert_eq!(args.bytes(0).as_deref(), Some(&b"/a/"[..]));
        assert_eq!(args.bytes(1), None);
        assert_eq!(args.int(2), Some(3));
        assert_eq!(args.kind(2), Some(ArgKind::Int));
        assert_eq!(args.kind(3), None);
        assert_eq!(args.length(0), 3);
        assert_eq!(args.length(2), 1);
        assert_eq!(args.length(9), 0);
    }
}
