//! # Call Results

use core::fmt::Display;

/// The result of one host call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UdfOutput<T> {
    /// A value.
    Value(T),

    /// SQL NULL.
    Null,

    /// The call failed; the host raises an error for the row.
    Error(String),
}

impl<T> UdfOutput<T> {
    /// Log a call failure and build the error result.
    pub(crate) fn failed<E: Display>(
        function: &str,
        err: E,
    ) -> Self {
        let message = format!("{function}: {err}");
        log::error!("{message}");
        Self::Error(message)
    }

    /// Is this a value?
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Is this NULL?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Is this an error?
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Map the value.
    pub fn map<U, F: FnOnce(T) -> U>(
        self,
        f: F,
    ) -> UdfOutput<U> {
        match self {
            Self::Value(value) => UdfOutput::Value(f(value)),
            Self::Null => UdfOutput::Null,
            Self::Error(message) => UdfOutput::Error(message),
        }
    }
}

impl<T> From<Option<T>> for UdfOutput<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tri_state() {
        let value: UdfOutput<i64> = Some(3).into();
        assert!(value.is_value());
        assert_eq!(value.value(), Some(&3));
        assert_eq!(value.map(|v| v + 1), UdfOutput::Value(4));

        let null: UdfOutput<i64> = None.into();
        assert!(null.is_null());
        assert_eq!(null.value(), None);

        let err: UdfOutput<i64> = UdfOutput::failed("PREG_TEST", "boom");
        assert!(err.is_error());
        assert_eq!(err.map(|v| v + 1), UdfOutput::Error("PREG_TEST: boom".to_string()));
    }
}
