//! # Error Types

use std::collections::TryReserveError;

use crate::regex::ExecError;

/// Errors from preg operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PregError {
    /// The pattern was empty, or only whitespace.
    #[error("Empty regular expression")]
    EmptyPattern,

    /// The pattern delimiter was alphanumeric or a backslash.
    #[error("Delimiter must not be alphanumeric or backslash")]
    BadDelimiter,

    /// The closing delimiter was never found.
    #[error("No ending delimiter '{delimiter}' found")]
    UnterminatedPattern {
        /// The end delimiter that was searched for.
        delimiter: char,
    },

    /// A trailing modifier letter was not recognized.
    #[error("Unknown modifier '{0}'")]
    UnknownModifier(char),

    /// The regex engine rejected the pattern body.
    #[error("Compilation of /{pattern}/ failed: {message} at offset {offset}")]
    CompileFailed {
        /// The pattern body that was compiled.
        pattern: String,

        /// The engine diagnostic.
        message: String,

        /// The byte offset within the body where compilation failed.
        offset: usize,
    },

    /// The capture count of a compiled pattern could not be retrieved.
    #[error("error retrieving information about pattern")]
    IntrospectionFailed,

    /// An allocation failed; partial results were released.
    #[error("out of memory")]
    OutOfMemory,

    /// The regex engine failed while executing.
    #[error(transparent)]
    EngineExec(#[from] ExecError),
}

impl From<TryReserveError> for PregError {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

/// Result type for preg operations.
pub type PregResult<T> = core::result::Result<T, PregError>;
