//! # Error Types

use preg::PregError;

/// Errors which fail a function's per-query init.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InitError {
    /// Fewer arguments than the function requires.
    #[error("{function}: requires at least {min} arguments")]
    TooFewArguments {
        /// The host function name.
        function: &'static str,

        /// The minimum argument count.
        min: usize,
    },

    /// An argument count other than the one the function takes.
    #[error("{function}: needs exactly {expected}")]
    WrongArgumentCount {
        /// The host function name.
        function: &'static str,

        /// The expected count, in words.
        expected: &'static str,
    },

    /// The function takes no arguments.
    #[error("{function}: does not accept arguments")]
    NoArgumentsAccepted {
        /// The host function name.
        function: &'static str,
    },

    /// The replacement limit was not an integer.
    #[error("PREG_REPLACE: 4th argument (limit) must be a number")]
    LimitNotInteger,

    /// The occurrence argument was not an integer.
    #[error("{function}: optional occurence argument must be an integer")]
    OccurrenceNotInteger {
        /// The host function name.
        function: &'static str,
    },

    /// The pattern was the literal `NULL`, under legacy NULL handling.
    #[error("NULL pattern")]
    NullPattern,

    /// The constant pattern failed to compile, or the session could not be
    /// allocated.
    #[error(transparent)]
    Preg(#[from] PregError),
}

/// Errors reading a [`crate::UdfConfig`] from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An environment variable held a value which could not be parsed.
    #[error("invalid value {value:?} for {name}")]
    InvalidValue {
        /// The variable name.
        name: &'static str,

        /// The rejected value.
        value: String,
    },
}
