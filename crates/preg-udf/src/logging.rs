//! # Logging Setup
//!
//! The library logs through the [`log`] facade; a host which loads these
//! functions can route that to stderr, where the database keeps its error
//! log.

use stderrlog::{LogLevelNum, Timestamp};

/// Stderr logging options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Silence log messages.
    pub quiet: bool,

    /// The verbosity; 0 is off, 1 errors only, up to 5 for trace.
    pub verbosity: u8,

    /// Prefix messages with a timestamp.
    pub timestamps: bool,
}

impl LogConfig {
    /// Set [`LogConfig::quiet`].
    pub fn with_quiet(
        self,
        quiet: bool,
    ) -> Self {
        Self { quiet, ..self }
    }

    /// Set [`LogConfig::verbosity`].
    pub fn with_verbosity(
        self,
        verbosity: u8,
    ) -> Self {
        Self { verbosity, ..self }
    }

    /// Set [`LogConfig::timestamps`].
    pub fn with_timestamps(
        self,
        timestamps: bool,
    ) -> Self {
        Self { timestamps, ..self }
    }

    /// The stderr log level for [`LogConfig::verbosity`].
    pub fn level(&self) -> LogLevelNum {
        match self.verbosity {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger.
    ///
    /// Fails if a logger is already installed.
    pub fn setup_logging(&self) -> Result<(), log::SetLoggerError> {
        stderrlog::new()
            .module("preg")
            .module(env!("CARGO_CRATE_NAME"))
            .quiet(self.quiet)
            .verbosity(self.level())
            .timestamp(if self.timestamps {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()
    }
}
