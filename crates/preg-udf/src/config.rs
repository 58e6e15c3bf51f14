//! # Configuration

use core::str::FromStr;
use std::env;

use preg::{compile::MatchLimits, session::SessionOptions};

use crate::ConfigError;

/// Selects [`NullHandling`].
pub const NULL_HANDLING_VAR: &str = "PREG_NULL_HANDLING";

/// Stack bytes available to matching; see [`MatchLimits::from_stack_budget`].
pub const STACK_BUDGET_VAR: &str = "PREG_STACK_BUDGET";

/// Overrides [`MatchLimits::match_limit`].
pub const MATCH_LIMIT_VAR: &str = "PREG_MATCH_LIMIT";

/// How literal `NULL` arguments are treated.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NullHandling {
    /// A literal `NULL` pattern, replacement, or subject yields NULL.
    #[default]
    Modern,

    /// A literal `NULL` pattern fails init; a `NULL` replacement is empty.
    Legacy,
}

/// Configuration shared by every host function.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UdfConfig {
    /// Options for the per-query session.
    pub session: SessionOptions,

    /// How literal `NULL` arguments are treated.
    pub null_handling: NullHandling,
}

impl UdfConfig {
    /// Set [`UdfConfig::session`].
    pub fn with_session(
        self,
        session: SessionOptions,
    ) -> Self {
        Self { session, ..self }
    }

    /// Set [`UdfConfig::null_handling`].
    pub fn with_null_handling(
        self,
        null_handling: NullHandling,
    ) -> Self {
        Self {
            null_handling,
            ..self
        }
    }

    /// Derive the session limits from a stack budget.
    pub fn with_stack_budget(
        self,
        available_stack_bytes: Option<usize>,
    ) -> Self {
        let limits = MatchLimits::from_stack_budget(available_stack_bytes)
            .with_match_limit(self.session.limits.match_limit());
        self.with_session(self.session.with_limits(limits))
    }

    /// Set the host's maximum result length.
    pub fn with_max_length(
        self,
        max_length: Option<usize>,
    ) -> Self {
        self.with_session(self.session.with_max_length(max_length))
    }

    /// Read the configuration from the process environment.
    ///
    /// See [`UdfConfig::from_vars`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Read the configuration through `lookup`.
    ///
    /// Unset variables keep their defaults:
    /// * [`NULL_HANDLING_VAR`] - `modern` or `legacy`.
    /// * [`STACK_BUDGET_VAR`] - bytes of stack available to matching.
    /// * [`MATCH_LIMIT_VAR`] - the backtracking limit; at least 1.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(NULL_HANDLING_VAR) {
            config.null_handling = parse_var(NULL_HANDLING_VAR, value)?;
        }

        if let Some(value) = lookup(STACK_BUDGET_VAR) {
            config = config.with_stack_budget(Some(parse_var(STACK_BUDGET_VAR, value)?));
        }

        if let Some(value) = lookup(MATCH_LIMIT_VAR) {
            let limit: usize = parse_var(MATCH_LIMIT_VAR, value.clone())?;
            if limit == 0 {
                return Err(ConfigError::InvalidValue {
                    name: MATCH_LIMIT_VAR,
                    value,
                });
            }
            let limits = config.session.limits.with_match_limit(limit);
            config = config.with_session(config.session.with_limits(limits));
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(
    name: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}
