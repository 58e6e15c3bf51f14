//! # Match Limits

/// The default backtracking budget per match attempt.
pub const DEFAULT_MATCH_LIMIT: usize = 100_000;

/// Stack bytes held back from the recursion budget.
pub const STACK_RESERVE: usize = 4096;

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        /// Estimated stack bytes per engine recursion frame.
        pub const FRAME_SIZE: usize = 1000;

        /// The assumed thread stack size, when none is supplied.
        pub const DEFAULT_THREAD_STACK: usize = 256 * 1024;
    } else {
        /// Estimated stack bytes per engine recursion frame.
        pub const FRAME_SIZE: usize = 500;

        /// The assumed thread stack size, when none is supplied.
        pub const DEFAULT_THREAD_STACK: usize = 192 * 1024;
    }
}

/// Resource limits forced onto every compiled pattern.
///
/// `match_limit` bounds backtracking; `recursion_limit` bounds nesting
/// depth, and is derived from the stack available to the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchLimits {
    match_limit: usize,
    recursion_limit: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self::from_stack_budget(None)
    }
}

impl MatchLimits {
    /// Derive limits from a stack budget.
    ///
    /// ## Arguments
    /// * `available_stack_bytes` - stack available to matching; when `None`,
    ///   75% of [`DEFAULT_THREAD_STACK`].
    ///
    /// ## Returns
    /// Limits with the default match limit, and a recursion limit of
    /// ``(available - 4096) / frame_size``; never less than 1.
    pub fn from_stack_budget(available_stack_bytes: Option<usize>) -> Self {
        let available = available_stack_bytes.unwrap_or(DEFAULT_THREAD_STACK / 4 * 3);
        Self {
            match_limit: DEFAULT_MATCH_LIMIT,
            recursion_limit: (available.saturating_sub(STACK_RESERVE) / FRAME_SIZE).max(1),
        }
    }

    /// The backtracking limit.
    pub fn match_limit(&self) -> usize {
        self.match_limit
    }

    /// The nesting limit.
    pub fn recursion_limit(&self) -> usize {
        self.recursion_limit
    }

    /// Set the backtracking limit.
    pub fn with_match_limit(
        self,
        match_limit: usize,
    ) -> Self {
        Self {
            match_limit,
            ..self
        }
    }

    /// Set the nesting limit.
    pub fn with_recursion_limit(
        self,
        recursion_limit: usize,
    ) -> Self {
        Self {
            recursion_limit,
            ..self
        }
    }
}
