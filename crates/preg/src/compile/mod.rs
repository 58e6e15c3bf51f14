//! # Pattern Compilation
//!
//! Turns a [`crate::pattern::PatternSpec`] into a [`CompiledPattern`],
//! with [`MatchLimits`] forced onto the engine.
//!
//! ## Example
//!
//! ```rust
//! use preg::compile::{CompiledPattern, MatchLimits};
//! use preg::regex::PatternMatcher;
//!
//! let limits = MatchLimits::from_stack_budget(Some(64 * 1024));
//! let pattern = CompiledPattern::from_delimited(b"{(\\d+)-(\\d+)}", &limits)?;
//! assert_eq!(pattern.capture_count()?, 2);
//!
//! assert!(CompiledPattern::check(b"/ok/i"));
//! assert!(!CompiledPattern::check(b"/(/"));
//! # Ok::<(), preg::PregError>(())
//! ```

mod compiled_pattern;
mod match_limits;

#[doc(inline)]
pub use compiled_pattern::{CompiledPattern, compile};
#[doc(inline)]
pub use match_limits::{
    DEFAULT_MATCH_LIMIT,
    DEFAULT_THREAD_STACK,
    FRAME_SIZE,
    MatchLimits,
    STACK_RESERVE,
};
