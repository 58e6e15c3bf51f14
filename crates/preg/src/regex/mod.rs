//! # Regex Utilities
//!
//! Perl-style patterns may require extended regex machinery, such as
//! lookaround and backreferences, which is provided by the [`fancy_regex`]
//! crate; but naturally, this has costs. Backtracking runs on `&str` text
//! only, and must be bounded. We'd prefer to avoid the [`fancy_regex`] crate
//! when possible, falling back on the [`regex`] crate's byte-oriented
//! matcher when patterns permit this.
//!
//! This recurses into three problems:
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//! * Executing a match at an offset - [`PatternMatcher`]
//!
//! [`PatternMatcher::exec`] reports each match as flat [`MatchOffsets`]; and
//! reports failures as [`ExecError`] codes with fixed symbolic names.

mod exec;
mod match_offsets;
mod matcher;
mod regex_pattern;
mod regex_wrapper;
mod subject;

#[doc(inline)]
pub use exec::{ExecError, ExecErrorKind, ExecOptions, ExecOutcome};
#[doc(inline)]
pub use match_offsets::MatchOffsets;
#[doc(inline)]
pub use matcher::PatternMatcher;
#[doc(inline)]
pub use regex_pattern::RegexPattern;
#[doc(inline)]
pub use regex_wrapper::{ErrorWrapper, RegexWrapper};
#[doc(inline)]
pub use subject::Subject;
