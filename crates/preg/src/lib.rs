//! # `preg` Perl-Style Pattern Substitution
//!
//! This crate compiles Perl-style delimited patterns (``/body/flags``) and runs
//! the matching operations built on top of them; chiefly global substitution
//! with positional backreferences.
//!
//! See:
//! * [`pattern`] to parse a delimited pattern into a [`pattern::PatternSpec`].
//! * [`compile`] to compile a parsed pattern into a [`compile::CompiledPattern`].
//! * [`substitute`] to replace matches using a [`substitute::ReplacementTemplate`].
//! * [`search`] to capture, locate, or test single matches.
//! * [`session`] to cache a constant pattern and the output buffer across calls.
//!
//! The underlying regex machinery is wrapped by [`regex`]; basic patterns
//! run on the [`::regex`] crate, and patterns which need lookaround or
//! backreferences fall up to [`fancy_regex`].
//!
//! ## Substitution
//!
//! ```rust
//! use preg::compile::CompiledPattern;
//! use preg::compile::MatchLimits;
//! use preg::substitute::{ReplacementTemplate, substitute};
//!
//! let pattern = CompiledPattern::from_delimited(b"/(.*?)(fox)/", &MatchLimits::default())?;
//! let template = ReplacementTemplate::parse(b"$1dog");
//!
//! let result = substitute(&pattern, b"the quick brown fox", &template, None)?;
//! assert_eq!(result.bytes(), b"the quick brown dog");
//! assert_eq!(result.replacements(), 1);
//! # Ok::<(), preg::PregError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod compile;
pub mod pattern;
pub mod regex;
pub mod search;
pub mod session;
pub mod substitute;

mod errors;

#[doc(inline)]
pub use errors::{PregError, PregResult};
