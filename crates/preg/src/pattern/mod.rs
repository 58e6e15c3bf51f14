//! # Delimited Pattern Parsing
//!
//! Patterns are written Perl-style, as a body wrapped in delimiters and
//! followed by modifier letters:
//!
//! * ``/([a-z0-9]*?)(.*)/i``
//! * ``{a{2}b}x`` - bracket delimiters nest.
//! * ``#path/to/\#file#`` - escaped delimiters do not terminate the body.
//!
//! [`parse_delimited`] splits such a pattern into a [`PatternSpec`]; the body
//! is kept verbatim, and the modifiers become [`PatternFlags`].

mod pattern_flags;
mod pattern_spec;

#[doc(inline)]
pub use pattern_flags::PatternFlags;
#[doc(inline)]
pub use pattern_spec::{PatternSpec, parse_delimited};
