//! # Substitution
//!
//! Global match-and-replace over a subject, with positional backreferences.
//!
//! A [`ReplacementTemplate`] is tokenized once; each match then expands it
//! twice, once to size the [`OutputBuffer`] and once to write into it.
//!
//! ## Example
//!
//! ```rust
//! use preg::compile::{CompiledPattern, MatchLimits};
//! use preg::substitute::{OutputBuffer, ReplacementTemplate, substitute_into};
//!
//! let pattern = CompiledPattern::from_delimited(b"/a/", &MatchLimits::default())?;
//! let template = ReplacementTemplate::parse(b"b");
//! let mut out = OutputBuffer::new();
//!
//! let report = substitute_into(&pattern, b"aaaa", &template, Some(2), &mut out)?;
//! assert_eq!(out.as_bytes(), b"bbaa");
//! assert_eq!(report.replacements, 2);
//! # Ok::<(), preg::PregError>(())
//! ```

mod output_buffer;
mod replacement_template;
mod substitutor;

#[doc(inline)]
pub use output_buffer::OutputBuffer;
#[doc(inline)]
pub use replacement_template::{ReplacementTemplate, TemplateToken};
#[doc(inline)]
pub use substitutor::{Substitution, SubstitutionReport, Warning, substitute, substitute_into};
