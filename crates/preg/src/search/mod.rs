//! # Single-Match Searches
//!
//! Searches which stop at one match: [`capture`] extracts a group,
//! [`position`] locates it, and [`is_match`] tests for any match.
//! Each selects its match with [`find_occurrence`].

mod occurrence;
mod queries;

#[doc(inline)]
pub use occurrence::{Occurrence, find_occurrence};
#[doc(inline)]
pub use queries::{GroupRef, capture, is_match, position};
