//! # `preg-udf` Host Function Boundary
//!
//! Marshals positional host arguments into [`preg`], for the six functions
//! exposed to the database:
//!
//! * [`functions::PregReplace`] - `preg_replace(pattern, replacement, subject [, limit])`
//! * [`functions::PregCapture`] - `preg_capture(pattern, subject [, group [, occurrence]])`
//! * [`functions::PregPosition`] - `preg_position(pattern, subject [, group [, occurrence]])`
//! * [`functions::PregRlike`] - `preg_rlike(pattern, subject)`
//! * [`functions::PregCheck`] - `preg_check(pattern)`
//! * [`functions::PregInfo`] - `lib_mysqludf_preg_info()`
//!
//! Each function follows the host lifecycle: `init(args, config)` once per
//! query builds the function state, `call(&mut state, args)` runs once per
//! row, and dropping the state is the teardown.
//!
//! ```rust
//! use preg_udf::{
//!     UdfConfig,
//!     UdfOutput,
//!     args::{UdfArg, UdfArgs},
//!     functions::PregReplace,
//! };
//!
//! let init_args = UdfArgs::from(vec![
//!     UdfArg::bytes(b"/o/").constant(),
//!     UdfArg::bytes(b"0").constant(),
//!     UdfArg::null(Default::default()),
//! ]);
//! let mut replace = PregReplace::init(&init_args, &UdfConfig::default())?;
//!
//! let row = UdfArgs::from(vec![
//!     UdfArg::bytes(b"/o/").constant(),
//!     UdfArg::bytes(b"0").constant(),
//!     UdfArg::bytes(b"foo"),
//! ]);
//! match replace.call(&row) {
//!     UdfOutput::Value(out) => {
//!         assert_eq!(out.bytes, b"f00");
//!         assert_eq!(out.count, 2);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), preg_udf::InitError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod args;
pub mod functions;
pub mod logging;

mod config;
mod errors;
mod output;

#[doc(inline)]
pub use config::{MATCH_LIMIT_VAR, NULL_HANDLING_VAR, NullHandling, STACK_BUDGET_VAR, UdfConfig};
#[doc(inline)]
pub use errors::{ConfigError, InitError};
#[doc(inline)]
pub use output::UdfOutput;
