//! # Host Functions
//!
//! One type per host function. `init` validates the argument list and
//! builds the per-query state; `call` evaluates one row.

mod capture;
mod check;
mod info;
mod position;
mod replace;
mod rlike;

use std::borrow::Cow;

use preg::{
    PregResult,
    compile::CompiledPattern,
    search::GroupRef,
    session::{PregSession, SessionOptions},
};

use crate::{
    InitError,
    NullHandling,
    UdfOutput,
    args::{ArgKind, UdfArg, UdfArgs, UdfValue},
};

#[doc(inline)]
pub use capture::PregCapture;
#[doc(inline)]
pub use check::PregCheck;
#[doc(inline)]
pub use info::{PACKAGE_STRING, PregInfo};
#[doc(inline)]
pub use position::PregPosition;
#[doc(inline)]
pub use replace::{PregReplace, ReplaceOutput};
#[doc(inline)]
pub use rlike::PregRlike;

/// The shared init of every pattern function.
///
/// A constant pattern in argument 0 is compiled now; init fails if it
/// does not compile.
fn init_session(
    function: &'static str,
    args: &UdfArgs<'_>,
    null_handling: NullHandling,
    options: SessionOptions,
) -> Result<PregSession, InitError> {
    if args.is_null_constant(0) && null_handling == NullHandling::Legacy {
        return Err(InitError::NullPattern);
    }

    let constant = args
        .get(0)
        .filter(|arg| arg.is_constant())
        .and_then(UdfArg::to_bytes);

    PregSession::init(constant.as_deref(), options).map_err(|err| {
        log::error!("{function}: {err}");
        err.into()
    })
}

/// Check the optional integer occurrence argument at index 3.
fn check_occurrence_arg(
    function: &'static str,
    args: &UdfArgs<'_>,
) -> Result<(), InitError> {
    match args.kind(3) {
        Some(kind) if kind != ArgKind::Int => Err(InitError::OccurrenceNotInteger { function }),
        _ => Ok(()),
    }
}

/// Evaluate a group query for `(pattern, subject [, group [, occurrence]])`.
///
/// The group is an integer index, or a name given as a string; the
/// occurrence counts from 1. A NULL subject or group, and a group which
/// can't name a capture group, yield NULL.
fn group_query<T, Q>(
    function: &'static str,
    session: &PregSession,
    null_handling: NullHandling,
    args: &UdfArgs<'_>,
    query: Q,
) -> UdfOutput<T>
where
    Q: FnOnce(&CompiledPattern, &[u8], GroupRef<'_>, usize) -> PregResult<Option<T>>,
{
    if null_handling == NullHandling::Modern && (0..3).any(|i| args.is_null_constant(i)) {
        return UdfOutput::Null;
    }

    let pattern = match session.pattern_for(args.bytes(0).as_deref()) {
        Ok(pattern) => pattern,
        Err(err) => return UdfOutput::failed(function, format_args!("compile failed: {err}")),
    };

    let Some(subject) = args.bytes(1) else {
        return UdfOutput::Null;
    };

    let group_arg = args.get(2);
    let group_name: Option<Cow<'_, [u8]>> = group_arg
        .filter(|arg| arg.kind() != ArgKind::Int)
        .and_then(UdfArg::to_bytes);
    let group = match group_arg.map(UdfArg::value) {
        None => Some(GroupRef::Index(0)),
        Some(UdfValue::Null) => None,
        Some(UdfValue::Int(index)) if group_arg.map(UdfArg::kind) == Some(ArgKind::Int) => {
            usize::try_from(index).ok().map(GroupRef::Index)
        }
        Some(_) => group_name
            .as_deref()
            .and_then(|name| core::str::from_utf8(name).ok())
            .map(GroupRef::Name),
    };
    let Some(group) = group else {
        return UdfOutput::Null;
    };

    let occurrence = args
        .int(3)
        .map_or(1, |n| usize::try_from(n).unwrap_or_default());

    match query(&*pattern, &*subject, group, occurrence) {
        Ok(found) => found.into(),
        Err(err) => UdfOutput::failed(function, err),
    }
}
