//! # `preg_check`

use preg::compile::CompiledPattern;

use crate::{InitError, UdfConfig, UdfOutput, args::UdfArgs};

const FUNCTION: &str = "preg_check";

/// `preg_check(pattern)`.
///
/// 1 if `pattern` is a valid delimited pattern, else 0. A NULL or empty
/// pattern is 0. An invalid constant pattern does not fail init.
#[derive(Debug)]
pub struct PregCheck {
    constant: Option<i64>,
}

fn check_arg(args: &UdfArgs<'_>) -> i64 {
    args.bytes(0)
        .filter(|raw| !raw.is_empty())
        .map_or(0, |raw| i64::from(CompiledPattern::check(&raw)))
}

impl PregCheck {
    /// Per-query init; takes exactly one argument.
    pub fn init(
        args: &UdfArgs<'_>,
        _config: &UdfConfig,
    ) -> Result<Self, InitError> {
        if args.len() != 1 {
            return Err(InitError::WrongArgumentCount {
                function: FUNCTION,
                expected: "one argument",
            });
        }

        let constant = args.is_constant(0).then(|| check_arg(args));
        Ok(Self { constant })
    }

    /// Evaluate one row.
    pub fn call(
        &mut self,
        args: &UdfArgs<'_>,
    ) -> UdfOutput<i64> {
        UdfOutput::Value(self.constant.unwrap_or_else(|| check_arg(args)))
    }
}
