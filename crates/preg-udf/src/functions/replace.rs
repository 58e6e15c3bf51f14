//! # `preg_replace`

use preg::{
    session::{MAX_RESULT_LENGTH, PregSession},
    substitute::ReplacementTemplate,
};

use super::init_session;
use crate::{
    InitError,
    NullHandling,
    UdfConfig,
    UdfOutput,
    args::{ArgKind, UdfArgs},
};

const FUNCTION: &str = "PREG_REPLACE";

/// The result of one `preg_replace` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOutput<'a> {
    /// The subject with replacements applied.
    pub bytes: &'a [u8],

    /// The number of replacements made.
    pub count: u32,
}

/// `preg_replace(pattern, replacement, subject [, limit])`.
///
/// Replaces up to `limit` matches of `pattern` in `subject`; a negative or
/// missing limit replaces every match.
#[derive(Debug)]
pub struct PregReplace {
    session: PregSession,
    null_handling: NullHandling,
}

impl PregReplace {
    /// Per-query init.
    ///
    /// ## Arguments
    /// * `args` - the argument list; at least 3, and an integer limit if 4.
    /// * `config` - the function configuration.
    pub fn init(
        args: &UdfArgs<'_>,
        config: &UdfConfig,
    ) -> Result<Self, InitError> {
        if args.len() < 3 {
            return Err(InitError::TooFewArguments {
                function: FUNCTION,
                min: 3,
            });
        }
        if args.len() > 3 && args.kind(3) != Some(ArgKind::Int) {
            return Err(InitError::LimitNotInteger);
        }

        let mut options = config.session;
        let replacement_len = args.length(1);
        let subject_len = args.length(2);
        let has_max = options.max_length.is_some_and(|max| max > 0);
        if has_max && replacement_len > 0 && subject_len > 0 {
            // Backreferences make the result length unknowable; assume the worst.
            // An estimate past what the host can return is no estimate at all.
            let estimate = replacement_len
                .saturating_mul(subject_len)
                .saturating_mul(replacement_len);
            options = options.with_max_length(Some(estimate).filter(|&n| n <= MAX_RESULT_LENGTH));
        }

        Ok(Self {
            session: init_session(FUNCTION, args, config.null_handling, options)?,
            null_handling: config.null_handling,
        })
    }

    /// The session; exposes the constant pattern and buffer.
    pub fn session(&self) -> &PregSession {
        &self.session
    }

    /// Evaluate one row.
    ///
    /// The returned bytes live in the session buffer until the next call.
    pub fn call(
        &mut self,
        args: &UdfArgs<'_>,
    ) -> UdfOutput<ReplaceOutput<'_>> {
        let modern = self.null_handling == NullHandling::Modern;
        if modern && (args.is_null_constant(2) || args.is_null_constant(0)) {
            return UdfOutput::Null;
        }
        let null_replacement = modern && args.is_null_constant(1);

        let pattern = args.bytes(0);
        let replacement = args.bytes(1).unwrap_or_default();
        let subject = args.bytes(2).unwrap_or_default();
        let limit = args.int(3).and_then(|n| u32::try_from(n).ok());

        let template = ReplacementTemplate::parse(&replacement);
        match self
            .session
            .replace(pattern.as_deref(), &subject, &template, limit)
        {
            Ok(report) => {
                let bytes = self.session.output();
                if null_replacement && bytes != &*subject {
                    return UdfOutput::Null;
                }
                UdfOutput::Value(ReplaceOutput {
                    bytes,
                    count: report.replacements,
                })
            }
            Err(err) => UdfOutput::failed(FUNCTION, err),
        }
    }
}
