//! # `preg_position`

use preg::{search::position, session::PregSession};

use super::{check_occurrence_arg, group_query, init_session};
use crate::{InitError, NullHandling, UdfConfig, UdfOutput, args::UdfArgs};

const FUNCTION: &str = "PREG_POSITION";

/// `preg_position(pattern, subject [, group [, occurrence]])`.
///
/// Returns the 1-based byte position where a capture group of the
/// `occurrence`-th match starts. NULL when there is no such match or group.
#[derive(Debug)]
pub struct PregPosition {
    session: PregSession,
    null_handling: NullHandling,
}

impl PregPosition {
    /// Per-query init; see [`super::PregCapture::init`].
    pub fn init(
        args: &UdfArgs<'_>,
        config: &UdfConfig,
    ) -> Result<Self, InitError> {
        if args.len() < 2 {
            return Err(InitError::TooFewArguments {
                function: FUNCTION,
                min: 2,
            });
        }
        check_occurrence_arg(FUNCTION, args)?;

        Ok(Self {
            session: init_session(FUNCTION, args, config.null_handling, config.session)?,
            null_handling: config.null_handling,
        })
    }

    /// Evaluate one row.
    pub fn call(
        &mut self,
        args: &UdfArgs<'_>,
    ) -> UdfOutput<i64> {
        group_query(
            FUNCTION,
            &self.session,
            self.null_handling,
            args,
            |pattern, subject, group, occurrence| {
                Ok(position(pattern, subject, group, occurrence)?
                    .map(|pos| i64::try_from(pos).unwrap_or(i64::MAX)))
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{ArgKind, UdfArg};

    #[test]
    fn test_positions() {
        let args = |group: UdfArg<'static>, occurrence: i64| {
            UdfArgs::from(vec![
                UdfArg::bytes(br"/(\d)(\d)/"),
                UdfArg::bytes(b"ab12cd34"),
                group,
                UdfArg::int(occurrence),
            ])
        };
        let mut udf = PregPosition::init(&args(UdfArg::int(0), 1), &UdfConfig::default()).unwrap();

        assert_eq!(udf.call(&args(UdfArg::int(0), 1)), UdfOutput::Value(3));
        assert_eq!(udf.call(&args(UdfArg::int(2), 1)), UdfOutput::Value(4));
        assert_eq!(udf.call(&args(UdfArg::int(1), 2)), UdfOutput::Value(7));
        assert_eq!(udf.call(&args(UdfArg::int(1), 3)), UdfOutput::Null);
    }

    #[test]
    fn test_null_constants() {
        let args = UdfArgs::from(vec![
            UdfArg::bytes(b"/a/").constant(),
            UdfArg::null_literal(),
        ]);

        let mut modern = PregPosition::init(&args, &UdfConfig::default()).unwrap();
        assert_eq!(modern.call(&args), UdfOutput::Null);

        let legacy = UdfConfig::default().with_null_handling(NullHandling::Legacy);
        let mut legacy = PregPosition::init(&args, &legacy).unwrap();
        assert_eq!(legacy.call(&args), UdfOutput::Null);

        let bad = UdfArgs::from(vec![UdfArg::bytes(b"/a(/"), UdfArg::bytes(b"a")]);
        let mut udf = PregPosition::init(&bad, &UdfConfig::default()).unwrap();
        assert!(udf.call(&bad).is_error());

        let null_pattern = UdfArgs::from(vec![UdfArg::null(ArgKind::String), UdfArg::bytes(b"a")]);
        assert!(udf.call(&null_pattern).is_error());
    }
}
