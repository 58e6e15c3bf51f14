//! # `preg_capture`

use preg::{search::capture, session::PregSession};

use super::{check_occurrence_arg, group_query, init_session};
use crate::{InitError, NullHandling, UdfConfig, UdfOutput, args::UdfArgs};

const FUNCTION: &str = "PREG_CAPTURE";

/// `preg_capture(pattern, subject [, group [, occurrence]])`.
///
/// Returns a capture group of the `occurrence`-th match; the whole match
/// of the first by default. NULL when there is no such match or group.
#[derive(Debug)]
pub struct PregCapture {
    session: PregSession,
    null_handling: NullHandling,
}

impl PregCapture {
    /// Per-query init.
    ///
    /// ## Arguments
    /// * `args` - the argument list; at least 2, and an integer occurrence
    ///   if 4.
    /// * `config` - the function configuration.
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
    ) -> UdfOutput<Vec<u8>> {
        group_query(
            FUNCTION,
            &self.session,
            self.null_handling,
            args,
            |pattern, subject, group, occurrence| {
                Ok(capture(pattern, subject, group, occurrence)?.map(<[u8]>::to_vec))
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{ArgKind, UdfArg};

    #[test]
    fn test_init_validation() {
        let config = UdfConfig::default();
        assert_eq!(
            PregCapture::init(&UdfArgs::from(vec![UdfArg::bytes(b"/a/")]), &config)
                .unwrap_err()
                .to_string(),
            "PREG_CAPTURE: requires at least 2 arguments"
        );
        assert_eq!(
            PregCapture::init(
                &UdfArgs::from(vec![
                    UdfArg::bytes(b"/a/"),
                    UdfArg::bytes(b"a"),
                    UdfArg::int(0),
                    UdfArg::real(1.0),
                ]),
                &config
            )
            .unwrap_err()
            .to_string(),
            "PREG_CAPTURE: optional occurence argument must be an integer"
        );
    }

    #[test]
    fn test_groups() {
        let init = UdfArgs::from(vec![
            UdfArg::bytes(br"/(?<word>[a-z]+)-(\d+)/").constant(),
            UdfArg::null(ArgKind::String),
            UdfArg::null(ArgKind::String),
        ]);
        let mut udf = PregCapture::init(&init, &UdfConfig::default()).unwrap();

        let mut row = |group: UdfArg<'static>, occurrence: i64| {
            udf.call(&UdfArgs::from(vec![
                UdfArg::bytes(br"/(?<word>[a-z]+)-(\d+)/").constant(),
                UdfArg::bytes(b"ab-1 cd-22"),
                group,
                UdfArg::int(occurrence),
            ]))
        };

        assert_eq!(row(UdfArg::int(0), 1), UdfOutput::Value(b"ab-1".to_vec()));
        assert_eq!(row(UdfArg::int(2), 2), UdfOutput::Value(b"22".to_vec()));
        assert_eq!(row(UdfArg::bytes(b"word"), 2), UdfOutput::Value(b"cd".to_vec()));
        assert_eq!(row(UdfArg::int(1), 0), UdfOutput::Value(b"ab".to_vec()));
        assert_eq!(row(UdfArg::int(1), 3), UdfOutput::Null);
        assert_eq!(row(UdfArg::int(3), 1), UdfOutput::Null);
        assert_eq!(row(UdfArg::int(-1), 1), UdfOutput::Null);
        assert_eq!(row(UdfArg::bytes(b"nope"), 1), UdfOutput::Null);
        assert_eq!(row(UdfArg::null(ArgKind::Int), 1), UdfOutput::Null);
    }

    #[test]
    fn test_default_group() {
        let args = UdfArgs::from(vec![UdfArg::bytes(br"/\d+/"), UdfArg::bytes(b"a12b")]);
        let mut udf = PregCapture::init(&args, &UdfConfig::default()).unwrap();
        assert_eq!(udf.call(&args), UdfOutput::Value(b"12".to_vec()));

        let no_subject =
            UdfArgs::from(vec![UdfArg::bytes(br"/\d+/"), UdfArg::null(ArgKind::String)]);
        assert_eq!(udf.call(&no_subject), UdfOutput::Null);
    }
}
