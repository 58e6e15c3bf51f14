//! # `preg_rlike`

use preg::{search::is_match, session::PregSession};

use super::init_session;
use crate::{InitError, UdfConfig, UdfOutput, args::UdfArgs};

const FUNCTION: &str = "preg_rlike";

/// `preg_rlike(pattern, subject)`.
///
/// 1 if `pattern` matches anywhere in `subject`, else 0. A NULL or empty
/// subject never matches.
#[derive(Debug)]
pub struct PregRlike {
    session: PregSession,
}

impl PregRlike {
    /// Per-query init; takes exactly two arguments.
    pub fn init(
        args: &UdfArgs<'_>,
        config: &UdfConfig,
    ) -> Result<Self, InitError> {
        if args.len() != 2 {
            return Err(InitError::WrongArgumentCount {
                function: FUNCTION,
                expected: "two arguments",
            });
        }

        Ok(Self {
            session: init_session(FUNCTION, args, config.null_handling, config.session)?,
        })
    }

    /// Evaluate one row.
    pub fn call(
        &mut self,
        args: &UdfArgs<'_>,
    ) -> UdfOutput<i64> {
        let Some(subject) = args.bytes(1).filter(|s| !s.is_empty()) else {
            return UdfOutput::Value(0);
        };

        let pattern = match self.session.pattern_for(args.bytes(0).as_deref()) {
            Ok(pattern) => pattern,
            Err(err) => return UdfOutput::failed(FUNCTION, format_args!("compile failed: {err}")),
        };

        match is_match(&*pattern, &subject) {
            Ok(found) => UdfOutput::Value(i64::from(found)),
            Err(err) => UdfOutput::failed(FUNCTION, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{ArgKind, UdfArg};

    #[test]
    fn test_rlike() {
        let config = UdfConfig::default();
        assert_eq!(
            PregRlike::init(&UdfArgs::from(vec![UdfArg::bytes(b"/a/")]), &config)
                .unwrap_err()
                .to_string(),
            "preg_rlike: needs exactly two arguments"
        );

        let args = |subject: UdfArg<'static>| {
            UdfArgs::from(vec![UdfArg::bytes(b"/^\\d+$/").constant(), subject])
        };
        let mut udf = PregRlike::init(&args(UdfArg::null(ArgKind::String)), &config).unwrap();

        assert_eq!(udf.call(&args(UdfArg::bytes(b"123"))), UdfOutput::Value(1));
        assert_eq!(udf.call(&args(UdfArg::bytes(b"12a"))), UdfOutput::Value(0));
        assert_eq!(udf.call(&args(UdfArg::int(77))), UdfOutput::Value(1));
        assert_eq!(udf.call(&args(UdfArg::bytes(b""))), UdfOutput::Value(0));
        assert_eq!(udf.call(&args(UdfArg::null(ArgKind::String))), UdfOutput::Value(0));
    }

    #[test]
    fn test_constant_compile_failure_fails_init() {
        let args = UdfArgs::from(vec![UdfArg::bytes(b"/a(/").constant(), UdfArg::bytes(b"a")]);
        assert!(matches!(
            PregRlike::init(&args, &UdfConfig::default()),
            Err(InitError::Preg(preg::PregError::CompileFailed { .. }))
        ));
    }

    #[test]
    fn test_exec_error() {
        let args = UdfArgs::from(vec![
            UdfArg::bytes(br"/(a+)+\1b/"),
            UdfArg::bytes(b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
        ]);
        let config = UdfConfig::default().with_session(
            UdfConfig::default()
                .session
                .with_limits(preg::compile::MatchLimits::default().with_match_limit(1000)),
        );
        let mut udf = PregRlike::init(&args, &config).unwrap();
        assert!(udf.call(&args).is_error());
    }
}
