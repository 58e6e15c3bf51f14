//! # `lib_mysqludf_preg_info`

use crate::{InitError, UdfConfig, UdfOutput, args::UdfArgs};

const FUNCTION: &str = "lib_mysqludf_preg_info";

/// The package name and version reported by [`PregInfo`].
pub const PACKAGE_STRING: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// `lib_mysqludf_preg_info()`; the package name and version.
#[derive(Debug, Default)]
pub struct PregInfo;

impl PregInfo {
    /// Per-query init; takes no arguments.
    pub fn init(
        args: &UdfArgs<'_>,
        _config: &UdfConfig,
    ) -> Result<Self, InitError> {
        if !args.is_empty() {
            return Err(InitError::NoArgumentsAccepted { function: FUNCTION });
        }
        Ok(Self)
    }

    /// Evaluate one row.
    pub fn call(
        &mut self,
        _args: &UdfArgs<'_>,
    ) -> UdfOutput<&'static str> {
        UdfOutput::Value(PACKAGE_STRING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::UdfArg;

    #[test]
    fn test_info() {
        let config = UdfConfig::default();
        assert_eq!(
            PregInfo::init(&UdfArgs::from(vec![UdfArg::int(1)]), &config)
                .unwrap_err()
                .to_string(),
            "lib_mysqludf_preg_info: does not accept arguments"
        );

        let mut udf = PregInfo::init(&UdfArgs::default(), &config).unwrap();
        let UdfOutput::Value(info) = udf.call(&UdfArgs::default()) else {
            panic!("expected a value");
        };
        assert!(info.starts_with("preg-udf "));
        assert!(info.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
