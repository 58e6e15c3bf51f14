#![allow(missing_docs)]

use preg_udf::{
    InitError,
    NullHandling,
    UdfConfig,
    UdfOutput,
    args::{ArgKind, UdfArg, UdfArgs},
    functions::{PregCapture, PregPosition, PregReplace, PregRlike},
};

fn modern() -> UdfConfig {
    UdfConfig::default()
}

fn legacy() -> UdfConfig {
    UdfConfig::default().with_null_handling(NullHandling::Legacy)
}

fn replace(
    config: &UdfConfig,
    args: Vec<UdfArg<'_>>,
) -> UdfOutput<Vec<u8>> {
    let args = UdfArgs::from(args);
    let mut udf = PregReplace::init(&args, config).unwrap();
    udf.call(&args).map(|out| out.bytes.to_vec())
}

#[test]
fn test_null_pattern_literal() {
    let args = UdfArgs::from(vec![
        UdfArg::null_literal(),
        UdfArg::bytes(b"x"),
        UdfArg::bytes(b"abc"),
    ]);

    let mut udf = PregReplace::init(&args, &modern()).unwrap();
    assert_eq!(udf.call(&args).map(|o| o.bytes.to_vec()), UdfOutput::Null);

    assert_eq!(
        PregReplace::init(&args, &legacy()).unwrap_err(),
        InitError::NullPattern
    );
    assert_eq!(
        PregCapture::init(&args, &legacy()).unwrap_err().to_string(),
        "NULL pattern"
    );
}

#[test]
fn test_null_subject_literal() {
    let args = vec![
        UdfArg::bytes(b"/a/").constant(),
        UdfArg::bytes(b"b").constant(),
        UdfArg::null_literal(),
    ];
    assert_eq!(replace(&modern(), args.clone()), UdfOutput::Null);
    assert_eq!(replace(&legacy(), args), UdfOutput::Value(Vec::new()));
}

#[test]
fn test_null_replacement_literal() {
    let row = |subject: &'static [u8]| {
        vec![
            UdfArg::bytes(b"/a/").constant(),
            UdfArg::null_literal(),
            UdfArg::bytes(subject),
        ]
    };

    // Nothing replaced; the subject comes back.
    assert_eq!(replace(&modern(), row(b"xyz")), UdfOutput::Value(b"xyz".to_vec()));
    assert_eq!(replace(&modern(), row(b"xaz")), UdfOutput::Null);

    assert_eq!(replace(&legacy(), row(b"xaz")), UdfOutput::Value(b"xz".to_vec()));
}

#[test]
fn test_null_columns_are_not_literals() {
    let args = vec![
        UdfArg::bytes(b"/a/").constant(),
        UdfArg::null(ArgKind::String),
        UdfArg::bytes(b"xaz"),
    ];
    assert_eq!(replace(&modern(), args), UdfOutput::Value(b"xz".to_vec()));
}

#[test]
fn test_group_functions() {
    let args = UdfArgs::from(vec![
        UdfArg::bytes(b"/(a)/").constant(),
        UdfArg::bytes(b"cat"),
        UdfArg::null_literal(),
    ]);

    let mut capture = PregCapture::init(&args, &modern()).unwrap();
    assert_eq!(capture.call(&args), UdfOutput::Null);
    let mut position = PregPosition::init(&args, &modern()).unwrap();
    assert_eq!(position.call(&args), UdfOutput::Null);

    // Legacy still can't resolve a NULL group.
    let mut capture = PregCapture::init(&args, &legacy()).unwrap();
    assert_eq!(capture.call(&args), UdfOutput::Null);
}

#[test]
fn test_rlike_null_subject() {
    let args = UdfArgs::from(vec![UdfArg::bytes(b"/a*/").constant(), UdfArg::null_literal()]);
    for config in [modern(), legacy()] {
        let mut rlike = PregRlike::init(&args, &config).unwrap();
        assert_eq!(rlike.call(&args), UdfOutput::Value(0));
    }
}
