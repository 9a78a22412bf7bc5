//! Error context extension tests

use std::io;

use capreg_domain::error::Error;
use capreg_infrastructure::ErrorContext;

#[test]
fn test_config_context_wraps_source() {
    let failed: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));

    let err = failed.config_context("Reading config").unwrap_err();

    match err {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Reading config: gone");
            assert!(source.is_some());
        }
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn test_with_config_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(3);
    let value = ok
        .with_config_context(|| -> String { panic!("context built for a success") })
        .expect("success passes through");
    assert_eq!(value, 3);
}
