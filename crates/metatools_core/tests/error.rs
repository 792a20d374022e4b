use metatools_core::{
    error::{Error, Result},
    logging::init_logging,
};
use std::error::Error as _;

#[test]
fn display() {
    let err = Error::IndexOutOfBounds { index: 3, size: 3 };
    assert_eq!(
        err.to_string(),
        "Index out of bounds: index 3 is out of bounds for dimension with size 3"
    );

    let err = Error::InvalidArgument("empty identifier".to_string());
    assert_eq!(err.to_string(), "Invalid argument: empty identifier");
}

#[test]
fn io_source() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
    let err: Error = io.into();

    assert!(matches!(err, Error::Io(_)));
    assert!(err.source().is_some());
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn init_logging_twice() -> Result<()> {
    init_logging();
    init_logging();

    Ok(())
}
