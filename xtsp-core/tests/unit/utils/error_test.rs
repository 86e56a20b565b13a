use super::*;

#[test]
fn can_format_check_error_with_kind() {
    let error = CheckError::malformed_header("missing colon");

    assert_eq!(error.kind, ErrorKind::MalformedHeader);
    assert_eq!(error.to_string(), "malformed header error: missing colon");
}

#[test]
fn can_convert_check_error_into_generic_error() {
    let error: GenericError = CheckError::premature_eof("stalled while seeking_name").into();

    assert_eq!(error, GenericError::from("premature end of file error: stalled while seeking_name"));
}

#[test]
fn can_map_io_error_to_io_kind() {
    let error: CheckError = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();

    assert_eq!(error.kind, ErrorKind::Io);
    assert_eq!(error.cause, "no such file");
}

#[test]
fn can_join_many_generic_errors() {
    let errors = vec![GenericError::from("first"), GenericError::from("second")];

    assert_eq!(GenericError::join_many(&errors, ", "), "first, second");
}
