use super::*;
use xtsp_core::prelude::ErrorKind;

#[test]
fn can_read_lines_with_line_endings_removed() {
    let mut reader = LineReader::new(BufReader::new("first\r\nsecond\n\nlast".as_bytes()));

    assert_eq!(reader.read_line(), Ok(Some("first".to_string())));
    assert_eq!(reader.read_line(), Ok(Some("second".to_string())));
    assert_eq!(reader.read_line(), Ok(Some(String::new())));
    assert_eq!(reader.line_number(), 3);
    assert_eq!(reader.read_line(), Ok(Some("last".to_string())));
    assert_eq!(reader.read_line(), Ok(None));
    assert_eq!(reader.line_number(), 4);
}

parameterized_test! {can_parse_header_value, (line, expected), {
    let result = parse_header_value::<usize>(line, "DIMENSION", 3);

    assert_eq!(result, expected.map_err(|cause: &str| CheckError::malformed_header(cause)));
}}

can_parse_header_value! {
    case01_with_spaces: ("DIMENSION : 42", Ok(42)),
    case02_without_spaces: ("DIMENSION:7", Ok(7)),
    case03_not_a_number: ("DIMENSION : abc", Err("cannot parse DIMENSION value 'abc' at line 3")),
    case04_negative: ("DIMENSION : -4", Err("cannot parse DIMENSION value '-4' at line 3")),
    case05_no_colon: ("DIMENSION 4", Err("cannot parse DIMENSION value 'DIMENSION 4' at line 3")),
}

#[test]
fn can_report_field_parse_error_as_structural() {
    let result = parse_field::<f64>("x1", "NODE_COORD_SECTION", 2);

    assert_eq!(result.clone().map_err(|err| err.kind), Err(ErrorKind::StructuralMismatch));
    assert_eq!(
        result.map_err(|err| err.cause),
        Err("invalid NODE_COORD_SECTION: cannot parse 'x1' in row 2".to_string())
    );
}
