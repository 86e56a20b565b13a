#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use std::io::prelude::*;
use std::io::{BufReader, Read};
use std::str::FromStr;
use xtsp_core::prelude::{CheckError, CheckResult};

/// Reads text line by line keeping track of the line number.
pub(crate) struct LineReader<R: Read> {
    reader: BufReader<R>,
    buffer: String,
    line_number: usize,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: BufReader<R>) -> Self {
        Self { reader, buffer: String::new(), line_number: 0 }
    }

    /// Returns the next line without its line ending or `None` at the end of input.
    pub fn read_line(&mut self) -> CheckResult<Option<String>> {
        self.buffer.clear();

        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }

        self.line_number += 1;

        Ok(Some(self.buffer.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Returns the number of the last read line, 1-based.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// Parses the value which follows the last colon of the header line.
pub(crate) fn parse_header_value<T: FromStr>(line: &str, key: &str, line_number: usize) -> CheckResult<T> {
    let value = line.rsplit(':').next().unwrap_or(line).trim();

    value
        .parse::<T>()
        .map_err(|_| CheckError::malformed_header(format!("cannot parse {key} value '{value}' at line {line_number}")))
}

/// Parses a single whitespace separated field of a section row.
pub(crate) fn parse_field<T: FromStr>(field: &str, section: &str, row: usize) -> CheckResult<T> {
    field
        .parse::<T>()
        .map_err(|_| CheckError::structural(format!("invalid {section}: cannot parse '{field}' in row {row}")))
}
