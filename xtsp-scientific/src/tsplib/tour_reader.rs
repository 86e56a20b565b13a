#[cfg(test)]
#[path = "../../tests/unit/tsplib/tour_reader_test.rs"]
mod tour_reader_test;

use super::problem_reader::read_name;
use crate::common::*;
use rustc_hash::FxHashSet;
use std::io::{BufReader, Read};
use xtsp_core::prelude::*;

/// A trait to read tsplib95 tour.
pub trait TsplibTour {
    /// Reads tsplib95 tour and converts vertex ids to 0-based indices.
    fn read_tsplib_tour(self) -> CheckResult<Tour>;
}

impl<R: Read> TsplibTour for BufReader<R> {
    fn read_tsplib_tour(self) -> CheckResult<Tour> {
        TsplibTourReader::new(self).read_tour()
    }
}

impl TsplibTour for String {
    fn read_tsplib_tour(self) -> CheckResult<Tour> {
        TsplibTourReader::new(BufReader::new(self.as_bytes())).read_tour()
    }
}

/// A state of the tour reader. Each state waits for a line starting with its keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TourState {
    SeekingName,
    SeekingType,
    SeekingDimension,
    SeekingTourSection,
}

impl TourState {
    fn keyword(&self) -> &'static str {
        match self {
            TourState::SeekingName => "NAME",
            TourState::SeekingType => "TYPE",
            TourState::SeekingDimension => "DIMENSION",
            TourState::SeekingTourSection => "TOUR_SECTION",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TourState::SeekingName => "seeking_name",
            TourState::SeekingType => "seeking_type",
            TourState::SeekingDimension => "seeking_dimension",
            TourState::SeekingTourSection => "seeking_TOUR_SECTION",
        }
    }
}

struct TsplibTourReader<R: Read> {
    lines: LineReader<R>,
    name: String,
    tour_length: usize,
}

impl<R: Read> TsplibTourReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { lines: LineReader::new(reader), name: String::new(), tour_length: 0 }
    }

    fn read_tour(mut self) -> CheckResult<Tour> {
        let mut state = TourState::SeekingName;

        while let Some(line) = self.lines.read_line()? {
            let normalized = line.trim().to_uppercase();
            if !normalized.starts_with(state.keyword()) {
                continue;
            }

            state = match state {
                TourState::SeekingName => {
                    self.name = read_name(&line, self.lines.line_number())?;
                    TourState::SeekingType
                }
                TourState::SeekingType if normalized.ends_with("TOUR") => TourState::SeekingDimension,
                TourState::SeekingType => TourState::SeekingType,
                TourState::SeekingDimension => {
                    let value = normalized.split_whitespace().last().unwrap_or_default();
                    self.tour_length = parse_header_value(value, "DIMENSION", self.lines.line_number())?;
                    TourState::SeekingTourSection
                }
                TourState::SeekingTourSection => {
                    let vertices = self.read_tour_section()?;
                    return Ok(Tour::new(self.name, vertices));
                }
            };
        }

        Err(CheckError::premature_eof(format!("invalid tour file: fails to progress while {}", state.name())))
    }

    fn read_tour_section(&mut self) -> CheckResult<Vec<usize>> {
        let section = "TOUR_SECTION";
        let mut vertices = Vec::new();

        for row in 1..=self.tour_length {
            let line = self.lines.read_line()?.ok_or_else(|| {
                CheckError::premature_eof(format!("invalid tour file: fails to progress while reading {section} row {row}"))
            })?;

            let vertex = parse_field::<i64>(line.trim(), section, row)?;
            if vertex <= 0 {
                return Err(CheckError::structural(format!(
                    "invalid {section}: containing erroneous vertex index {vertex} in row {row}"
                )));
            }

            vertices.push(vertex as usize - 1);
        }

        match self.lines.read_line()? {
            Some(line) if line.trim() == "-1" => {}
            _ => return Err(CheckError::structural(format!("invalid {section}: longer than the declared dimension"))),
        }

        if vertices.iter().collect::<FxHashSet<_>>().len() != vertices.len() {
            return Err(CheckError::validation(format!("invalid {section}: some vertex is visited more than once")));
        }

        Ok(vertices)
    }
}
