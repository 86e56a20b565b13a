#[cfg(test)]
#[path = "../../tests/unit/tsplib/problem_reader_test.rs"]
mod problem_reader_test;

use crate::common::*;
use std::io::{BufReader, Read};
use xtsp_core::prelude::*;

/// A trait to read a geometric tsplib95 problem: plain TSP or generalized TSP (GTSP).
pub trait TsplibProblem {
    /// Reads tsplib95 problem.
    fn read_tsplib_problem(self) -> CheckResult<Problem>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib_problem(self) -> CheckResult<Problem> {
        TsplibProblemReader::new(self).read_problem()
    }
}

impl TsplibProblem for String {
    fn read_tsplib_problem(self) -> CheckResult<Problem> {
        TsplibProblemReader::new(BufReader::new(self.as_bytes())).read_problem()
    }
}

/// A state of the problem reader. Each state waits for a line starting with its keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProblemState {
    SeekingName,
    SeekingType,
    SeekingNumVertices,
    SeekingNumClusters,
    SeekingEdgeWeightType,
    SeekingNodeCoordSection,
    SeekingGtspSetSection,
}

impl ProblemState {
    fn keyword(&self) -> &'static str {
        match self {
            ProblemState::SeekingName => "NAME",
            ProblemState::SeekingType => "TYPE",
            ProblemState::SeekingNumVertices => "DIMENSION",
            ProblemState::SeekingNumClusters => "GTSP_SETS",
            ProblemState::SeekingEdgeWeightType => "EDGE_WEIGHT_TYPE",
            ProblemState::SeekingNodeCoordSection => "NODE_COORD_SECTION",
            ProblemState::SeekingGtspSetSection => "GTSP_SET_SECTION",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ProblemState::SeekingName => "seeking_name",
            ProblemState::SeekingType => "seeking_type",
            ProblemState::SeekingNumVertices => "seeking_num_vertices",
            ProblemState::SeekingNumClusters => "seeking_num_clusters",
            ProblemState::SeekingEdgeWeightType => "seeking_edge_weight_type",
            ProblemState::SeekingNodeCoordSection => "seeking_NODE_COORD_SECTION",
            ProblemState::SeekingGtspSetSection => "seeking_GTSP_SET_SECTION",
        }
    }
}

struct TsplibProblemReader<R: Read> {
    lines: LineReader<R>,
    name: String,
    is_generalized: bool,
    num_vertices: usize,
    num_clusters: usize,
    edge_weight_type: String,
    dim: usize,
    coordinates: Coordinates,
}

impl<R: Read> TsplibProblemReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self {
            lines: LineReader::new(reader),
            name: String::new(),
            is_generalized: false,
            num_vertices: 0,
            num_clusters: 0,
            edge_weight_type: String::new(),
            dim: 0,
            coordinates: Coordinates::default(),
        }
    }

    fn read_problem(mut self) -> CheckResult<Problem> {
        let mut state = ProblemState::SeekingName;

        while let Some(line) = self.lines.read_line()? {
            let normalized = line.trim().to_uppercase();
            if !normalized.starts_with(state.keyword()) {
                continue;
            }

            state = match state {
                ProblemState::SeekingName => {
                    self.name = read_name(&line, self.lines.line_number())?;
                    ProblemState::SeekingType
                }
                ProblemState::SeekingType => {
                    self.is_generalized = self.read_type(&normalized)?;
                    ProblemState::SeekingNumVertices
                }
                ProblemState::SeekingNumVertices => {
                    self.num_vertices = parse_header_value(&normalized, "DIMENSION", self.lines.line_number())?;
                    if self.is_generalized {
                        ProblemState::SeekingNumClusters
                    } else {
                        ProblemState::SeekingEdgeWeightType
                    }
                }
                ProblemState::SeekingNumClusters => {
                    self.num_clusters = parse_header_value(&normalized, "GTSP_SETS", self.lines.line_number())?;
                    ProblemState::SeekingEdgeWeightType
                }
                ProblemState::SeekingEdgeWeightType => {
                    (self.edge_weight_type, self.dim) = self.read_edge_weight_type(&normalized)?;
                    ProblemState::SeekingNodeCoordSection
                }
                ProblemState::SeekingNodeCoordSection => {
                    self.coordinates = self.read_node_coord_section()?;
                    if !self.is_generalized {
                        return Ok(self.into_problem(Clustering::default()));
                    }
                    ProblemState::SeekingGtspSetSection
                }
                ProblemState::SeekingGtspSetSection => {
                    let clustering = self.read_gtsp_set_section()?;
                    return Ok(self.into_problem(clustering));
                }
            };
        }

        Err(CheckError::premature_eof(format!("invalid problem file: fails to progress while {}", state.name())))
    }

    fn read_type(&self, line: &str) -> CheckResult<bool> {
        if line.ends_with("GTSP") {
            Ok(true)
        } else if line.ends_with("TSP") {
            Ok(false)
        } else {
            Err(CheckError::malformed_header(format!(
                "unrecognized TYPE at line {}: '{line}'",
                self.lines.line_number()
            )))
        }
    }

    fn read_edge_weight_type(&self, line: &str) -> CheckResult<(String, usize)> {
        let edge_weight_type = line.rsplit(':').next().unwrap_or(line).trim();

        let dim = edge_weight_type
            .chars()
            .rev()
            .nth(1)
            .and_then(|digit| digit.to_digit(10))
            .filter(|&dim| dim > 0)
            .ok_or_else(|| {
                CheckError::malformed_header(format!(
                    "expecting a geometric TSP/GTSP problem, got EDGE_WEIGHT_TYPE: '{edge_weight_type}'"
                ))
            })?;

        Ok((edge_weight_type.to_string(), dim as usize))
    }

    fn read_node_coord_section(&mut self) -> CheckResult<Coordinates> {
        let section = "NODE_COORD_SECTION";
        let mut values = Vec::new();

        for row in 1..=self.num_vertices {
            let line = self.read_section_line(section, row)?;
            let fields = line.split_whitespace().collect::<Vec<_>>();

            if fields.len() != self.dim + 1 {
                return Err(CheckError::structural(format!(
                    "invalid {section}: row {row} should have {} items, got {} instead",
                    self.dim + 1,
                    fields.len()
                )));
            }

            let data =
                fields.iter().map(|field| parse_field::<Float>(field, section, row)).collect::<CheckResult<Vec<_>>>()?;

            if data[0] != row as Float {
                return Err(CheckError::structural(format!(
                    "invalid {section}: row {row} is mis-numbered as {}",
                    fields[0]
                )));
            }

            values.extend_from_slice(&data[1..]);
        }

        Coordinates::new(self.dim, values)
    }

    fn read_gtsp_set_section(&mut self) -> CheckResult<Clustering> {
        let section = "GTSP_SET_SECTION";
        let mut clusters = Vec::new();

        for row in 1..=self.num_clusters {
            let line = self.read_section_line(section, row)?;
            let data = line
                .split_whitespace()
                .map(|field| parse_field::<i64>(field, section, row))
                .collect::<CheckResult<Vec<_>>>()?;

            if data.last() != Some(&-1) {
                return Err(CheckError::structural(format!("invalid {section}: row {row} missing the -1 delimiter")));
            }

            if data[0] != row as i64 {
                return Err(CheckError::structural(format!(
                    "invalid {section}: row {row} is mis-numbered as {}",
                    data[0]
                )));
            }

            let members = data[1..data.len() - 1]
                .iter()
                .map(|&vertex| {
                    if vertex > 0 {
                        Ok(vertex as usize - 1)
                    } else {
                        Err(CheckError::structural(format!(
                            "invalid {section}: row {row} contains erroneous vertex id {vertex}"
                        )))
                    }
                })
                .collect::<CheckResult<Vec<_>>>()?;

            clusters.push(members);
        }

        Ok(Clustering::new(clusters))
    }

    fn read_section_line(&mut self, section: &str, row: usize) -> CheckResult<String> {
        self.lines.read_line()?.ok_or_else(|| {
            CheckError::premature_eof(format!("invalid problem file: fails to progress while reading {section} row {row}"))
        })
    }

    fn into_problem(self, clustering: Clustering) -> Problem {
        Problem { name: self.name, edge_weight_type: self.edge_weight_type, coordinates: self.coordinates, clustering }
    }
}

/// Extracts the value after the first colon of a `NAME` line.
pub(crate) fn read_name(line: &str, line_number: usize) -> CheckResult<String> {
    line.split_once(':').map(|(_, name)| name.trim().to_string()).ok_or_else(|| {
        CheckError::malformed_header(format!("missing colon ':' in the 'NAME' line {line_number}: '{}'", line.trim()))
    })
}
