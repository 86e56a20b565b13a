//! Contains logic to check TSPLIB tours against their problems.

#[cfg(test)]
#[path = "../../tests/unit/extensions/check_test.rs"]
mod check_test;

use rayon::prelude::*;
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use xtsp_core::prelude::*;
use xtsp_core::utils::Timer;
use xtsp_scientific::tsplib::{read_problem_file, read_tour_file};

/// Specifies how the distance norm order is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NormSelection {
    /// The same norm order for every problem.
    Fixed(NormOrder),
    /// The norm order is inferred from the problem's `EDGE_WEIGHT_TYPE`.
    Auto,
}

impl NormSelection {
    fn resolve(&self, problem: &Problem) -> CheckResult<NormOrder> {
        match self {
            NormSelection::Fixed(norm) => Ok(*norm),
            NormSelection::Auto => NormOrder::from_edge_weight_type(&problem.edge_weight_type).ok_or_else(|| {
                CheckError::validation(format!("cannot infer norm order from '{}'", problem.edge_weight_type))
            }),
        }
    }
}

impl FromStr for NormSelection {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("auto") {
            Ok(NormSelection::Auto)
        } else {
            Ok(NormSelection::Fixed(value.parse::<NormOrder>()?))
        }
    }
}

/// Options used to evaluate tour cost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckOptions {
    /// Whether every edge length is rounded to the nearest integer.
    pub is_rounded: bool,
    /// Distance norm selection.
    pub norm: NormSelection,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { is_rounded: true, norm: NormSelection::Fixed(NormOrder::default()) }
    }
}

/// A problem and its tour which were successfully checked.
#[derive(Clone, Debug)]
pub struct CheckedSolution {
    /// A parsed problem.
    pub problem: Problem,
    /// A parsed tour.
    pub tour: Tour,
    /// A check outcome.
    pub report: SolutionReport,
}

/// Reads problem and tour files, validates the tour and evaluates its cost.
pub fn check_tsplib_files(
    problem_path: &Path,
    tour_path: &Path,
    options: &CheckOptions,
    logger: InfoLogger,
) -> CheckResult<CheckedSolution> {
    (logger)(format!("reading problem file {}", problem_path.display()).as_str());
    let problem = Timer::measure_duration_with_callback(
        || read_problem_file(problem_path),
        |duration| (logger)(format!("problem read in {}ms", duration.as_millis()).as_str()),
    )?;

    (logger)(format!("NAME: {}", problem.name).as_str());
    (logger)(
        format!("node coordinates: {}x{}", problem.coordinates.num_vertices(), problem.coordinates.dim()).as_str(),
    );
    if problem.is_generalized() {
        (logger)(format!("number of clusters: {}", problem.clustering.size()).as_str());
    }

    (logger)(format!("reading tour file {}", tour_path.display()).as_str());
    let tour = Timer::measure_duration_with_callback(
        || read_tour_file(tour_path),
        |duration| (logger)(format!("tour read in {}ms", duration.as_millis()).as_str()),
    )?;
    (logger)(format!("tour NAME: {}", tour.name).as_str());

    let norm = options.norm.resolve(&problem)?;
    let report = check_solution(&problem, &tour, options.is_rounded, norm)?;

    if let ClusterSequence::Sequence(sequence) = &report.cluster_sequence {
        (logger)(format!("cluster sequence: {sequence:?}").as_str());
    }
    (logger)(format!("tour cost: {} (norm: {norm}, rounded: {})", report.cost, options.is_rounded).as_str());

    Ok(CheckedSolution { problem, tour, report })
}

/// Checks many problem and tour pairs in parallel. Results are returned in the input order.
pub fn check_tsplib_batch(
    pairs: &[(PathBuf, PathBuf)],
    options: &CheckOptions,
    logger: InfoLogger,
) -> Vec<CheckResult<CheckedSolution>> {
    pairs
        .par_iter()
        .map(|(problem_path, tour_path)| check_tsplib_files(problem_path, tour_path, options, logger.clone()))
        .collect()
}

/// A serializable outcome of a single check.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    /// A path to the problem file.
    pub problem_file: String,
    /// A path to the tour file.
    pub tour_file: String,
    /// Whether the tour is valid.
    pub is_valid: bool,
    /// A problem name if the check succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_name: Option<String>,
    /// A tour name if the check succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_name: Option<String>,
    /// A tour cost if the check succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Cluster ids in tour order, only for generalized problems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_sequence: Option<Vec<usize>>,
    /// A failure description if the check failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

/// A serializable check failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// An error category.
    pub kind: String,
    /// An error cause.
    pub cause: String,
}

impl CheckReport {
    /// Creates a report from the check result of the given files.
    pub fn new(problem_path: &Path, tour_path: &Path, result: &CheckResult<CheckedSolution>) -> Self {
        let (problem_file, tour_file) = (problem_path.display().to_string(), tour_path.display().to_string());

        match result {
            Ok(checked) => Self {
                problem_file,
                tour_file,
                is_valid: true,
                problem_name: Some(checked.report.problem_name.clone()),
                tour_name: Some(checked.report.tour_name.clone()),
                cost: Some(checked.report.cost),
                cluster_sequence: match &checked.report.cluster_sequence {
                    ClusterSequence::Sequence(sequence) => Some(sequence.clone()),
                    ClusterSequence::NotApplicable => None,
                },
                error: None,
            },
            Err(err) => Self {
                problem_file,
                tour_file,
                is_valid: false,
                problem_name: None,
                tour_name: None,
                cost: None,
                cluster_sequence: None,
                error: Some(ErrorReport { kind: err.kind.to_string(), cause: err.cause.clone() }),
            },
        }
    }
}

/// Writes check reports as a pretty printed json array.
pub fn write_reports_json<W: Write>(mut writer: BufWriter<W>, reports: &[CheckReport]) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut writer, reports).map_err(|err| format!("cannot write reports: '{err}'"))?;
    writer.flush()?;

    Ok(())
}
