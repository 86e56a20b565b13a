//! Contains readers and writer for the geometric subset of TSPLIB95 format.
//!
//! Both readers are line-oriented state machines: header keywords are sought in a fixed
//! order, unrelated lines are skipped, and fixed size sections are read strictly.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use xtsp_core::prelude::{CheckError, CheckResult, ErrorKind, Problem, Tour};

mod problem_reader;
pub use self::problem_reader::TsplibProblem;

mod tour_reader;
pub use self::tour_reader::TsplibTour;

mod writer;
pub use self::writer::TsplibSolution;

/// Reads a TSP or GTSP problem from the file.
pub fn read_problem_file<P: AsRef<Path>>(path: P) -> CheckResult<Problem> {
    open_file(path.as_ref(), "problem")?.read_tsplib_problem()
}

/// Reads a tour from the file.
pub fn read_tour_file<P: AsRef<Path>>(path: P) -> CheckResult<Tour> {
    open_file(path.as_ref(), "tour")?.read_tsplib_tour()
}

fn open_file(path: &Path, description: &str) -> CheckResult<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|err| {
        CheckError::new(ErrorKind::Io, format!("cannot open {description} file '{}': '{err}'", path.display()))
    })
}
