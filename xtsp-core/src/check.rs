//! Provides the way to validate a tour against its problem and evaluate its cost in one go.

#[cfg(test)]
#[path = "../tests/unit/check_test.rs"]
mod check_test;

use crate::evaluation::{NormOrder, evaluate_cost};
use crate::models::{Problem, Tour};
use crate::utils::{CheckResult, Float};
use crate::validation::{ClusterSequence, extract_cluster_sequence, validate_clustering, validate_permutation};

/// Keeps outcome of a successful solution check.
#[derive(Clone, Debug, PartialEq)]
pub struct SolutionReport {
    /// Name of the problem.
    pub problem_name: String,
    /// Name of the tour.
    pub tour_name: String,
    /// Cluster ids in tour order for generalized problems.
    pub cluster_sequence: ClusterSequence,
    /// Total tour cost.
    pub cost: Float,
}

/// Validates the tour against the problem and evaluates its cost.
///
/// The clustering is validated first, then the tour is checked either as a cluster sequence
/// (generalized problem) or as a vertex permutation (plain problem). The first failure aborts
/// the whole check.
pub fn check_solution(problem: &Problem, tour: &Tour, is_rounded: bool, norm: NormOrder) -> CheckResult<SolutionReport> {
    let num_vertices = problem.num_vertices();
    validate_clustering(&problem.clustering, num_vertices)?;

    let cluster_sequence = if problem.is_generalized() {
        extract_cluster_sequence(&problem.clustering, tour.vertices.as_slice(), num_vertices)?
    } else {
        validate_permutation(tour.vertices.as_slice(), num_vertices)?;
        ClusterSequence::NotApplicable
    };

    let cost = evaluate_cost(&problem.coordinates, tour.vertices.as_slice(), &problem.clustering, is_rounded, norm)?;

    Ok(SolutionReport {
        problem_name: problem.name.clone(),
        tour_name: tour.name.clone(),
        cluster_sequence,
        cost,
    })
}
