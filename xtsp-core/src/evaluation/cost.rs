#[cfg(test)]
#[path = "../../tests/unit/evaluation/cost_test.rs"]
mod cost_test;

use super::NormOrder;
use crate::models::{Clustering, Coordinates};
use crate::utils::{CheckError, CheckResult, Float};
use crate::validation::validate_clustering;

/// Computes the length of the closed tour (last vertex connects back to the first one).
///
/// The clustering is validated first, the tour must visit one vertex per cluster for a
/// generalized instance and every vertex otherwise. When `is_rounded` is set, each edge
/// cost is rounded to the nearest integer with ties to even (TSPLIB integer costs) before
/// summation.
pub fn evaluate_cost(
    coordinates: &Coordinates,
    tour: &[usize],
    clustering: &Clustering,
    is_rounded: bool,
    norm: NormOrder,
) -> CheckResult<Float> {
    let num_vertices = coordinates.num_vertices();
    validate_clustering(clustering, num_vertices)?;

    let expected = if clustering.is_generalized() { clustering.size() } else { num_vertices };
    if tour.len() != expected {
        return Err(CheckError::validation(format!("tour has {} vertices, expected {expected}", tour.len())));
    }

    let points = tour
        .iter()
        .chain(tour.first())
        .map(|&vertex| {
            coordinates.row(vertex).ok_or_else(|| {
                CheckError::validation(format!("tour vertex {vertex} is out of range [0, {num_vertices})"))
            })
        })
        .collect::<CheckResult<Vec<_>>>()?;

    Ok(points
        .windows(2)
        .map(|pair| norm.distance(pair[0], pair[1]))
        .map(|cost| if is_rounded { cost.round_ties_even() } else { cost })
        .sum())
}
