#[cfg(test)]
#[path = "../../tests/unit/validation/cluster_sequence_test.rs"]
mod cluster_sequence_test;

use super::validate_permutation_of;
use crate::models::Clustering;
use crate::utils::{CheckError, CheckResult};

/// A sequence of cluster ids implied by the tour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClusterSequence {
    /// The problem is not generalized, so there are no clusters to follow.
    NotApplicable,
    /// Cluster ids in tour order, a permutation of `0..clusters`.
    Sequence(Vec<usize>),
}

/// Maps every vertex to the cluster which contains it. Unassigned vertices map to `None`.
pub fn vertex_to_cluster(clustering: &Clustering, num_vertices: usize) -> Vec<Option<usize>> {
    let mut mapping = vec![None; num_vertices];

    for (cluster_idx, members) in clustering.iter().enumerate() {
        for &vertex in members {
            if let Some(cluster) = mapping.get_mut(vertex) {
                *cluster = Some(cluster_idx);
            }
        }
    }

    mapping
}

/// Maps tour vertices to their clusters and checks that the result visits every cluster exactly once.
///
/// The clustering is expected to be validated already.
pub fn extract_cluster_sequence(
    clustering: &Clustering,
    tour: &[usize],
    num_vertices: usize,
) -> CheckResult<ClusterSequence> {
    if let Some((position, vertex)) = tour.iter().enumerate().find(|(_, vertex)| **vertex >= num_vertices) {
        return Err(CheckError::validation(format!(
            "tour vertex {vertex} at position {position} is out of range [0, {num_vertices})"
        )));
    }

    if !clustering.is_generalized() {
        return Ok(ClusterSequence::NotApplicable);
    }

    let mapping = vertex_to_cluster(clustering, num_vertices);

    let sequence = tour
        .iter()
        .map(|&vertex| {
            mapping[vertex]
                .ok_or_else(|| CheckError::validation(format!("vertex {vertex} is not assigned to any cluster")))
        })
        .collect::<CheckResult<Vec<_>>>()?;

    validate_permutation_of(sequence.as_slice(), clustering.size(), "cluster")?;

    Ok(ClusterSequence::Sequence(sequence))
}
