#[cfg(test)]
#[path = "../../tests/unit/validation/clustering_test.rs"]
mod clustering_test;

use crate::models::Clustering;
use crate::utils::{CheckError, CheckResult};
use rustc_hash::FxHashSet;

/// Checks that the clustering is an exact partition of `0..num_vertices`.
///
/// An empty clustering is valid: it denotes a plain TSP instance. Clusters are processed in
/// order, so a vertex repeated in a later cluster is reported against the earlier one.
pub fn validate_clustering(clustering: &Clustering, num_vertices: usize) -> CheckResult<()> {
    if num_vertices <= 3 {
        return Err(CheckError::validation(format!("expected more than 3 vertices, got {num_vertices}")));
    }

    if !clustering.is_generalized() {
        return Ok(());
    }

    let mut owners: Vec<Option<usize>> = vec![None; num_vertices];

    for (cluster_idx, members) in clustering.iter().enumerate() {
        let unique = members.iter().collect::<FxHashSet<_>>();
        if unique.len() != members.len() {
            return Err(CheckError::validation(format!("cluster {cluster_idx} contains duplicate vertex")));
        }

        for &vertex in members {
            let owner = owners.get_mut(vertex).ok_or_else(|| {
                CheckError::validation(format!(
                    "invalid vertex {vertex} in cluster {cluster_idx}: expected a value in [0, {num_vertices})"
                ))
            })?;

            if let Some(earlier) = owner {
                return Err(CheckError::validation(format!(
                    "vertex {vertex} of cluster {cluster_idx} already appeared in cluster {earlier}"
                )));
            }

            *owner = Some(cluster_idx);
        }
    }

    match owners.iter().position(|owner| owner.is_none()) {
        Some(vertex) => Err(CheckError::validation(format!("vertex {vertex} is not assigned to any cluster"))),
        None => Ok(()),
    }
}
