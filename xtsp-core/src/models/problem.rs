#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::utils::{CheckError, CheckResult, Float};

/// A dense row-major table of vertex coordinates: one row per vertex, `dim` columns each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Coordinates {
    dim: usize,
    values: Vec<Float>,
}

impl Coordinates {
    /// Creates a new coordinates table from flatten row-major values.
    pub fn new(dim: usize, values: Vec<Float>) -> CheckResult<Self> {
        if dim == 0 {
            return Err(CheckError::validation("coordinates dimension must be positive"));
        }

        if values.len() % dim != 0 {
            return Err(CheckError::validation(format!(
                "cannot split {} values into rows of dimension {dim}",
                values.len()
            )));
        }

        Ok(Self { dim, values })
    }

    /// Creates a new coordinates table from separate rows which must have the same length.
    pub fn from_rows(rows: &[Vec<Float>]) -> CheckResult<Self> {
        let dim = rows.first().map_or(0, |row| row.len());

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != dim) {
            return Err(CheckError::validation(format!(
                "row {idx} has {} values, expected {dim}",
                row.len()
            )));
        }

        Self::new(dim, rows.iter().flatten().cloned().collect())
    }

    /// Returns the geometric dimension (columns per row).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the amount of vertices (rows).
    pub fn num_vertices(&self) -> usize {
        if self.dim == 0 { 0 } else { self.values.len() / self.dim }
    }

    /// Returns coordinates of the given vertex.
    pub fn row(&self, vertex: usize) -> Option<&[Float]> {
        let start = vertex.checked_mul(self.dim)?;
        self.values.get(start..start.checked_add(self.dim)?)
    }

    /// Returns an iterator over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Float]> + '_ {
        self.values.chunks_exact(self.dim.max(1))
    }
}

/// An ordered sequence of clusters where each cluster is a set of 0-based vertex indices.
/// An empty clustering means that the instance is a plain (not generalized) TSP.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clustering {
    clusters: Vec<Vec<usize>>,
}

impl Clustering {
    /// Creates a new clustering. The partition invariant is checked separately
    /// by [`crate::validation::validate_clustering`].
    pub fn new(clusters: Vec<Vec<usize>>) -> Self {
        Self { clusters }
    }

    /// Returns true if the instance is generalized, i.e. has at least one cluster.
    pub fn is_generalized(&self) -> bool {
        !self.clusters.is_empty()
    }

    /// Returns amount of clusters.
    pub fn size(&self) -> usize {
        self.clusters.len()
    }

    /// Returns clusters.
    pub fn clusters(&self) -> &[Vec<usize>] {
        self.clusters.as_slice()
    }

    /// Returns members of the given cluster.
    pub fn get(&self, cluster: usize) -> Option<&[usize]> {
        self.clusters.get(cluster).map(|members| members.as_slice())
    }

    /// Returns an iterator over clusters.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.clusters.iter().map(|members| members.as_slice())
    }
}

/// A geometric TSP or GTSP instance as read from a problem file.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    /// A display name used only for diagnostics.
    pub name: String,
    /// A raw `EDGE_WEIGHT_TYPE` tag, e.g. `EUC_2D`.
    pub edge_weight_type: String,
    /// Vertex coordinates.
    pub coordinates: Coordinates,
    /// Clusters of the generalized variant, empty for plain TSP.
    pub clustering: Clustering,
}

impl Problem {
    /// Returns amount of vertices.
    pub fn num_vertices(&self) -> usize {
        self.coordinates.num_vertices()
    }

    /// Returns true if the problem is generalized.
    pub fn is_generalized(&self) -> bool {
        self.clustering.is_generalized()
    }

    /// Returns the tour length the problem expects: amount of clusters for generalized
    /// problems, amount of vertices otherwise.
    pub fn expected_tour_length(&self) -> usize {
        if self.is_generalized() { self.clustering.size() } else { self.num_vertices() }
    }
}
