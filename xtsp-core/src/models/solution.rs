/// A tour as read from a tour file: an ordered sequence of 0-based vertex indices.
///
/// For a plain TSP it is a permutation of all vertices, for a generalized TSP it
/// contains exactly one representative vertex per cluster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tour {
    /// A display name used only for diagnostics.
    pub name: String,
    /// Visited vertices in order, the cycle is implicitly closed.
    pub vertices: Vec<usize>,
}

impl Tour {
    /// Creates a new tour.
    pub fn new(name: impl Into<String>, vertices: Vec<usize>) -> Self {
        Self { name: name.into(), vertices }
    }

    /// Returns amount of visited vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if tour has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
