//! This module reimports commonly used types.

pub use crate::check::{SolutionReport, check_solution};
pub use crate::evaluation::{NormOrder, evaluate_cost};
pub use crate::models::{Clustering, Coordinates, Problem, Tour};
pub use crate::validation::{
    ClusterSequence, extract_cluster_sequence, validate_clustering, validate_permutation, vertex_to_cluster,
};
pub use crate::utils::{CheckError, CheckResult, ErrorKind, Float, GenericError, GenericResult, InfoLogger};
