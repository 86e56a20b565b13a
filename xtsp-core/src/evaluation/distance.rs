#[cfg(test)]
#[path = "../../tests/unit/evaluation/distance_test.rs"]
mod distance_test;

use crate::utils::{CheckError, CheckResult, Float};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// An order `p` of the Minkowski distance used between consecutive tour points.
///
/// Any `p >= 1` is accepted, infinity denotes the Chebyshev (max) distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormOrder(Float);

impl NormOrder {
    /// Sum of absolute coordinate differences.
    pub const MANHATTAN: NormOrder = NormOrder(1.);
    /// Standard Euclidean distance.
    pub const EUCLIDEAN: NormOrder = NormOrder(2.);
    /// Max of absolute coordinate differences.
    pub const CHEBYSHEV: NormOrder = NormOrder(Float::INFINITY);

    /// Creates a new norm order.
    pub fn new(p: Float) -> CheckResult<Self> {
        if p.is_nan() || p < 1. {
            return Err(CheckError::validation(format!("norm order must be at least 1, got {p}")));
        }

        Ok(Self(p))
    }

    /// Infers the norm order from a TSPLIB `EDGE_WEIGHT_TYPE` tag.
    /// Returns `None` for tags which are not geometric.
    pub fn from_edge_weight_type(edge_weight_type: &str) -> Option<Self> {
        let edge_weight_type = edge_weight_type.trim().to_uppercase();

        let is_geometric = edge_weight_type
            .chars()
            .rev()
            .nth(1)
            .is_some_and(|digit| digit.is_ascii_digit() && digit != '0');

        match edge_weight_type.as_str() {
            _ if !is_geometric => None,
            tag if tag.starts_with("MAN") => Some(Self::MANHATTAN),
            tag if tag.starts_with("MAX") => Some(Self::CHEBYSHEV),
            _ => Some(Self::EUCLIDEAN),
        }
    }

    /// Returns the order value.
    pub fn value(&self) -> Float {
        self.0
    }

    /// Returns distance between two points of the same dimension.
    pub fn distance(&self, a: &[Float], b: &[Float]) -> Float {
        let deltas = a.iter().zip(b.iter()).map(|(a, b)| (a - b).abs());

        match self.0 {
            p if p == 1. => deltas.sum(),
            p if p == 2. => deltas.map(|delta| delta * delta).sum::<Float>().sqrt(),
            p if p.is_infinite() => deltas.fold(0., Float::max),
            p => deltas.map(|delta| delta.powf(p)).sum::<Float>().powf(1. / p),
        }
    }
}

impl Default for NormOrder {
    fn default() -> Self {
        Self::EUCLIDEAN
    }
}

impl Display for NormOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_infinite() { f.write_str("inf") } else { write!(f, "{}", self.0) }
    }
}

impl FromStr for NormOrder {
    type Err = CheckError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "inf" | "max" => Ok(Self::CHEBYSHEV),
            value => value
                .parse::<Float>()
                .map_err(|err| CheckError::validation(format!("cannot parse norm order '{value}': '{err}'")))
                .and_then(Self::new),
        }
    }
}
