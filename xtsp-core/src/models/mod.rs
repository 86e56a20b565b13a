//! A collection of models to represent a geometric (generalized) TSP instance and its tour.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
