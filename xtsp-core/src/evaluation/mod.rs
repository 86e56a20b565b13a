//! Contains logic to compute the cost of a closed tour.

mod distance;
pub use self::distance::*;

mod cost;
pub use self::cost::*;
