/// A floating point type used for coordinates and costs.
pub type Float = f64;
