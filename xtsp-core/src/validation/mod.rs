//! Contains validators which check structural correctness of clusterings and tours.

mod clustering;
pub use self::clustering::*;

mod permutation;
pub use self::permutation::*;

mod cluster_sequence;
pub use self::cluster_sequence::*;
