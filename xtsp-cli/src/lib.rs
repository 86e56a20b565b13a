//! A command line interface library to validate and evaluate tours of geometric TSP and GTSP
//! instances stored in TSPLIB format.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use xtsp_core as core;
pub use xtsp_scientific as scientific;

pub mod extensions;
