//! Scientific crate contains logic to read and write files of scientific benchmark formats
//! describing geometric TSP instances and their tours.
//!
//! # Supported formats
//!
//! - **tsplib**: geometric subset of TSPLIB95 problems (`TSP`, `GTSP`) and tours (`TOUR`)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_files_test.rs"]
mod known_files_test;

pub use xtsp_core as core;

pub mod common;
pub mod tsplib;
