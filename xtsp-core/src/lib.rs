//! Core crate contains models and logic to validate and evaluate tours of geometric
//! Traveling Salesman Problem instances, including the generalized (clustered) variant.
//!
//! # Overview
//!
//! - **models**: coordinates table, clustering, problem and tour
//! - **validation**: clustering and permutation validators, cluster sequence extraction
//! - **evaluation**: distance norms and tour cost
//! - **check**: the complete validate-then-evaluate pipeline for a problem and a tour
//!
//! Reading TSPLIB files lives in the `xtsp-scientific` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod check;
pub mod evaluation;
pub mod models;
pub mod prelude;
pub mod utils;
pub mod validation;
