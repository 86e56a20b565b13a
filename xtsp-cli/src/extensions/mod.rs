//! Contains command line extensions: solution checks and configuration.

pub mod check;
pub mod config;
