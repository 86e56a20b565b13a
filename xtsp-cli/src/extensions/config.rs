//! Contains logic to read checker configuration from a json file.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use super::check::{CheckOptions, NormSelection};
use serde::Deserialize;
use std::io::{BufReader, Read};
use xtsp_core::prelude::{GenericError, NormOrder};

/// A checker configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies how tour cost is evaluated.
    pub evaluation: Option<EvaluationConfig>,
    /// Specifies logging behavior.
    pub logging: Option<LoggingConfig>,
}

/// An evaluation configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationConfig {
    /// Whether each edge length is rounded to the nearest integer. Default is true.
    pub rounding: Option<bool>,
    /// A distance norm order.
    pub norm: Option<NormConfig>,
}

/// A distance norm order given either as a number or as a name: "inf" or "auto".
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NormConfig {
    /// A numeric norm order.
    Order(f64),
    /// A named norm order.
    Named(String),
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Whether progress is written to stdout.
    pub enabled: bool,
}

impl Config {
    /// Converts the configuration to check options, using defaults for everything not set.
    pub fn to_check_options(&self) -> Result<CheckOptions, GenericError> {
        let defaults = CheckOptions::default();
        let Some(evaluation) = self.evaluation.as_ref() else { return Ok(defaults) };

        let norm = match evaluation.norm.as_ref() {
            Some(NormConfig::Order(order)) => NormSelection::Fixed(NormOrder::new(*order)?),
            Some(NormConfig::Named(name)) => name.parse()?,
            None => defaults.norm,
        };

        Ok(CheckOptions { is_rounded: evaluation.rounding.unwrap_or(defaults.is_rounded), norm })
    }

    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.logging.as_ref().is_some_and(|logging| logging.enabled)
    }
}

/// Reads config from a reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
