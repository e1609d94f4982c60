use std::path::PathBuf;

use schemars::JsonSchema;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("invalid input: {field} must be {expected}, got {value}")]
    InvalidInput {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}

impl EstimateError {
    pub(crate) fn positive(field: &'static str, value: f64) -> Self {
        EstimateError::InvalidInput {
            field,
            expected: "a finite number greater than zero",
            value,
        }
    }

    pub(crate) fn non_negative(field: &'static str, value: f64) -> Self {
        EstimateError::InvalidInput {
            field,
            expected: "a finite number greater than or equal to zero",
            value,
        }
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, EstimateError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EstimateError::positive(field, value))
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, EstimateError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EstimateError::non_negative(field, value))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown priority `{0}`, expected Express, Standard or Economy")]
    UnknownPriority(String),
    #[error("unknown vehicle status `{0}`, expected Available, In_Transit or Maintenance")]
    UnknownVehicleStatus(String),
    #[error("unknown objective `{0}`, expected fastest, cheapest, greenest or balanced")]
    UnknownObjective(String),
    #[error("unknown sensitivity parameter `{0}`")]
    UnknownSensitivityParameter(String),
}

#[derive(Error, Debug)]
pub enum NetworkLoadError {
    #[error("required file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("{file} is missing required columns: {columns:?}")]
    MissingColumns {
        file: String,
        columns: Vec<&'static str>,
    },
    #[error("route `{label}` of order {order_id} is not of the form Origin-Destination")]
    InvalidRouteLabel { order_id: String, label: String },
    #[error("invalid value for {field} in record {record}: {reason}")]
    InvalidValue {
        record: String,
        field: &'static str,
        reason: String,
    },
    #[error("failed to read csv file {file}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
}

/// A rate table lookup that had to fall back to a default value.
///
/// Fallbacks never fail the estimate, they are attached to the breakdown that
/// used them so mispricing stays visible.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, JsonSchema,
)]
#[serde(tag = "kind", content = "key")]
pub enum ConfigurationGap {
    UnknownVehicleType(String),
    UnknownWeatherCode(String),
}

impl std::fmt::Display for ConfigurationGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationGap::UnknownVehicleType(key) => {
                write!(f, "no rates configured for vehicle type `{key}`")
            }
            ConfigurationGap::UnknownWeatherCode(key) => {
                write!(f, "no multiplier configured for weather code `{key}`")
            }
        }
    }
}
