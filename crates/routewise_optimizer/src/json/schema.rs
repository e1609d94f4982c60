use schemars::schema_for;

use crate::solver::{
    optimizer_params::OptimizerParams, outcome::OptimizationOutcome,
    request::OptimizationRequest,
};

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(OptimizationOutcome))
}

pub fn generate_request_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(OptimizationRequest))
}

pub fn generate_params_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(OptimizerParams))
}
