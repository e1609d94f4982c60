use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::problem::{logistics_network::LogisticsNetwork, priority::Priority};

pub const DEFAULT_TOP_N: usize = 3;

/// Orders above this weight probably need more than one vehicle.
pub const HEAVY_ORDER_KG: f64 = 10_000.0;

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OptimizationRequest {
    pub origin: String,
    pub destination: String,
    pub order_weight_kg: f64,
    #[serde(default)]
    pub priority: Priority,
    /// Options kept per objective.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl OptimizationRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        order_weight_kg: f64,
    ) -> Self {
        OptimizationRequest {
            origin: origin.into(),
            destination: destination.into(),
            order_weight_kg,
            priority: Priority::default(),
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Advisory checks against the network. The optimizer never refuses a
    /// request that fails them.
    pub fn validate(&self, network: &LogisticsNetwork) -> RequestValidation {
        let locations = network.locations();
        let is_known = |location: &str| {
            locations
                .iter()
                .any(|known| known.eq_ignore_ascii_case(location.trim()))
        };

        let mut validation = RequestValidation::default();

        if !is_known(&self.origin) {
            validation
                .errors
                .push(RequestIssue::UnknownOrigin(self.origin.clone()));
        }

        if !is_known(&self.destination) {
            validation
                .errors
                .push(RequestIssue::UnknownDestination(self.destination.clone()));
        }

        if self
            .origin
            .trim()
            .eq_ignore_ascii_case(self.destination.trim())
        {
            validation.errors.push(RequestIssue::SameEndpoints);
        }

        if !self.order_weight_kg.is_finite() || self.order_weight_kg <= 0.0 {
            validation
                .errors
                .push(RequestIssue::NonPositiveWeight(self.order_weight_kg));
        } else if self.order_weight_kg > HEAVY_ORDER_KG {
            validation
                .warnings
                .push(RequestIssue::HeavyOrder(self.order_weight_kg));
        }

        validation
    }
}

#[derive(Error, Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub enum RequestIssue {
    #[error("unknown origin `{0}`")]
    UnknownOrigin(String),
    #[error("unknown destination `{0}`")]
    UnknownDestination(String),
    #[error("origin and destination cannot be the same")]
    SameEndpoints,
    #[error("order weight must be positive, got {0} kg")]
    NonPositiveWeight(f64),
    #[error("large order weight ({0} kg) may require multiple vehicles")]
    HeavyOrder(f64),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct RequestValidation {
    pub errors: Vec<RequestIssue>,
    pub warnings: Vec<RequestIssue>,
}

impl RequestValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
