use schemars::JsonSchema;
use serde::Serialize;

use crate::error::ConfigurationGap;

use super::{
    ranking::{RankedOption, RankedOptions},
    recommendation::{RecommendedOption, Recommendations},
    trade_off::TradeOffAnalysis,
};

static NO_RANKED_OPTIONS: RankedOptions = RankedOptions {
    fastest: Vec::new(),
    cheapest: Vec::new(),
    greenest: Vec::new(),
    balanced: Vec::new(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum FailureKind {
    NoRoutesFound,
    NoVehiclesAvailable,
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct OptimizationResult {
    pub ranked_options: RankedOptions,
    pub trade_off_analysis: TradeOffAnalysis,
    pub recommendations: Recommendations,
    pub total_combinations_evaluated: usize,
    /// Rate table fallbacks hit while pricing, deduplicated and sorted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub configuration_gaps: Vec<ConfigurationGap>,
}

impl OptimizationResult {
    /// Top option of the objective the primary recommendation points at.
    pub fn primary_option(&self) -> Option<&RankedOption> {
        let objective = self.recommendations.primary.option.objective()?;
        self.ranked_options.best(objective)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct OptimizationFailure {
    pub error_kind: FailureKind,
    pub message: String,
    pub recommendations: Recommendations,
}

impl OptimizationFailure {
    pub fn no_routes(origin: &str, destination: &str) -> Self {
        OptimizationFailure {
            error_kind: FailureKind::NoRoutesFound,
            message: format!("No routes available for {origin} to {destination}"),
            recommendations: Recommendations::fallback(
                RecommendedOption::None,
                "Route not in current network. Consider external logistics partner.",
            ),
        }
    }

    pub fn no_vehicles(order_weight_kg: f64) -> Self {
        OptimizationFailure {
            error_kind: FailureKind::NoVehiclesAvailable,
            message: format!(
                "No vehicles with sufficient capacity ({order_weight_kg} kg) are currently available"
            ),
            recommendations: Recommendations::fallback(
                RecommendedOption::Wait,
                "Wait for vehicle availability or split shipment",
            ),
        }
    }

    pub fn invalid_input(message: String) -> Self {
        OptimizationFailure {
            error_kind: FailureKind::InvalidInput,
            message,
            recommendations: Recommendations::fallback(
                RecommendedOption::None,
                "Correct the request and try again",
            ),
        }
    }
}

/// Either a full set of ranked options or a structured explanation of why
/// there are none. Optimizing never returns an error.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OptimizationOutcome {
    Success(OptimizationResult),
    Failure(OptimizationFailure),
}

impl OptimizationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, OptimizationOutcome::Success(_))
    }

    pub fn result(&self) -> Option<&OptimizationResult> {
        match self {
            OptimizationOutcome::Success(result) => Some(result),
            OptimizationOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&OptimizationFailure> {
        match self {
            OptimizationOutcome::Success(_) => None,
            OptimizationOutcome::Failure(failure) => Some(failure),
        }
    }

    pub fn error_kind(&self) -> Option<FailureKind> {
        self.failure().map(|failure| failure.error_kind)
    }

    /// Empty for failures.
    pub fn ranked_options(&self) -> &RankedOptions {
        match self {
            OptimizationOutcome::Success(result) => &result.ranked_options,
            OptimizationOutcome::Failure(_) => &NO_RANKED_OPTIONS,
        }
    }

    pub fn recommendations(&self) -> &Recommendations {
        match self {
            OptimizationOutcome::Success(result) => &result.recommendations,
            OptimizationOutcome::Failure(failure) => &failure.recommendations,
        }
    }
}
