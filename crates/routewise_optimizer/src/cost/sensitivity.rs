use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{EstimateError, ParseError},
    utils::round::round2,
};

use super::{
    cost_breakdown::{CostContext, estimate_cost},
    cost_rates::CostRates,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityParameter {
    FuelPrice,
    LaborRate,
    MaintenanceRate,
}

impl SensitivityParameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensitivityParameter::FuelPrice => "fuel_price",
            SensitivityParameter::LaborRate => "labor_rate",
            SensitivityParameter::MaintenanceRate => "maintenance_rate",
        }
    }

    /// Copy of `rates` with this parameter multiplied by `factor`.
    fn perturb(&self, rates: &CostRates, factor: f64) -> CostRates {
        let mut perturbed = rates.clone();
        match self {
            SensitivityParameter::FuelPrice => perturbed.fuel_price_per_liter *= factor,
            SensitivityParameter::LaborRate => {
                perturbed.hourly_labor_rate = rates.hourly_labor_rate.scaled(factor)
            }
            SensitivityParameter::MaintenanceRate => {
                perturbed.maintenance_rate_per_km = rates.maintenance_rate_per_km.scaled(factor)
            }
        }
        perturbed
    }
}

impl fmt::Display for SensitivityParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensitivityParameter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fuel_price" => Ok(SensitivityParameter::FuelPrice),
            "labor_rate" | "labor_cost" => Ok(SensitivityParameter::LaborRate),
            "maintenance_rate" | "maintenance_cost" => Ok(SensitivityParameter::MaintenanceRate),
            _ => Err(ParseError::UnknownSensitivityParameter(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SensitivityAnalysis {
    pub parameter: SensitivityParameter,
    pub variation_pct: f64,
    pub baseline_cost: f64,
    pub high_scenario: f64,
    pub low_scenario: f64,
    /// Increase over the baseline in the high scenario, in percent.
    pub high_impact: f64,
    /// Decrease from the baseline in the low scenario, in percent.
    pub low_impact: f64,
}

/// Recomputes the total cost with `parameter` moved `variation_pct` percent up
/// and down, everything else held fixed. `rates` itself is never modified.
pub fn sensitivity_analysis(
    rates: &CostRates,
    context: &CostContext,
    parameter: SensitivityParameter,
    variation_pct: f64,
) -> Result<SensitivityAnalysis, EstimateError> {
    if !(variation_pct.is_finite() && (0.0..=100.0).contains(&variation_pct)) {
        return Err(EstimateError::InvalidInput {
            field: "variation_pct",
            expected: "a percentage between 0 and 100",
            value: variation_pct,
        });
    }

    let baseline = estimate_cost(rates, context)?.total_cost;

    let high_rates = parameter.perturb(rates, 1.0 + variation_pct / 100.0);
    let high = estimate_cost(&high_rates, context)?.total_cost;

    let low_rates = parameter.perturb(rates, 1.0 - variation_pct / 100.0);
    let low = estimate_cost(&low_rates, context)?.total_cost;

    Ok(SensitivityAnalysis {
        parameter,
        variation_pct,
        baseline_cost: round2(baseline),
        high_scenario: round2(high),
        low_scenario: round2(low),
        high_impact: round2((high - baseline) / baseline * 100.0),
        low_impact: round2((baseline - low) / baseline * 100.0),
    })
}
