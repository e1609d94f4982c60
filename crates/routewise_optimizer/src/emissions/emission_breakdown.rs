use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    error::{EstimateError, ensure_non_negative, ensure_positive},
    utils::round::{round2, round_to},
};

use super::emission_factors::EmissionFactors;

/// Distance based estimate: kg CO₂ from the vehicle's rated emissions per km.
pub fn direct_emissions(distance_km: f64, co2_kg_per_km: f64) -> f64 {
    round2(distance_km * co2_kg_per_km)
}

/// Fuel based estimate: kg CO₂ from the litres the trip burns.
pub fn fuel_based_emissions(
    distance_km: f64,
    fuel_efficiency_km_per_l: f64,
    factors: &EmissionFactors,
) -> f64 {
    round2(distance_km / fuel_efficiency_km_per_l * factors.co2_per_liter)
}

/// Reconciles the two independent estimates into one figure.
pub fn combine(direct_kg: f64, fuel_based_kg: f64) -> f64 {
    (direct_kg + fuel_based_kg) / 2.0
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct EmissionBreakdown {
    pub direct_emissions_kg: f64,
    pub fuel_based_emissions_kg: f64,
    pub total_emissions_kg: f64,
    pub emissions_per_km: f64,
    pub fuel_consumed_liters: f64,
}

pub fn estimate_emissions(
    distance_km: f64,
    co2_kg_per_km: f64,
    fuel_efficiency_km_per_l: f64,
    factors: &EmissionFactors,
) -> Result<EmissionBreakdown, EstimateError> {
    ensure_positive("distance_km", distance_km)?;
    ensure_non_negative("co2_kg_per_km", co2_kg_per_km)?;
    ensure_positive("fuel_efficiency_km_per_l", fuel_efficiency_km_per_l)?;

    let direct = direct_emissions(distance_km, co2_kg_per_km);
    let fuel_based = fuel_based_emissions(distance_km, fuel_efficiency_km_per_l, factors);
    let total = combine(direct, fuel_based);

    Ok(EmissionBreakdown {
        direct_emissions_kg: direct,
        fuel_based_emissions_kg: fuel_based,
        total_emissions_kg: round2(total),
        emissions_per_km: round_to(total / distance_km, 4),
        fuel_consumed_liters: round2(distance_km / fuel_efficiency_km_per_l),
    })
}
