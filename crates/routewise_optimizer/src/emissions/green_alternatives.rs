use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    problem::{vehicle::Vehicle, vehicle_type::VehicleType},
    utils::round::round2,
};

use super::emission_breakdown::direct_emissions;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct GreenAlternative {
    pub vehicle_id: String,
    #[schemars(with = "String")]
    pub vehicle_type: VehicleType,
    pub emissions_kg: f64,
    pub emission_savings_kg: f64,
    pub emission_savings_pct: f64,
}

/// Vehicles that would emit strictly less than `current_emissions_kg` over
/// `distance_km`, largest saving first.
pub fn green_alternatives<'a>(
    distance_km: f64,
    current_emissions_kg: f64,
    candidates: impl IntoIterator<Item = &'a Vehicle>,
) -> Vec<GreenAlternative> {
    if current_emissions_kg <= 0.0 {
        return Vec::new();
    }

    let mut alternatives: Vec<GreenAlternative> = candidates
        .into_iter()
        .filter_map(|vehicle| {
            let emissions_kg = direct_emissions(distance_km, vehicle.co2_kg_per_km());
            let savings = current_emissions_kg - emissions_kg;

            (savings > 0.0).then(|| GreenAlternative {
                vehicle_id: vehicle.vehicle_id().to_owned(),
                vehicle_type: vehicle.vehicle_type().clone(),
                emissions_kg,
                emission_savings_kg: round2(savings),
                emission_savings_pct: round2(savings / current_emissions_kg * 100.0),
            })
        })
        .collect();

    alternatives.sort_by(|a, b| b.emission_savings_kg.total_cmp(&a.emission_savings_kg));
    alternatives
}
