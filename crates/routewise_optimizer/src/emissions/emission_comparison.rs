use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    cost::cost_comparison::ComparedOption,
    utils::round::{round2, round_to},
};

use super::emission_factors::EmissionFactors;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct EmissionComparison {
    /// `a - b` in kg CO₂.
    pub emission_difference_kg: f64,
    /// Difference relative to `b`, in percent. Zero when `b` emits nothing.
    pub percentage_difference: f64,
    pub greener_option: Option<ComparedOption>,
    /// Kilometres an average car would drive to emit the difference.
    pub car_equivalent_km: f64,
    pub interpretation: String,
}

pub fn compare_emissions(
    option_a_kg: f64,
    option_b_kg: f64,
    factors: &EmissionFactors,
) -> EmissionComparison {
    let difference = option_a_kg - option_b_kg;
    let percentage_difference = if option_b_kg > 0.0 {
        difference / option_b_kg * 100.0
    } else {
        0.0
    };
    let car_equivalent_km = if factors.car_co2_per_km > 0.0 {
        difference / factors.car_co2_per_km
    } else {
        0.0
    };

    let interpretation = format!(
        "Choosing the greener option saves {:.1} kg CO₂ (equivalent to {:.0} km of car travel)",
        difference.abs(),
        car_equivalent_km.abs()
    );

    EmissionComparison {
        emission_difference_kg: round2(difference),
        percentage_difference: round2(percentage_difference),
        greener_option: ComparedOption::lower_of(difference),
        car_equivalent_km: round_to(car_equivalent_km, 1),
        interpretation,
    }
}
