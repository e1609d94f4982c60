use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;

use crate::problem::vehicle_type::VehicleType;

use super::emission_factors::EmissionFactors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum EfficiencyRating {
    Efficient,
    Average,
    Inefficient,
    Unknown,
}

impl EfficiencyRating {
    /// Rates a CO₂ figure against the band configured for its vehicle type.
    pub fn assess(
        vehicle_type: &VehicleType,
        co2_kg_per_km: f64,
        factors: &EmissionFactors,
    ) -> EfficiencyRating {
        let Some(band) = factors.efficiency_band(vehicle_type) else {
            return EfficiencyRating::Unknown;
        };

        if co2_kg_per_km <= band.low {
            EfficiencyRating::Efficient
        } else if co2_kg_per_km <= band.high {
            EfficiencyRating::Average
        } else {
            EfficiencyRating::Inefficient
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EfficiencyRating::Efficient => "Efficient",
            EfficiencyRating::Average => "Average",
            EfficiencyRating::Inefficient => "Inefficient",
            EfficiencyRating::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
