use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::vehicle_type::VehicleType;

/// Expected CO₂ rate range for a vehicle type, in kg per km.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmissionBand {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EmissionFactors {
    /// kg CO₂ released per litre of diesel burnt.
    pub co2_per_liter: f64,
    /// kg CO₂ per km of an average passenger car.
    pub car_co2_per_km: f64,
    pub offset_price_usd_per_ton: f64,
    /// Local currency units per USD.
    pub usd_exchange_rate: f64,
    pub efficiency_bands: FxHashMap<String, EmissionBand>,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        let efficiency_bands = [
            ("Express_Bike", 0.05, 0.12),
            ("Small_Van", 0.20, 0.35),
            ("Medium_Truck", 0.30, 0.45),
            ("Large_Truck", 0.40, 0.65),
            ("Refrigerated", 0.45, 0.60),
        ]
        .into_iter()
        .map(|(vehicle_type, low, high)| (vehicle_type.to_owned(), EmissionBand { low, high }))
        .collect();

        Self {
            co2_per_liter: 2.68,
            car_co2_per_km: 0.15,
            offset_price_usd_per_ton: 15.0,
            usd_exchange_rate: 83.0,
            efficiency_bands,
        }
    }
}

impl EmissionFactors {
    pub fn efficiency_band(&self, vehicle_type: &VehicleType) -> Option<EmissionBand> {
        self.efficiency_bands.get(vehicle_type.as_str()).copied()
    }
}
