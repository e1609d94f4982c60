use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{vehicle_type::VehicleType, weather::WeatherCondition};

/// A keyed rate table with a documented fallback for missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RateTable {
    pub rates: FxHashMap<String, f64>,
    pub fallback: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLookup {
    pub value: f64,
    pub fallback: bool,
}

impl RateTable {
    pub fn new<K: Into<String>>(rates: impl IntoIterator<Item = (K, f64)>, fallback: f64) -> Self {
        RateTable {
            rates: rates.into_iter().map(|(key, rate)| (key.into(), rate)).collect(),
            fallback,
        }
    }

    pub fn lookup(&self, key: &str) -> RateLookup {
        match self.rates.get(key) {
            Some(&value) => RateLookup {
                value,
                fallback: false,
            },
            None => RateLookup {
                value: self.fallback,
                fallback: true,
            },
        }
    }

    /// Returns a copy with every rate, fallback included, multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> RateTable {
        RateTable {
            rates: self
                .rates
                .iter()
                .map(|(key, rate)| (key.clone(), rate * factor))
                .collect(),
            fallback: self.fallback * factor,
        }
    }
}

/// Immutable pricing configuration handed to every cost estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CostRates {
    pub fuel_price_per_liter: f64,
    pub hourly_labor_rate: RateTable,
    pub maintenance_rate_per_km: RateTable,
    pub weather_cost_multiplier: RateTable,
    pub toll_estimate_per_km: f64,
    pub insurance_per_trip: f64,
    pub packaging_base_cost: f64,
    pub packaging_cost_per_kg: f64,
    /// Percent of the subtotal.
    pub platform_fee_pct: f64,
    /// Percent of the subtotal.
    pub overhead_pct: f64,
    pub currency: String,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            fuel_price_per_liter: 102.0,
            hourly_labor_rate: RateTable::new(
                [
                    ("Express_Bike", 150.0),
                    ("Small_Van", 200.0),
                    ("Medium_Truck", 250.0),
                    ("Large_Truck", 300.0),
                    ("Refrigerated", 350.0),
                ],
                250.0,
            ),
            maintenance_rate_per_km: RateTable::new(
                [
                    ("Express_Bike", 2.0),
                    ("Small_Van", 3.5),
                    ("Medium_Truck", 5.0),
                    ("Large_Truck", 7.0),
                    ("Refrigerated", 8.0),
                ],
                5.0,
            ),
            weather_cost_multiplier: RateTable::new(
                [
                    ("None", 1.0),
                    ("Light_Rain", 1.1),
                    ("Heavy_Rain", 1.25),
                    ("Fog", 1.15),
                ],
                1.0,
            ),
            toll_estimate_per_km: 0.80,
            insurance_per_trip: 50.0,
            packaging_base_cost: 30.0,
            packaging_cost_per_kg: 0.01,
            platform_fee_pct: 3.0,
            overhead_pct: 5.0,
            currency: String::from("INR"),
        }
    }
}

impl CostRates {
    pub fn hourly_rate(&self, vehicle_type: &VehicleType) -> RateLookup {
        self.hourly_labor_rate.lookup(vehicle_type.as_str())
    }

    pub fn maintenance_rate(&self, vehicle_type: &VehicleType) -> RateLookup {
        self.maintenance_rate_per_km.lookup(vehicle_type.as_str())
    }

    pub fn weather_multiplier(&self, weather: &WeatherCondition) -> RateLookup {
        self.weather_cost_multiplier.lookup(weather.as_str())
    }
}
