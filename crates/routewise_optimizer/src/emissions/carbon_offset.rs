use schemars::JsonSchema;
use serde::Serialize;

use crate::utils::round::{round2, round_to};

use super::emission_factors::EmissionFactors;

/// Price of buying carbon credits for an amount of emissions.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CarbonOffset {
    pub emissions_tons: f64,
    pub offset_cost_usd: f64,
    pub offset_cost_local: f64,
}

impl CarbonOffset {
    pub fn for_emissions(emissions_kg: f64, factors: &EmissionFactors) -> Self {
        let emissions_tons = emissions_kg / 1000.0;
        let cost_usd = emissions_tons * factors.offset_price_usd_per_ton;

        CarbonOffset {
            emissions_tons: round_to(emissions_tons, 3),
            offset_cost_usd: round2(cost_usd),
            offset_cost_local: round2(cost_usd * factors.usd_exchange_rate),
        }
    }
}
