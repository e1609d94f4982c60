use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    cost::cost_breakdown::{CostBreakdown, CostContext, estimate_cost},
    emissions::{
        carbon_offset::CarbonOffset,
        emission_breakdown::{EmissionBreakdown, estimate_emissions},
        vehicle_efficiency::EfficiencyRating,
    },
    error::EstimateError,
};

use super::{optimizer_params::OptimizerParams, ranking::RankedOption};

/// Full cost and emission detail behind one ranked option.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct OptionAnalysis {
    pub vehicle_id: String,
    pub route: String,
    pub cost: CostBreakdown,
    pub cost_per_km: Option<f64>,
    pub emissions: EmissionBreakdown,
    pub carbon_offset: CarbonOffset,
    pub efficiency: EfficiencyRating,
}

impl OptionAnalysis {
    pub fn analyze(
        option: &RankedOption,
        order_weight_kg: f64,
        params: &OptimizerParams,
    ) -> Result<OptionAnalysis, EstimateError> {
        let context = CostContext::new(
            option.distance_km,
            &option.vehicle_type,
            option.fuel_efficiency_km_per_l,
        )
        .with_traffic_delay(option.traffic_delay_min)
        .with_weather(&option.weather)
        .with_order_weight(order_weight_kg)
        .with_toll_charge(option.toll_charge);

        let cost = estimate_cost(&params.cost_rates, &context)?;
        let emissions = estimate_emissions(
            option.distance_km,
            option.co2_kg_per_km,
            option.fuel_efficiency_km_per_l,
            &params.emission_factors,
        )?;

        Ok(OptionAnalysis {
            vehicle_id: option.vehicle_id.clone(),
            route: option.route.clone(),
            cost_per_km: cost.cost_per_km(option.distance_km),
            carbon_offset: CarbonOffset::for_emissions(
                emissions.total_emissions_kg,
                &params.emission_factors,
            ),
            efficiency: EfficiencyRating::assess(
                &option.vehicle_type,
                option.co2_kg_per_km,
                &params.emission_factors,
            ),
            cost,
            emissions,
        })
    }
}
