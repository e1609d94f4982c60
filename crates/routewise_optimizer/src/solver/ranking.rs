use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    emissions::sustainability_report::EmissionRecord,
    problem::{vehicle_type::VehicleType, weather::WeatherCondition},
};

use super::{combination::Combination, objective::Objective};

/// A scored combination with everything a presentation layer needs to show it.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RankedOption {
    pub order_id: String,
    pub route: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub total_time_h: f64,
    pub vehicle_id: String,
    #[schemars(with = "String")]
    pub vehicle_type: VehicleType,
    pub capacity_kg: f64,
    pub fuel_efficiency_km_per_l: f64,
    pub co2_kg_per_km: f64,
    pub time_score: f64,
    pub cost_score: f64,
    pub emissions_score: f64,
    pub composite_score: f64,
    #[schemars(with = "String")]
    pub weather: WeatherCondition,
    pub traffic_delay_min: f64,
    pub toll_charge: f64,
}

impl RankedOption {
    pub fn score(&self, objective: Objective) -> f64 {
        match objective {
            Objective::Fastest => self.time_score,
            Objective::Cheapest => self.cost_score,
            Objective::Greenest => self.emissions_score,
            Objective::Balanced => self.composite_score,
        }
    }
}

impl From<&Combination<'_>> for RankedOption {
    fn from(combination: &Combination<'_>) -> Self {
        let route = combination.route;
        let vehicle = combination.vehicle;

        RankedOption {
            order_id: route.order_id().to_owned(),
            route: route.label(),
            origin: route.origin().to_owned(),
            destination: route.destination().to_owned(),
            distance_km: route.distance_km(),
            total_time_h: route.total_time_h(),
            vehicle_id: vehicle.vehicle_id().to_owned(),
            vehicle_type: vehicle.vehicle_type().clone(),
            capacity_kg: vehicle.capacity_kg(),
            fuel_efficiency_km_per_l: vehicle.fuel_efficiency_km_per_l(),
            co2_kg_per_km: vehicle.co2_kg_per_km(),
            time_score: combination.time_score,
            cost_score: combination.cost_score,
            emissions_score: combination.emissions_score,
            composite_score: combination.composite_score,
            weather: route.weather().clone(),
            traffic_delay_min: route.traffic_delay_min(),
            toll_charge: route.toll_charge(),
        }
    }
}

impl From<&RankedOption> for EmissionRecord {
    fn from(option: &RankedOption) -> Self {
        EmissionRecord {
            order_id: option.order_id.clone(),
            route: option.route.clone(),
            distance_km: option.distance_km,
            emissions_kg: option.emissions_score,
        }
    }
}

/// Top options per objective, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct RankedOptions {
    pub fastest: Vec<RankedOption>,
    pub cheapest: Vec<RankedOption>,
    pub greenest: Vec<RankedOption>,
    pub balanced: Vec<RankedOption>,
}

impl RankedOptions {
    pub fn get(&self, objective: Objective) -> &[RankedOption] {
        match objective {
            Objective::Fastest => &self.fastest,
            Objective::Cheapest => &self.cheapest,
            Objective::Greenest => &self.greenest,
            Objective::Balanced => &self.balanced,
        }
    }

    pub fn best(&self, objective: Objective) -> Option<&RankedOption> {
        self.get(objective).first()
    }

    pub fn is_empty(&self) -> bool {
        Objective::ALL
            .iter()
            .all(|&objective| self.get(objective).is_empty())
    }
}

/// The `count` combinations with the lowest score for `objective`. Ties keep
/// the order of `combinations`.
pub fn top_n(
    combinations: &[Combination],
    objective: Objective,
    count: usize,
) -> Vec<RankedOption> {
    let mut ordered: Vec<&Combination> = combinations.iter().collect();
    ordered.sort_by(|a, b| {
        objective_score(a, objective).total_cmp(&objective_score(b, objective))
    });

    ordered
        .into_iter()
        .take(count)
        .map(RankedOption::from)
        .collect()
}

/// Ranks every objective independently. At least one option per objective is
/// kept even when `top_n_per_objective` is zero.
pub fn rank_combinations(
    combinations: &[Combination],
    top_n_per_objective: usize,
) -> RankedOptions {
    let n = top_n_per_objective.max(1);

    RankedOptions {
        fastest: top_n(combinations, Objective::Fastest, n),
        cheapest: top_n(combinations, Objective::Cheapest, n),
        greenest: top_n(combinations, Objective::Greenest, n),
        balanced: top_n(combinations, Objective::Balanced, n),
    }
}

fn objective_score(combination: &Combination, objective: Objective) -> f64 {
    match objective {
        Objective::Fastest => combination.time_score,
        Objective::Cheapest => combination.cost_score,
        Objective::Greenest => combination.emissions_score,
        Objective::Balanced => combination.composite_score,
    }
}
