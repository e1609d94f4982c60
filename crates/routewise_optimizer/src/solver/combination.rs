use tracing::warn;

use crate::{
    cost::{
        cost_breakdown::{CostContext, estimate_cost},
        cost_rates::CostRates,
    },
    emissions::emission_breakdown::direct_emissions,
    error::ConfigurationGap,
    problem::{route::Route, vehicle::Vehicle},
    utils::normalize::normalize_column,
};

pub const TIME_WEIGHT: f64 = 0.33;
pub const COST_WEIGHT: f64 = 0.33;
pub const EMISSIONS_WEIGHT: f64 = 0.34;

pub fn composite_score(
    time_normalized: f64,
    cost_normalized: f64,
    emissions_normalized: f64,
) -> f64 {
    TIME_WEIGHT * time_normalized
        + COST_WEIGHT * cost_normalized
        + EMISSIONS_WEIGHT * emissions_normalized
}

/// One route paired with one vehicle, scored on every objective.
#[derive(Debug, Clone)]
pub struct Combination<'a> {
    pub route: &'a Route,
    pub vehicle: &'a Vehicle,
    /// Hours, not weighted by priority.
    pub time_score: f64,
    pub cost_score: f64,
    pub emissions_score: f64,
    pub time_normalized: f64,
    pub cost_normalized: f64,
    pub emissions_normalized: f64,
    pub composite_score: f64,
    pub configuration_gaps: Vec<ConfigurationGap>,
}

/// Every feasible route paired with every feasible vehicle, route-major.
pub fn pairings<'a>(
    routes: &'a [&'a Route],
    vehicles: &'a [&'a Vehicle],
) -> impl Iterator<Item = (&'a Route, &'a Vehicle)> + 'a {
    routes
        .iter()
        .flat_map(move |&route| vehicles.iter().map(move |&vehicle| (route, vehicle)))
}

/// Scores the cross product of `routes` and `vehicles`.
///
/// Raw scores are min-max normalized per column across the whole set, so the
/// normalized values and composite score are only comparable within one call.
/// The cost score always uses the per-km toll estimate, never the route's
/// recorded toll. Pairs the cost estimator rejects are skipped.
pub fn score_combinations<'a>(
    routes: &'a [&'a Route],
    vehicles: &'a [&'a Vehicle],
    order_weight_kg: f64,
    rates: &CostRates,
) -> Vec<Combination<'a>> {
    let mut combinations: Vec<Combination<'a>> = pairings(routes, vehicles)
        .filter_map(|(route, vehicle)| {
            let context = CostContext::new(
                route.distance_km(),
                vehicle.vehicle_type(),
                vehicle.fuel_efficiency_km_per_l(),
            )
            .with_traffic_delay(route.traffic_delay_min())
            .with_weather(route.weather())
            .with_order_weight(order_weight_kg);

            let breakdown = match estimate_cost(rates, &context) {
                Ok(breakdown) => breakdown,
                Err(error) => {
                    warn!(
                        order_id = route.order_id(),
                        vehicle_id = vehicle.vehicle_id(),
                        %error,
                        "Skipping combination that cannot be priced"
                    );
                    return None;
                }
            };

            Some(Combination {
                route,
                vehicle,
                time_score: route.total_time_h(),
                cost_score: breakdown.total_cost,
                emissions_score: direct_emissions(route.distance_km(), vehicle.co2_kg_per_km()),
                time_normalized: 0.0,
                cost_normalized: 0.0,
                emissions_normalized: 0.0,
                composite_score: 0.0,
                configuration_gaps: breakdown.configuration_gaps,
            })
        })
        .collect();

    let time = normalize_column(&column(&combinations, |c| c.time_score));
    let cost = normalize_column(&column(&combinations, |c| c.cost_score));
    let emissions = normalize_column(&column(&combinations, |c| c.emissions_score));

    for (index, combination) in combinations.iter_mut().enumerate() {
        combination.time_normalized = time[index];
        combination.cost_normalized = cost[index];
        combination.emissions_normalized = emissions[index];
        combination.composite_score = composite_score(time[index], cost[index], emissions[index]);
    }

    combinations
}

fn column(combinations: &[Combination], score: impl Fn(&Combination) -> f64) -> Vec<f64> {
    combinations.iter().map(score).collect()
}
