use tracing::{debug, warn};

use crate::problem::{route::Route, vehicle::Vehicle};

fn is_priceable(route: &Route) -> bool {
    let distance = route.distance_km();
    let delay = route.traffic_delay_min();
    let toll = route.toll_charge();

    distance.is_finite()
        && distance > 0.0
        && delay.is_finite()
        && delay >= 0.0
        && toll.is_finite()
        && toll >= 0.0
}

/// Routes whose endpoints match `origin` and `destination`, ignoring case.
///
/// Matching routes that cannot be priced (non-positive distance, negative
/// delay or toll) are dropped with a warning.
pub fn filter_routes<'a>(routes: &'a [Route], origin: &str, destination: &str) -> Vec<&'a Route> {
    let feasible: Vec<&Route> = routes
        .iter()
        .filter(|route| route.connects(origin, destination))
        .filter(|route| {
            let priceable = is_priceable(route);
            if !priceable {
                warn!(
                    order_id = route.order_id(),
                    distance_km = route.distance_km(),
                    "Skipping route with invalid distance, delay or toll"
                );
            }
            priceable
        })
        .collect();

    debug!(origin, destination, routes = feasible.len(), "Filtered routes");
    feasible
}

/// Vehicles able to carry `order_weight_kg` that are not in maintenance.
///
/// Vehicles already at `origin` come first, then higher quality scores. The
/// sort is stable so equal vehicles keep their table order.
pub fn filter_vehicles<'a>(
    vehicles: &'a [Vehicle],
    origin: &str,
    order_weight_kg: f64,
) -> Vec<&'a Vehicle> {
    let mut feasible: Vec<&Vehicle> = vehicles
        .iter()
        .filter(|vehicle| vehicle.can_carry(order_weight_kg) && vehicle.status().is_assignable())
        .filter(|vehicle| {
            let efficiency = vehicle.fuel_efficiency_km_per_l();
            let valid = efficiency.is_finite() && efficiency > 0.0;
            if !valid {
                warn!(
                    vehicle_id = vehicle.vehicle_id(),
                    fuel_efficiency = efficiency,
                    "Skipping vehicle with non-positive fuel efficiency"
                );
            }
            valid
        })
        .collect();

    feasible.sort_by(|a, b| {
        b.is_located_at(origin)
            .cmp(&a.is_located_at(origin))
            .then_with(|| b.quality_score().total_cmp(&a.quality_score()))
    });

    debug!(origin, order_weight_kg, vehicles = feasible.len(), "Filtered vehicles");
    feasible
}
