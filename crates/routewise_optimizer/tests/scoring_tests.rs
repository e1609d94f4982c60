use routewise_optimizer::{
    cost::{
        cost_breakdown::{CostContext, estimate_cost},
        cost_rates::CostRates,
    },
    problem::{vehicle_type::VehicleType, weather::WeatherCondition},
    solver::{
        combination::{Combination, composite_score, score_combinations},
        feasibility::{filter_routes, filter_vehicles},
        objective::Objective,
        request::OptimizationRequest,
    },
};

use crate::setup::{create_test_optimizer, load_test_network};

mod setup;

const EPSILON: f64 = 1e-9;

#[test]
fn test_normalized_scores_span_unit_interval() {
    let network = load_test_network();
    let routes = filter_routes(network.routes(), "Mumbai", "Delhi");
    let vehicles = filter_vehicles(network.vehicles(), "Mumbai", 500.0);

    let combinations = score_combinations(&routes, &vehicles, 500.0, &CostRates::default());
    assert_eq!(combinations.len(), 8);

    let columns: [fn(&Combination) -> f64; 3] = [
        |combination| combination.time_normalized,
        |combination| combination.cost_normalized,
        |combination| combination.emissions_normalized,
    ];

    for column in columns {
        let values: Vec<f64> = combinations.iter().map(|c| column(c)).collect();
        assert!(values.iter().all(|value| (0.0..=1.0).contains(value)));

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(min.abs() < EPSILON);
        assert!((max - 1.0).abs() < EPSILON);
    }
}

#[test]
fn test_constant_column_normalizes_to_half() {
    let network = load_test_network();
    let routes = filter_routes(network.routes(), "Pune", "Hyderabad");
    let vehicles = filter_vehicles(network.vehicles(), "Pune", 40.0);

    let combinations = score_combinations(&routes, &vehicles, 40.0, &CostRates::default());

    assert_eq!(combinations.len(), 5);
    assert!(
        combinations
            .iter()
            .all(|combination| combination.time_normalized == 0.5)
    );
}

#[test]
fn test_composite_is_weighted_sum() {
    let network = load_test_network();
    let routes = filter_routes(network.routes(), "Mumbai", "Delhi");
    let vehicles = filter_vehicles(network.vehicles(), "Mumbai", 500.0);

    for combination in score_combinations(&routes, &vehicles, 500.0, &CostRates::default()) {
        let expected = 0.33 * combination.time_normalized
            + 0.33 * combination.cost_normalized
            + 0.34 * combination.emissions_normalized;
        assert!((combination.composite_score - expected).abs() < EPSILON);
        assert!(
            (composite_score(
                combination.time_normalized,
                combination.cost_normalized,
                combination.emissions_normalized
            ) - expected)
                .abs()
                < EPSILON
        );
    }
}

#[test]
fn test_rankings_are_sorted_and_bounded() {
    let optimizer = create_test_optimizer();

    for top_n in [1, 3, 20] {
        let request = OptimizationRequest::new("Mumbai", "Delhi", 500.0).with_top_n(top_n);
        let outcome = optimizer.optimize_route(&request);
        let ranked = outcome.ranked_options();

        for objective in Objective::ALL {
            let options = ranked.get(objective);
            assert_eq!(options.len(), top_n.min(8));
            assert!(
                options
                    .windows(2)
                    .all(|pair| pair[0].score(objective) <= pair[1].score(objective))
            );
        }
    }
}

#[test]
fn test_zero_top_n_keeps_one_option() {
    let optimizer = create_test_optimizer();
    let request = OptimizationRequest::new("Mumbai", "Delhi", 500.0).with_top_n(0);

    let outcome = optimizer.optimize_route(&request);

    for objective in Objective::ALL {
        assert_eq!(outcome.ranked_options().get(objective).len(), 1);
    }
}

#[test]
fn test_reference_cost_breakdown() {
    let weather = WeatherCondition::LightRain;
    let context = CostContext::new(500.0, &VehicleType::LargeTruck, 6.0)
        .with_traffic_delay(30.0)
        .with_weather(&weather)
        .with_order_weight(2000.0)
        .with_toll_charge(400.0);

    let breakdown = estimate_cost(&CostRates::default(), &context).unwrap();

    assert!((breakdown.subtotal - 15415.0).abs() < EPSILON);
    assert!((breakdown.total_cost - 16648.2).abs() < 1e-6);
}

#[test]
fn test_ranked_costs_are_consistent_to_the_penny() {
    let network = load_test_network();
    let rates = CostRates::default();

    for route in network.routes() {
        for vehicle in network.vehicles() {
            let context = CostContext::new(
                route.distance_km(),
                vehicle.vehicle_type(),
                vehicle.fuel_efficiency_km_per_l(),
            )
            .with_traffic_delay(route.traffic_delay_min())
            .with_weather(route.weather())
            .with_order_weight(250.0)
            .with_toll_charge(route.toll_charge());

            let breakdown = estimate_cost(&rates, &context).unwrap();
            let components = breakdown.fuel_cost
                + breakdown.labor_cost
                + breakdown.maintenance_cost
                + breakdown.toll_charges
                + breakdown.insurance_cost
                + breakdown.packaging_cost;

            assert!((breakdown.subtotal - components).abs() < 0.005);
            assert!(
                (breakdown.total_cost
                    - (breakdown.subtotal + breakdown.platform_fee + breakdown.overhead))
                    .abs()
                    < 0.005
            );
        }
    }
}
