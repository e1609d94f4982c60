use std::{hint::black_box, sync::Arc};

use criterion::{Criterion, criterion_group, criterion_main};
use routewise_optimizer::{
    cost::{
        cost_breakdown::{CostContext, estimate_cost},
        cost_rates::CostRates,
    },
    problem::{
        logistics_network::LogisticsNetwork,
        route::RouteBuilder,
        vehicle::{VehicleBuilder, VehicleStatus},
        vehicle_type::VehicleType,
        weather::WeatherCondition,
    },
    solver::{
        optimizer::RouteOptimizer, optimizer_params::OptimizerParams,
        request::OptimizationRequest,
    },
};

const CITIES: [&str; 6] = ["Mumbai", "Delhi", "Chennai", "Kolkata", "Pune", "Bangalore"];

/// Every ordered city pair served by `routes_per_pair` routes, and a fleet of
/// `vehicles` spread over the cities.
fn create_network(routes_per_pair: usize, vehicles: usize) -> LogisticsNetwork {
    let weathers = [
        WeatherCondition::Clear,
        WeatherCondition::LightRain,
        WeatherCondition::HeavyRain,
        WeatherCondition::Fog,
    ];

    let mut routes = Vec::new();
    for (i, origin) in CITIES.iter().enumerate() {
        for (j, destination) in CITIES.iter().enumerate() {
            if i == j {
                continue;
            }

            for k in 0..routes_per_pair {
                let mut builder = RouteBuilder::default();
                builder
                    .set_order_id(format!("ORD{i}{j}{k:03}"))
                    .set_endpoints(*origin, *destination)
                    .set_distance_km(300.0 + (i * 131 + j * 71 + k * 17) as f64 % 1800.0)
                    .set_traffic_delay_min((k * 7 % 90) as f64)
                    .set_weather(weathers[k % weathers.len()].clone())
                    .set_toll_charge((k * 113 % 1500) as f64);
                routes.push(builder.build());
            }
        }
    }

    let fleet = (0..vehicles)
        .map(|index| {
            let vehicle_type = VehicleType::KNOWN[index % VehicleType::KNOWN.len()].clone();
            let mut builder = VehicleBuilder::default();
            builder
                .set_vehicle_id(format!("V{index:04}"))
                .set_vehicle_type(vehicle_type)
                .set_capacity_kg(500.0 + (index * 937 % 15000) as f64)
                .set_fuel_efficiency(4.0 + (index % 30) as f64)
                .set_co2_kg_per_km(0.05 + (index % 12) as f64 * 0.05)
                .set_current_location(CITIES[index % CITIES.len()])
                .set_status(if index % 5 == 0 {
                    VehicleStatus::InTransit
                } else {
                    VehicleStatus::Available
                })
                .set_quality_score((index % 10) as f64 / 10.0);
            builder.build()
        })
        .collect();

    LogisticsNetwork::new(routes, fleet)
}

fn cost_benchmark(c: &mut Criterion) {
    let rates = CostRates::default();
    let weather = WeatherCondition::LightRain;
    let context = CostContext::new(500.0, &VehicleType::LargeTruck, 6.0)
        .with_traffic_delay(30.0)
        .with_weather(&weather)
        .with_order_weight(2000.0)
        .with_toll_charge(400.0);

    c.bench_function("estimate_cost", |b| {
        b.iter(|| estimate_cost(black_box(&rates), black_box(&context)))
    });
}

fn optimize_benchmark(c: &mut Criterion) {
    let optimizer = RouteOptimizer::new(
        Arc::new(create_network(20, 200)),
        OptimizerParams::default(),
    );
    let request = OptimizationRequest::new("Mumbai", "Delhi", 750.0);

    c.bench_function("optimize_route (20 routes x 200 vehicles)", |b| {
        b.iter(|| optimizer.optimize_route(black_box(&request)))
    });

    let requests: Vec<OptimizationRequest> = CITIES
        .iter()
        .flat_map(|origin| {
            CITIES
                .iter()
                .filter(move |destination| *destination != origin)
                .map(move |destination| OptimizationRequest::new(*origin, *destination, 750.0))
        })
        .collect();

    c.bench_function("optimize_batch (30 requests)", |b| {
        b.iter(|| optimizer.optimize_batch(black_box(&requests)))
    });
}

criterion_group!(benches, cost_benchmark, optimize_benchmark);
criterion_main!(benches);
