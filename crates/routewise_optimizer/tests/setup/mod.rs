#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use routewise_optimizer::{
    parsers::{csv_network::CsvNetworkParser, parser::NetworkParser},
    problem::{
        logistics_network::LogisticsNetwork,
        route::{Route, RouteBuilder},
        vehicle::{Vehicle, VehicleBuilder, VehicleStatus},
        vehicle_type::VehicleType,
    },
    solver::{optimizer::RouteOptimizer, optimizer_params::OptimizerParams},
};

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/network")
}

pub fn load_test_network() -> LogisticsNetwork {
    CsvNetworkParser::default()
        .parse(fixtures_dir())
        .expect("fixture network should load")
}

pub fn create_test_optimizer() -> RouteOptimizer {
    RouteOptimizer::new(Arc::new(load_test_network()), OptimizerParams::default())
}

pub fn create_route(order_id: &str, origin: &str, destination: &str, distance_km: f64) -> Route {
    let mut builder = RouteBuilder::default();
    builder
        .set_order_id(order_id)
        .set_endpoints(origin, destination)
        .set_distance_km(distance_km);
    builder.build()
}

pub fn create_vehicle(vehicle_id: &str, status: VehicleStatus) -> Vehicle {
    let mut builder = VehicleBuilder::default();
    builder
        .set_vehicle_id(vehicle_id)
        .set_vehicle_type(VehicleType::MediumTruck)
        .set_capacity_kg(5000.0)
        .set_fuel_efficiency(8.0)
        .set_co2_kg_per_km(0.35)
        .set_current_location("Mumbai")
        .set_status(status)
        .set_quality_score(0.5);
    builder.build()
}
