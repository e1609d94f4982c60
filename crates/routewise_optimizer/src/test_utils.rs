use std::sync::Arc;

use crate::{
    problem::{
        logistics_network::LogisticsNetwork,
        route::{Route, RouteBuilder},
        vehicle::{Vehicle, VehicleBuilder, VehicleStatus},
        vehicle_type::VehicleType,
        weather::WeatherCondition,
    },
    solver::{
        optimizer::RouteOptimizer, optimizer_params::OptimizerParams, ranking::RankedOption,
    },
};

pub fn create_route(order_id: &str, origin: &str, destination: &str, distance_km: f64) -> Route {
    let mut builder = RouteBuilder::default();
    builder
        .set_order_id(order_id)
        .set_endpoints(origin, destination)
        .set_distance_km(distance_km);
    builder.build()
}

pub fn create_route_with_conditions(
    order_id: &str,
    distance_km: f64,
    traffic_delay_min: f64,
    weather: WeatherCondition,
    toll_charge: f64,
) -> Route {
    let mut builder = RouteBuilder::default();
    builder
        .set_order_id(order_id)
        .set_endpoints("Mumbai", "Delhi")
        .set_distance_km(distance_km)
        .set_traffic_delay_min(traffic_delay_min)
        .set_weather(weather)
        .set_toll_charge(toll_charge);
    builder.build()
}

pub fn create_vehicle(vehicle_id: &str, location: &str, capacity_kg: f64) -> Vehicle {
    let mut builder = VehicleBuilder::default();
    builder
        .set_vehicle_id(vehicle_id)
        .set_vehicle_type(VehicleType::MediumTruck)
        .set_capacity_kg(capacity_kg)
        .set_fuel_efficiency(8.0)
        .set_co2_kg_per_km(0.35)
        .set_current_location(location)
        .set_status(VehicleStatus::Available)
        .set_quality_score(0.5);
    builder.build()
}

pub fn create_vehicle_with_status(vehicle_id: &str, status: VehicleStatus) -> Vehicle {
    let mut builder = VehicleBuilder::default();
    builder
        .set_vehicle_id(vehicle_id)
        .set_vehicle_type(VehicleType::SmallVan)
        .set_capacity_kg(1000.0)
        .set_fuel_efficiency(12.0)
        .set_co2_kg_per_km(0.25)
        .set_current_location("Mumbai")
        .set_status(status)
        .set_quality_score(0.5);
    builder.build()
}

pub struct TestVehicle<'a> {
    pub vehicle_id: &'a str,
    pub vehicle_type: VehicleType,
    pub capacity_kg: f64,
    pub fuel_efficiency: f64,
    pub co2_kg_per_km: f64,
    pub location: &'a str,
    pub status: VehicleStatus,
    pub quality_score: f64,
}

impl Default for TestVehicle<'_> {
    fn default() -> Self {
        TestVehicle {
            vehicle_id: "V001",
            vehicle_type: VehicleType::MediumTruck,
            capacity_kg: 5000.0,
            fuel_efficiency: 8.0,
            co2_kg_per_km: 0.35,
            location: "Mumbai",
            status: VehicleStatus::Available,
            quality_score: 0.5,
        }
    }
}

impl TestVehicle<'_> {
    pub fn build(self) -> Vehicle {
        let mut builder = VehicleBuilder::default();
        builder
            .set_vehicle_id(self.vehicle_id)
            .set_vehicle_type(self.vehicle_type)
            .set_capacity_kg(self.capacity_kg)
            .set_fuel_efficiency(self.fuel_efficiency)
            .set_co2_kg_per_km(self.co2_kg_per_km)
            .set_current_location(self.location)
            .set_status(self.status)
            .set_quality_score(self.quality_score);
        builder.build()
    }
}

/// Two Mumbai-Delhi routes and a mixed fleet of three assignable vehicles
/// plus one vehicle in maintenance.
pub fn create_test_network() -> LogisticsNetwork {
    let routes = vec![
        create_route("ORD001", "Mumbai", "Delhi", 1400.0),
        create_route("ORD002", "Mumbai", "Delhi", 1550.0),
        create_route("ORD003", "Delhi", "Chennai", 2200.0),
    ];

    let vehicles = vec![
        TestVehicle {
            vehicle_id: "V001",
            vehicle_type: VehicleType::LargeTruck,
            capacity_kg: 10000.0,
            fuel_efficiency: 5.0,
            co2_kg_per_km: 0.6,
            location: "Delhi",
            quality_score: 0.4,
            ..TestVehicle::default()
        }
        .build(),
        TestVehicle {
            vehicle_id: "V002",
            vehicle_type: VehicleType::SmallVan,
            capacity_kg: 1500.0,
            fuel_efficiency: 12.0,
            co2_kg_per_km: 0.22,
            location: "Mumbai",
            quality_score: 0.8,
            ..TestVehicle::default()
        }
        .build(),
        TestVehicle {
            vehicle_id: "V003",
            vehicle_type: VehicleType::MediumTruck,
            capacity_kg: 5000.0,
            fuel_efficiency: 8.0,
            co2_kg_per_km: 0.38,
            location: "Mumbai",
            status: VehicleStatus::InTransit,
            quality_score: 0.6,
        }
        .build(),
        TestVehicle {
            vehicle_id: "V004",
            vehicle_type: VehicleType::Refrigerated,
            capacity_kg: 8000.0,
            fuel_efficiency: 6.0,
            co2_kg_per_km: 0.5,
            location: "Mumbai",
            status: VehicleStatus::Maintenance,
            quality_score: 0.9,
        }
        .build(),
    ];

    LogisticsNetwork::new(routes, vehicles)
}

pub fn create_test_optimizer() -> RouteOptimizer {
    RouteOptimizer::new(Arc::new(create_test_network()), OptimizerParams::default())
}

/// A ranked option carrying only the scores the trade-off and recommendation
/// logic reads.
pub fn create_ranked_option(time: f64, cost: f64, emissions: f64, composite: f64) -> RankedOption {
    RankedOption {
        order_id: String::from("ORD001"),
        route: String::from("Mumbai-Delhi"),
        origin: String::from("Mumbai"),
        destination: String::from("Delhi"),
        distance_km: 1000.0,
        total_time_h: time,
        vehicle_id: String::from("V001"),
        vehicle_type: VehicleType::MediumTruck,
        capacity_kg: 5000.0,
        fuel_efficiency_km_per_l: 8.0,
        co2_kg_per_km: 0.35,
        time_score: time,
        cost_score: cost,
        emissions_score: emissions,
        composite_score: composite,
        weather: WeatherCondition::Clear,
        traffic_delay_min: 0.0,
        toll_charge: 0.0,
    }
}
