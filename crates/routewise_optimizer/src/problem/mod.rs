pub mod fleet_utilization;
pub mod logistics_network;
pub mod priority;
pub mod route;
pub mod vehicle;
pub mod vehicle_type;
pub mod weather;
