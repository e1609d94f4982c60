use std::collections::BTreeSet;

use super::{fleet_utilization::FleetUtilization, route::Route, vehicle::Vehicle};

/// The read-only reference tables every optimize call works against.
#[derive(Debug, Clone, Default)]
pub struct LogisticsNetwork {
    routes: Vec<Route>,
    vehicles: Vec<Vehicle>,
}

impl LogisticsNetwork {
    pub fn new(routes: Vec<Route>, vehicles: Vec<Vehicle>) -> Self {
        LogisticsNetwork { routes, vehicles }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.vehicle_id() == vehicle_id)
    }

    /// Every location mentioned by a route endpoint or a vehicle, sorted.
    pub fn locations(&self) -> Vec<String> {
        let mut locations = BTreeSet::new();

        for route in &self.routes {
            locations.insert(route.origin().to_owned());
            locations.insert(route.destination().to_owned());
        }

        for vehicle in &self.vehicles {
            locations.insert(vehicle.current_location().to_owned());
        }

        locations.remove("");
        locations.into_iter().collect()
    }

    pub fn fleet_utilization(&self) -> FleetUtilization {
        FleetUtilization::from_vehicles(&self.vehicles)
    }
}
