use schemars::JsonSchema;
use serde::Serialize;

use crate::utils::round::round_to;

use super::vehicle::{Vehicle, VehicleStatus};

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct FleetUtilization {
    pub total_vehicles: usize,
    pub available: usize,
    pub in_transit: usize,
    pub maintenance: usize,
    /// Share of the fleet currently in transit, in percent.
    pub utilization_rate: f64,
    /// Share of the fleet currently available, in percent.
    pub availability_rate: f64,
}

impl FleetUtilization {
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        let count = |status: VehicleStatus| {
            vehicles
                .iter()
                .filter(|vehicle| vehicle.status() == status)
                .count()
        };

        let total_vehicles = vehicles.len();
        let available = count(VehicleStatus::Available);
        let in_transit = count(VehicleStatus::InTransit);
        let maintenance = count(VehicleStatus::Maintenance);

        let rate = |count: usize| {
            if total_vehicles == 0 {
                0.0
            } else {
                round_to(count as f64 / total_vehicles as f64 * 100.0, 1)
            }
        };

        FleetUtilization {
            total_vehicles,
            available,
            in_transit,
            maintenance,
            utilization_rate: rate(in_transit),
            availability_rate: rate(available),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{problem::vehicle::VehicleStatus, test_utils::create_vehicle_with_status};

    use super::*;

    #[test]
    fn test_empty_fleet() {
        let utilization = FleetUtilization::from_vehicles(&[]);
        assert_eq!(utilization.total_vehicles, 0);
        assert_eq!(utilization.utilization_rate, 0.0);
        assert_eq!(utilization.availability_rate, 0.0);
    }

    #[test]
    fn test_rates() {
        let vehicles = vec![
            create_vehicle_with_status("V1", VehicleStatus::Available),
            create_vehicle_with_status("V2", VehicleStatus::InTransit),
            create_vehicle_with_status("V3", VehicleStatus::Maintenance),
        ];

        let utilization = FleetUtilization::from_vehicles(&vehicles);

        assert_eq!(utilization.available, 1);
        assert_eq!(utilization.in_transit, 1);
        assert_eq!(utilization.maintenance, 1);
        assert_eq!(utilization.utilization_rate, 33.3);
        assert_eq!(utilization.availability_rate, 33.3);
    }
}
