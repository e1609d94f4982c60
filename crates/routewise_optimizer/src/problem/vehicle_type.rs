use std::{convert::Infallible, fmt, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Key into the per-vehicle-type rate and benchmark tables.
///
/// Types the tables know nothing about are kept verbatim in `Other` so that
/// lookups can fall back to default rates and report the gap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum VehicleType {
    ExpressBike,
    SmallVan,
    MediumTruck,
    LargeTruck,
    Refrigerated,
    Other(String),
}

impl VehicleType {
    pub const KNOWN: [VehicleType; 5] = [
        VehicleType::ExpressBike,
        VehicleType::SmallVan,
        VehicleType::MediumTruck,
        VehicleType::LargeTruck,
        VehicleType::Refrigerated,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            VehicleType::ExpressBike => "Express_Bike",
            VehicleType::SmallVan => "Small_Van",
            VehicleType::MediumTruck => "Medium_Truck",
            VehicleType::LargeTruck => "Large_Truck",
            VehicleType::Refrigerated => "Refrigerated",
            VehicleType::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, VehicleType::Other(_))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vehicle_type = match s.trim() {
            "Express_Bike" => VehicleType::ExpressBike,
            "Small_Van" => VehicleType::SmallVan,
            "Medium_Truck" => VehicleType::MediumTruck,
            "Large_Truck" => VehicleType::LargeTruck,
            "Refrigerated" => VehicleType::Refrigerated,
            other => VehicleType::Other(other.to_owned()),
        };

        Ok(vehicle_type)
    }
}

impl From<&str> for VehicleType {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(vehicle_type) => vehicle_type,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_round_trip_through_display() {
        for vehicle_type in VehicleType::KNOWN {
            assert_eq!(VehicleType::from(vehicle_type.as_str()), vehicle_type);
        }
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let vehicle_type = VehicleType::from("Cargo_Drone");
        assert_eq!(vehicle_type, VehicleType::Other(String::from("Cargo_Drone")));
        assert!(!vehicle_type.is_known());
        assert_eq!(vehicle_type.to_string(), "Cargo_Drone");
    }

    #[test]
    fn test_deserialize_from_json_string() {
        let vehicle_type: VehicleType = serde_json::from_str("\"Large_Truck\"").unwrap();
        assert_eq!(vehicle_type, VehicleType::LargeTruck);
    }
}
