use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

use super::vehicle_type::VehicleType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum VehicleStatus {
    Available,
    #[serde(rename = "In_Transit")]
    InTransit,
    Maintenance,
}

impl VehicleStatus {
    /// Maintenance vehicles can never be assigned.
    pub fn is_assignable(&self) -> bool {
        matches!(self, VehicleStatus::Available | VehicleStatus::InTransit)
    }

    pub fn availability_score(&self) -> f64 {
        match self {
            VehicleStatus::Available => 1.0,
            VehicleStatus::InTransit => 0.3,
            VehicleStatus::Maintenance => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::InTransit => "In_Transit",
            VehicleStatus::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Available" => Ok(VehicleStatus::Available),
            "In_Transit" => Ok(VehicleStatus::InTransit),
            "Maintenance" => Ok(VehicleStatus::Maintenance),
            other => Err(ParseError::UnknownVehicleStatus(other.to_owned())),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Vehicle {
    vehicle_id: String,
    vehicle_type: VehicleType,
    capacity_kg: f64,
    fuel_efficiency_km_per_l: f64,
    co2_kg_per_km: f64,
    current_location: String,
    status: VehicleStatus,
    age_years: f64,
    availability_score: f64,
    quality_score: f64,
}

impl Vehicle {
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn vehicle_type(&self) -> &VehicleType {
        &self.vehicle_type
    }

    pub fn capacity_kg(&self) -> f64 {
        self.capacity_kg
    }

    pub fn fuel_efficiency_km_per_l(&self) -> f64 {
        self.fuel_efficiency_km_per_l
    }

    pub fn co2_kg_per_km(&self) -> f64 {
        self.co2_kg_per_km
    }

    pub fn current_location(&self) -> &str {
        &self.current_location
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    pub fn age_years(&self) -> f64 {
        self.age_years
    }

    pub fn availability_score(&self) -> f64 {
        self.availability_score
    }

    pub fn quality_score(&self) -> f64 {
        self.quality_score
    }

    pub fn can_carry(&self, weight_kg: f64) -> bool {
        self.capacity_kg >= weight_kg
    }

    pub fn is_located_at(&self, location: &str) -> bool {
        self.current_location.to_lowercase() == location.to_lowercase()
    }
}

#[derive(Default)]
pub struct VehicleBuilder {
    vehicle_id: Option<String>,
    vehicle_type: Option<VehicleType>,
    capacity_kg: Option<f64>,
    fuel_efficiency_km_per_l: Option<f64>,
    co2_kg_per_km: Option<f64>,
    current_location: Option<String>,
    status: Option<VehicleStatus>,
    age_years: Option<f64>,
    quality_score: Option<f64>,
}

impl VehicleBuilder {
    pub fn set_vehicle_id(&mut self, vehicle_id: impl Into<String>) -> &mut VehicleBuilder {
        self.vehicle_id = Some(vehicle_id.into());
        self
    }

    pub fn set_vehicle_type(&mut self, vehicle_type: VehicleType) -> &mut VehicleBuilder {
        self.vehicle_type = Some(vehicle_type);
        self
    }

    pub fn set_capacity_kg(&mut self, capacity_kg: f64) -> &mut VehicleBuilder {
        self.capacity_kg = Some(capacity_kg);
        self
    }

    pub fn set_fuel_efficiency(&mut self, km_per_l: f64) -> &mut VehicleBuilder {
        self.fuel_efficiency_km_per_l = Some(km_per_l);
        self
    }

    pub fn set_co2_kg_per_km(&mut self, co2_kg_per_km: f64) -> &mut VehicleBuilder {
        self.co2_kg_per_km = Some(co2_kg_per_km);
        self
    }

    pub fn set_current_location(&mut self, location: impl Into<String>) -> &mut VehicleBuilder {
        self.current_location = Some(location.into());
        self
    }

    pub fn set_status(&mut self, status: VehicleStatus) -> &mut VehicleBuilder {
        self.status = Some(status);
        self
    }

    pub fn set_age_years(&mut self, age_years: f64) -> &mut VehicleBuilder {
        self.age_years = Some(age_years);
        self
    }

    pub fn set_quality_score(&mut self, quality_score: f64) -> &mut VehicleBuilder {
        self.quality_score = Some(quality_score);
        self
    }

    pub fn build(self) -> Vehicle {
        let status = self.status.unwrap_or(VehicleStatus::Available);

        Vehicle {
            vehicle_id: self.vehicle_id.unwrap_or_default(),
            vehicle_type: self
                .vehicle_type
                .unwrap_or(VehicleType::Other(String::new())),
            capacity_kg: self.capacity_kg.unwrap_or(0.0),
            fuel_efficiency_km_per_l: self.fuel_efficiency_km_per_l.unwrap_or(0.0),
            co2_kg_per_km: self.co2_kg_per_km.unwrap_or(0.0),
            current_location: self.current_location.unwrap_or_default(),
            status,
            age_years: self.age_years.unwrap_or(0.0),
            availability_score: status.availability_score(),
            quality_score: self.quality_score.unwrap_or(0.0).clamp(0.0, 1.0),
        }
    }
}
