use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    error::NetworkLoadError,
    problem::{
        route::{Route, RouteBuilder},
        vehicle::{Vehicle, VehicleBuilder, VehicleStatus},
        vehicle_type::VehicleType,
        weather::WeatherCondition,
    },
};

const AVAILABILITY_WEIGHT: f64 = 0.4;
const FUEL_EFFICIENCY_WEIGHT: f64 = 0.3;
const ENVIRONMENT_WEIGHT: f64 = 0.2;
const AGE_WEIGHT: f64 = 0.1;

/// A row of the route table as it is stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRoute {
    #[serde(rename = "Order_ID")]
    pub order_id: String,
    #[serde(rename = "Route")]
    pub route: String,
    #[serde(rename = "Distance_KM")]
    pub distance_km: Option<f64>,
    #[serde(rename = "Toll_Charges_INR")]
    pub toll_charge: Option<f64>,
    #[serde(rename = "Traffic_Delay_Minutes")]
    pub traffic_delay_min: Option<f64>,
    #[serde(rename = "Weather_Impact")]
    pub weather: Option<String>,
}

/// A row of the vehicle table as it is stored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVehicle {
    #[serde(rename = "Vehicle_ID")]
    pub vehicle_id: String,
    #[serde(rename = "Vehicle_Type")]
    pub vehicle_type: VehicleType,
    #[serde(rename = "Capacity_KG")]
    pub capacity_kg: f64,
    #[serde(rename = "Fuel_Efficiency_KM_per_L")]
    pub fuel_efficiency_km_per_l: f64,
    #[serde(rename = "Current_Location")]
    pub current_location: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Age_Years")]
    pub age_years: Option<f64>,
    #[serde(rename = "CO2_Emissions_Kg_per_KM")]
    pub co2_kg_per_km: f64,
}

/// Splits an `Origin-Destination` label into its two trimmed endpoints.
pub fn split_route_label(label: &str) -> Option<(&str, &str)> {
    let (origin, destination) = label.split_once('-')?;
    let (origin, destination) = (origin.trim(), destination.trim());

    if origin.is_empty() || destination.is_empty() || destination.contains('-') {
        return None;
    }

    Some((origin, destination))
}

/// Parses endpoints, fills in missing delay, weather and toll, and derives
/// travel times.
pub fn preprocess_routes(raw_routes: Vec<RawRoute>) -> Result<Vec<Route>, NetworkLoadError> {
    let mut defaulted_delays = 0;
    let mut defaulted_weather = 0;
    let mut defaulted_tolls = 0;

    let routes = raw_routes
        .into_iter()
        .map(|raw| {
            let Some((origin, destination)) = split_route_label(&raw.route)
                .map(|(origin, destination)| (origin.to_owned(), destination.to_owned()))
            else {
                return Err(NetworkLoadError::InvalidRouteLabel {
                    order_id: raw.order_id,
                    label: raw.route,
                });
            };

            let distance_km = raw.distance_km.ok_or_else(|| NetworkLoadError::InvalidValue {
                record: raw.order_id.clone(),
                field: "Distance_KM",
                reason: String::from("missing"),
            })?;

            let traffic_delay_min = raw.traffic_delay_min.unwrap_or_else(|| {
                defaulted_delays += 1;
                0.0
            });
            let toll_charge = raw.toll_charge.unwrap_or_else(|| {
                defaulted_tolls += 1;
                0.0
            });
            let weather = match raw.weather.as_deref().map(str::trim) {
                Some(code) if !code.is_empty() => WeatherCondition::from(code),
                _ => {
                    defaulted_weather += 1;
                    WeatherCondition::Clear
                }
            };

            let mut builder = RouteBuilder::default();
            builder
                .set_order_id(raw.order_id.trim())
                .set_endpoints(origin, destination)
                .set_distance_km(distance_km)
                .set_traffic_delay_min(traffic_delay_min)
                .set_weather(weather)
                .set_toll_charge(toll_charge);
            Ok(builder.build())
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        defaulted_delays,
        defaulted_weather,
        defaulted_tolls,
        "Filled missing route values"
    );
    info!(routes = routes.len(), "Processed routes");

    Ok(routes)
}

/// Inputs of the quality score that depend on the whole fleet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleetMaxima {
    pub fuel_efficiency: f64,
    pub co2_kg_per_km: f64,
    pub environmental_efficiency: f64,
    pub age_years: f64,
}

impl FleetMaxima {
    pub fn of(raw_vehicles: &[RawVehicle]) -> Self {
        let max = |value: fn(&RawVehicle) -> f64| {
            raw_vehicles
                .iter()
                .map(value)
                .fold(0.0_f64, f64::max)
        };

        let co2_kg_per_km = max(|vehicle| vehicle.co2_kg_per_km);
        let environmental_efficiency = raw_vehicles
            .iter()
            .map(|vehicle| co2_kg_per_km - vehicle.co2_kg_per_km)
            .fold(0.0_f64, f64::max);

        FleetMaxima {
            fuel_efficiency: max(|vehicle| vehicle.fuel_efficiency_km_per_l),
            co2_kg_per_km,
            environmental_efficiency,
            age_years: max(|vehicle| vehicle.age_years.unwrap_or(0.0)),
        }
    }
}

/// Weighted blend of availability, fuel efficiency, emissions and age, in
/// `[0, 1]`. A fleet maximum of zero makes its term contribute nothing, except
/// age where an all-new fleet counts as fully new.
pub fn vehicle_quality_score(
    status: VehicleStatus,
    fuel_efficiency: f64,
    co2_kg_per_km: f64,
    age_years: f64,
    maxima: &FleetMaxima,
) -> f64 {
    let ratio = |value: f64, max: f64| if max > 0.0 { value / max } else { 0.0 };

    let environmental_efficiency = maxima.co2_kg_per_km - co2_kg_per_km;
    let age_penalty = if maxima.age_years > 0.0 {
        1.0 - age_years / maxima.age_years
    } else {
        1.0
    };

    let score = AVAILABILITY_WEIGHT * status.availability_score()
        + FUEL_EFFICIENCY_WEIGHT * ratio(fuel_efficiency, maxima.fuel_efficiency)
        + ENVIRONMENT_WEIGHT * ratio(environmental_efficiency, maxima.environmental_efficiency)
        + AGE_WEIGHT * age_penalty;

    score.clamp(0.0, 1.0)
}

/// Parses statuses and scores every vehicle against the fleet maxima. Rows
/// with a non-positive capacity or a negative CO₂ rate are rejected.
pub fn preprocess_vehicles(
    raw_vehicles: Vec<RawVehicle>,
) -> Result<Vec<Vehicle>, NetworkLoadError> {
    let maxima = FleetMaxima::of(&raw_vehicles);
    debug!(?maxima, "Fleet maxima");

    let vehicles = raw_vehicles
        .into_iter()
        .map(|raw| {
            let status = raw.status.parse::<VehicleStatus>().map_err(|error| {
                NetworkLoadError::InvalidValue {
                    record: raw.vehicle_id.clone(),
                    field: "Status",
                    reason: error.to_string(),
                }
            })?;
            if !(raw.capacity_kg.is_finite() && raw.capacity_kg > 0.0) {
                return Err(NetworkLoadError::InvalidValue {
                    record: raw.vehicle_id,
                    field: "Capacity_KG",
                    reason: format!("must be positive, got {}", raw.capacity_kg),
                });
            }
            if !(raw.co2_kg_per_km.is_finite() && raw.co2_kg_per_km >= 0.0) {
                return Err(NetworkLoadError::InvalidValue {
                    record: raw.vehicle_id,
                    field: "CO2_Emissions_Kg_per_KM",
                    reason: format!("must not be negative, got {}", raw.co2_kg_per_km),
                });
            }
            let age_years = raw.age_years.unwrap_or(0.0);

            let quality_score = vehicle_quality_score(
                status,
                raw.fuel_efficiency_km_per_l,
                raw.co2_kg_per_km,
                age_years,
                &maxima,
            );

            let mut builder = VehicleBuilder::default();
            builder
                .set_vehicle_id(raw.vehicle_id.trim())
                .set_vehicle_type(raw.vehicle_type)
                .set_capacity_kg(raw.capacity_kg)
                .set_fuel_efficiency(raw.fuel_efficiency_km_per_l)
                .set_co2_kg_per_km(raw.co2_kg_per_km)
                .set_current_location(raw.current_location.trim())
                .set_status(status)
                .set_age_years(age_years)
                .set_quality_score(quality_score);
            Ok(builder.build())
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(vehicles = vehicles.len(), "Processed vehicles");

    Ok(vehicles)
}
