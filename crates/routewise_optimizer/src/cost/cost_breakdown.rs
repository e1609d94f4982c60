use schemars::JsonSchema;
use serde::Serialize;
use tracing::warn;

use crate::{
    error::{ConfigurationGap, EstimateError, ensure_non_negative, ensure_positive},
    problem::{route::BASE_SPEED_KMH, vehicle_type::VehicleType, weather::WeatherCondition},
    utils::round::round2,
};

use super::cost_rates::CostRates;

static CLEAR_WEATHER: WeatherCondition = WeatherCondition::Clear;

/// Everything the cost estimator needs to price one route-vehicle pairing.
#[derive(Debug, Clone, Copy)]
pub struct CostContext<'a> {
    pub distance_km: f64,
    pub vehicle_type: &'a VehicleType,
    pub fuel_efficiency_km_per_l: f64,
    pub traffic_delay_min: f64,
    pub weather: &'a WeatherCondition,
    pub order_weight_kg: f64,
    pub toll_charge: Option<f64>,
}

impl<'a> CostContext<'a> {
    pub fn new(
        distance_km: f64,
        vehicle_type: &'a VehicleType,
        fuel_efficiency_km_per_l: f64,
    ) -> Self {
        CostContext {
            distance_km,
            vehicle_type,
            fuel_efficiency_km_per_l,
            traffic_delay_min: 0.0,
            weather: &CLEAR_WEATHER,
            order_weight_kg: 0.0,
            toll_charge: None,
        }
    }

    pub fn with_traffic_delay(mut self, traffic_delay_min: f64) -> Self {
        self.traffic_delay_min = traffic_delay_min;
        self
    }

    pub fn with_weather(mut self, weather: &'a WeatherCondition) -> Self {
        self.weather = weather;
        self
    }

    pub fn with_order_weight(mut self, order_weight_kg: f64) -> Self {
        self.order_weight_kg = order_weight_kg;
        self
    }

    pub fn with_toll_charge(mut self, toll_charge: f64) -> Self {
        self.toll_charge = Some(toll_charge);
        self
    }

    fn validate(&self) -> Result<(), EstimateError> {
        ensure_positive("distance_km", self.distance_km)?;
        ensure_positive("fuel_efficiency_km_per_l", self.fuel_efficiency_km_per_l)?;
        ensure_non_negative("traffic_delay_min", self.traffic_delay_min)?;
        ensure_non_negative("order_weight_kg", self.order_weight_kg)?;
        if let Some(toll_charge) = self.toll_charge {
            ensure_non_negative("toll_charge", toll_charge)?;
        }
        Ok(())
    }
}

/// Itemized delivery cost, every figure rounded to two decimals.
///
/// `subtotal` is the sum of the six rounded components and `total_cost` is
/// `subtotal + platform_fee + overhead`, both exact to the penny.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CostBreakdown {
    pub fuel_liters: f64,
    pub labor_hours: f64,
    pub fuel_cost: f64,
    pub labor_cost: f64,
    pub maintenance_cost: f64,
    pub toll_charges: f64,
    pub insurance_cost: f64,
    pub packaging_cost: f64,
    pub subtotal: f64,
    pub platform_fee: f64,
    pub overhead: f64,
    pub total_cost: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub configuration_gaps: Vec<ConfigurationGap>,
}

impl CostBreakdown {
    pub fn cost_per_km(&self, distance_km: f64) -> Option<f64> {
        (distance_km > 0.0).then(|| round2(self.total_cost / distance_km))
    }
}

pub fn estimate_cost(
    rates: &CostRates,
    context: &CostContext,
) -> Result<CostBreakdown, EstimateError> {
    context.validate()?;

    let mut configuration_gaps = Vec::new();

    let fuel_liters = context.distance_km / context.fuel_efficiency_km_per_l;
    let fuel_cost = round2(fuel_liters * rates.fuel_price_per_liter);

    // Labor time is priced at the reference speed, not the vehicle's own.
    let labor_hours = context.distance_km / BASE_SPEED_KMH + context.traffic_delay_min / 60.0;
    let hourly_rate = rates.hourly_rate(context.vehicle_type);
    let weather_multiplier = rates.weather_multiplier(context.weather);
    let labor_cost = round2(labor_hours * hourly_rate.value * weather_multiplier.value);

    let maintenance_rate = rates.maintenance_rate(context.vehicle_type);
    let maintenance_cost = round2(context.distance_km * maintenance_rate.value);

    if hourly_rate.fallback || maintenance_rate.fallback {
        warn!(
            vehicle_type = %context.vehicle_type,
            "No cost rates configured for vehicle type, using fallback rates"
        );
        configuration_gaps.push(ConfigurationGap::UnknownVehicleType(
            context.vehicle_type.to_string(),
        ));
    }

    if weather_multiplier.fallback {
        warn!(
            weather = %context.weather,
            "No cost multiplier configured for weather code, using fallback multiplier"
        );
        configuration_gaps.push(ConfigurationGap::UnknownWeatherCode(
            context.weather.to_string(),
        ));
    }

    let toll_charges = match context.toll_charge {
        Some(toll_charge) if toll_charge > 0.0 => round2(toll_charge),
        _ => round2(context.distance_km * rates.toll_estimate_per_km),
    };

    let insurance_cost = round2(rates.insurance_per_trip);
    let packaging_cost =
        round2(rates.packaging_base_cost + context.order_weight_kg * rates.packaging_cost_per_kg);

    let subtotal = round2(
        fuel_cost + labor_cost + maintenance_cost + toll_charges + insurance_cost + packaging_cost,
    );
    let platform_fee = round2(subtotal * rates.platform_fee_pct / 100.0);
    let overhead = round2(subtotal * rates.overhead_pct / 100.0);
    let total_cost = round2(subtotal + platform_fee + overhead);

    Ok(CostBreakdown {
        fuel_liters: round2(fuel_liters),
        labor_hours: round2(labor_hours),
        fuel_cost,
        labor_cost,
        maintenance_cost,
        toll_charges,
        insurance_cost,
        packaging_cost,
        subtotal,
        platform_fee,
        overhead,
        total_cost,
        configuration_gaps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PENNY: f64 = 0.005;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_large_truck_breakdown() {
        let rates = CostRates::default();
        let weather = WeatherCondition::LightRain;
        let context = CostContext::new(500.0, &VehicleType::LargeTruck, 6.0)
            .with_traffic_delay(30.0)
            .with_weather(&weather)
            .with_order_weight(2000.0)
            .with_toll_charge(400.0);

        let breakdown = estimate_cost(&rates, &context).unwrap();

        assert_close(breakdown.fuel_cost, round2(500.0 / 6.0 * 102.0));
        assert_close(breakdown.fuel_cost, 8500.0);
        assert_close(breakdown.labor_cost, 2915.0);
        assert_close(breakdown.maintenance_cost, 3500.0);
        assert_close(breakdown.toll_charges, 400.0);
        assert_close(breakdown.insurance_cost, 50.0);
        assert_close(breakdown.packaging_cost, 50.0);
        assert_close(breakdown.subtotal, 15415.0);
        assert_close(breakdown.platform_fee, 462.45);
        assert_close(breakdown.overhead, 770.75);
        assert_close(breakdown.total_cost, 16648.2);
        assert!(breakdown.configuration_gaps.is_empty());
    }

    #[test]
    fn test_totals_are_consistent_to_the_penny() {
        let rates = CostRates::default();
        let weathers = [
            WeatherCondition::Clear,
            WeatherCondition::LightRain,
            WeatherCondition::HeavyRain,
            WeatherCondition::Fog,
        ];

        for (index, vehicle_type) in VehicleType::KNOWN.iter().enumerate() {
            for weather in &weathers {
                let distance_km = 37.3 + 91.7 * index as f64;
                let context = CostContext::new(distance_km, vehicle_type, 3.7 + index as f64)
                    .with_traffic_delay(13.0 * index as f64)
                    .with_weather(weather)
                    .with_order_weight(123.4);

                let breakdown = estimate_cost(&rates, &context).unwrap();

                let components = breakdown.fuel_cost
                    + breakdown.labor_cost
                    + breakdown.maintenance_cost
                    + breakdown.toll_charges
                    + breakdown.insurance_cost
                    + breakdown.packaging_cost;
                assert!((breakdown.subtotal - components).abs() < PENNY);
                assert!(
                    (breakdown.total_cost
                        - (breakdown.subtotal + breakdown.platform_fee + breakdown.overhead))
                        .abs()
                        < PENNY
                );
            }
        }
    }

    #[test]
    fn test_toll_is_estimated_when_not_known() {
        let rates = CostRates::default();
        let context = CostContext::new(250.0, &VehicleType::SmallVan, 10.0);

        let breakdown = estimate_cost(&rates, &context).unwrap();
        assert_close(breakdown.toll_charges, 200.0);

        let zero_toll = estimate_cost(&rates, &context.with_toll_charge(0.0)).unwrap();
        assert_close(zero_toll.toll_charges, 200.0);
    }

    #[test]
    fn test_unknown_vehicle_type_and_weather_are_flagged() {
        let rates = CostRates::default();
        let vehicle_type = VehicleType::from("Cargo_Drone");
        let weather = WeatherCondition::from("Hail");
        let context = CostContext::new(60.0, &vehicle_type, 10.0).with_weather(&weather);

        let breakdown = estimate_cost(&rates, &context).unwrap();

        // 1h at the fallback 250/h, fallback multiplier 1.0
        assert_close(breakdown.labor_cost, 250.0);
        assert_close(breakdown.maintenance_cost, 300.0);
        assert_eq!(
            breakdown.configuration_gaps,
            vec![
                ConfigurationGap::UnknownVehicleType(String::from("Cargo_Drone")),
                ConfigurationGap::UnknownWeatherCode(String::from("Hail")),
            ]
        );
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let rates = CostRates::default();
        let vehicle_type = VehicleType::SmallVan;

        let zero_efficiency = CostContext::new(100.0, &vehicle_type, 0.0);
        assert!(matches!(
            estimate_cost(&rates, &zero_efficiency),
            Err(EstimateError::InvalidInput {
                field: "fuel_efficiency_km_per_l",
                ..
            })
        ));

        let zero_distance = CostContext::new(0.0, &vehicle_type, 8.0);
        assert!(matches!(
            estimate_cost(&rates, &zero_distance),
            Err(EstimateError::InvalidInput {
                field: "distance_km",
                ..
            })
        ));

        let negative_delay = CostContext::new(10.0, &vehicle_type, 8.0).with_traffic_delay(-5.0);
        assert!(estimate_cost(&rates, &negative_delay).is_err());
    }

    #[test]
    fn test_cost_per_km() {
        let rates = CostRates::default();
        let context = CostContext::new(100.0, &VehicleType::SmallVan, 10.0);
        let breakdown = estimate_cost(&rates, &context).unwrap();

        assert_eq!(
            breakdown.cost_per_km(100.0),
            Some(round2(breakdown.total_cost / 100.0))
        );
        assert_eq!(breakdown.cost_per_km(0.0), None);
    }
}
