use serde::Serialize;

use super::weather::{WeatherCondition, weather_time_multiplier};

/// Reference speed, in km/h, used to turn a distance into a base travel time.
pub const BASE_SPEED_KMH: f64 = 60.0;

/// One pre-enumerated row of the route table.
///
/// Derived fields are computed by [`RouteBuilder::build`] so that
/// `total_time_h = (distance_km / 60 + traffic_delay_min / 60) * weather_time_multiplier`
/// always holds.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Route {
    order_id: String,
    origin: String,
    destination: String,
    distance_km: f64,
    base_travel_time_h: f64,
    traffic_delay_min: f64,
    weather: WeatherCondition,
    weather_time_multiplier: f64,
    toll_charge: f64,
    total_time_h: f64,
}

impl Route {
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.origin, self.destination)
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn base_travel_time_h(&self) -> f64 {
        self.base_travel_time_h
    }

    pub fn traffic_delay_min(&self) -> f64 {
        self.traffic_delay_min
    }

    pub fn weather(&self) -> &WeatherCondition {
        &self.weather
    }

    pub fn weather_time_multiplier(&self) -> f64 {
        self.weather_time_multiplier
    }

    pub fn toll_charge(&self) -> f64 {
        self.toll_charge
    }

    pub fn total_time_h(&self) -> f64 {
        self.total_time_h
    }

    pub fn connects(&self, origin: &str, destination: &str) -> bool {
        self.origin.to_lowercase() == origin.to_lowercase()
            && self.destination.to_lowercase() == destination.to_lowercase()
    }
}

#[derive(Default)]
pub struct RouteBuilder {
    order_id: Option<String>,
    origin: Option<String>,
    destination: Option<String>,
    distance_km: Option<f64>,
    traffic_delay_min: Option<f64>,
    weather: Option<WeatherCondition>,
    toll_charge: Option<f64>,
}

impl RouteBuilder {
    pub fn set_order_id(&mut self, order_id: impl Into<String>) -> &mut RouteBuilder {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn set_endpoints(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> &mut RouteBuilder {
        self.origin = Some(origin.into());
        self.destination = Some(destination.into());
        self
    }

    pub fn set_distance_km(&mut self, distance_km: f64) -> &mut RouteBuilder {
        self.distance_km = Some(distance_km);
        self
    }

    pub fn set_traffic_delay_min(&mut self, traffic_delay_min: f64) -> &mut RouteBuilder {
        self.traffic_delay_min = Some(traffic_delay_min);
        self
    }

    pub fn set_weather(&mut self, weather: WeatherCondition) -> &mut RouteBuilder {
        self.weather = Some(weather);
        self
    }

    pub fn set_toll_charge(&mut self, toll_charge: f64) -> &mut RouteBuilder {
        self.toll_charge = Some(toll_charge);
        self
    }

    pub fn build(self) -> Route {
        let distance_km = self.distance_km.unwrap_or(0.0);
        let traffic_delay_min = self.traffic_delay_min.unwrap_or(0.0);
        let weather = self.weather.unwrap_or_default();
        let multiplier = weather_time_multiplier(&weather);

        let base_travel_time_h = distance_km / BASE_SPEED_KMH;
        let total_time_h = (base_travel_time_h + traffic_delay_min / 60.0) * multiplier;

        Route {
            order_id: self.order_id.unwrap_or_default(),
            origin: self.origin.unwrap_or_default(),
            destination: self.destination.unwrap_or_default(),
            distance_km,
            base_travel_time_h,
            traffic_delay_min,
            weather,
            weather_time_multiplier: multiplier,
            toll_charge: self.toll_charge.unwrap_or(0.0),
            total_time_h,
        }
    }
}
