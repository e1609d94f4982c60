use std::{convert::Infallible, fmt, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Weather code attached to a route. `Clear` is spelled `None` in the tables.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Default, SerializeDisplay, DeserializeFromStr,
)]
pub enum WeatherCondition {
    #[default]
    Clear,
    LightRain,
    HeavyRain,
    Fog,
    Other(String),
}

impl WeatherCondition {
    pub fn as_str(&self) -> &str {
        match self {
            WeatherCondition::Clear => "None",
            WeatherCondition::LightRain => "Light_Rain",
            WeatherCondition::HeavyRain => "Heavy_Rain",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Other(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, WeatherCondition::Other(_))
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weather = match s.trim() {
            "" | "None" => WeatherCondition::Clear,
            "Light_Rain" => WeatherCondition::LightRain,
            "Heavy_Rain" => WeatherCondition::HeavyRain,
            "Fog" => WeatherCondition::Fog,
            other => WeatherCondition::Other(other.to_owned()),
        };

        Ok(weather)
    }
}

impl From<&str> for WeatherCondition {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(weather) => weather,
            Err(never) => match never {},
        }
    }
}

/// Travel time multiplier applied by the preprocessor to a route's base time.
pub fn weather_time_multiplier(weather: &WeatherCondition) -> f64 {
    match weather {
        WeatherCondition::Clear => 1.0,
        WeatherCondition::LightRain => 1.15,
        WeatherCondition::HeavyRain => 1.35,
        WeatherCondition::Fog => 1.25,
        WeatherCondition::Other(_) => 1.0,
    }
}
