use serde::Deserialize;

/// Body of the OpenWeather "current weather" response.
///
/// Only the fields the display needs are decoded; everything is optional so
/// that an incomplete body still parses and is rejected during mapping.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWeatherPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dt: Option<i64>,
    #[serde(default)]
    pub main: Option<RawMain>,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}
