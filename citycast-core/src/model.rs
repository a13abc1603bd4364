use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

use crate::{
    error::FetchError,
    payload::{RawCondition, RawWeatherPayload},
};

/// Base for OpenWeather condition icons; the icon code and `@2x.png` are appended.
pub const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn/";

/// A city name as typed by the user, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery(String);

impl WeatherQuery {
    pub fn new(city_name: impl AsRef<str>) -> Result<Self, FetchError> {
        let trimmed = city_name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unit system requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    /// Suffix used when rendering a temperature reading.
    pub fn symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial, Units::Standard]
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            "standard" => Ok(Units::Standard),
            _ => Err(anyhow::anyhow!(
                "Unknown units '{value}'. Supported units: metric, imperial, standard."
            )),
        }
    }
}

/// Human-presentable subset of a weather payload.
///
/// Temperatures are truncated toward zero, the way the readings are shown on
/// screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDisplay {
    pub temperature: i64,
    pub feels_like: i64,
    pub min_temp: i64,
    pub max_temp: i64,
    pub icon_url: String,
    pub location: Option<String>,
    pub condition: Option<String>,
    pub observed_at: Option<DateTime<Utc>>,
}

impl TryFrom<&RawWeatherPayload> for WeatherDisplay {
    type Error = FetchError;

    fn try_from(payload: &RawWeatherPayload) -> Result<Self, Self::Error> {
        let main = payload.main.as_ref().ok_or_else(|| {
            FetchError::InvalidArgument("response contained no main weather data".to_string())
        })?;

        let condition = payload.weather.first();

        let icon_url = condition
            .map(|c| c.icon.trim())
            .filter(|icon| !icon.is_empty())
            .map(icon_url)
            .unwrap_or_default();

        Ok(WeatherDisplay {
            temperature: truncate("temp", main.temp)?,
            feels_like: truncate("feels_like", main.feels_like)?,
            min_temp: truncate("temp_min", main.temp_min)?,
            max_temp: truncate("temp_max", main.temp_max)?,
            icon_url,
            location: payload.name.clone().filter(|n| !n.is_empty()),
            condition: condition.and_then(condition_text),
            observed_at: payload.dt.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }
}

/// Free-text description, falling back to the condition group ("Rain", "Haze").
fn condition_text(condition: &RawCondition) -> Option<String> {
    [&condition.description, &condition.main]
        .into_iter()
        .map(|text| text.trim())
        .find(|text| !text.is_empty())
        .map(str::to_owned)
}

pub fn icon_url(icon_code: &str) -> String {
    format!("{ICON_URL_BASE}{icon_code}@2x.png")
}

fn truncate(field: &str, value: f64) -> Result<i64, FetchError> {
    if !value.is_finite() {
        return Err(FetchError::Mapping(format!("field '{field}' is not a finite number")));
    }

    Ok(value.trunc() as i64)
}
