use crate::{
    Config, FetchError, RawWeatherPayload, Units, WeatherQuery,
    client::openweather::OpenWeatherClient,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// A source of current weather for a city.
///
/// The API key, host and transport are the implementation's business; the
/// query model only ever hands over the city and unit system.
#[async_trait]
pub trait WeatherClient: Send + Sync + Debug {
    async fn fetch_by_city(
        &self,
        query: &WeatherQuery,
        units: Units,
    ) -> Result<RawWeatherPayload, FetchError>;
}

/// Construct the OpenWeather client from config.
pub fn client_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherClient>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
                 Hint: run `citycast configure` or set OPENWEATHER_API_KEY."
        )
    })?;

    Ok(Arc::new(OpenWeatherClient::with_base_url(api_key, config.base_url.as_str())))
}
