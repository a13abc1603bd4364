use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::FetchError,
    model::{Units, WeatherQuery},
    payload::RawWeatherPayload,
};

use super::WeatherClient;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    /// `base_url` is usually [`DEFAULT_BASE_URL`]; a proxy or mock server also works.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { api_key, base_url, http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Error body OpenWeather sends along with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: String,
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    async fn fetch_by_city(
        &self,
        query: &WeatherQuery,
        units: Units,
    ) -> Result<RawWeatherPayload, FetchError> {
        let url = format!("{}/weather", self.base_url);
        debug!(%url, city = query.as_str(), %units, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("appid", self.api_key.as_str()),
                ("units", units.as_str()),
                ("q", query.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "received current weather response");

        if !status.is_success() {
            return Err(FetchError::Status { status, message: error_message(&body) });
        }

        let parsed: RawWeatherPayload = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<OwErrorBody>(body) {
        Ok(parsed) if !parsed.message.is_empty() => parsed.message,
        _ => truncate_body(body),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let client = OpenWeatherClient::with_base_url("KEY".into(), "http://localhost:1234/");
        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[test]
    fn error_message_prefers_api_message() {
        assert_eq!(error_message(r#"{"cod":"404","message":"city not found"}"#), "city not found");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundary() {
        let body = "é".repeat(150);
        let out = truncate_body(&body);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 203);
    }
}
