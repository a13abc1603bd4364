//! Scripted weather client for driving the query model in tests.

#![allow(dead_code)]

use async_trait::async_trait;
use citycast_core::{
    FetchError, RawCondition, RawMain, RawWeatherPayload, Units, WeatherClient, WeatherQuery,
};
use parking_lot::Mutex;
use reqwest::StatusCode;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Notify;

/// What the fake answers for a given city.
#[derive(Debug, Clone)]
pub enum Reply {
    Payload(RawWeatherPayload),
    /// Status failure with the given message, standing in for any remote error.
    Fail(String),
}

#[derive(Debug, Clone)]
struct Script {
    reply: Reply,
    gate: Option<Arc<Notify>>,
}

#[derive(Debug, Default)]
pub struct ScriptedClient {
    scripts: Mutex<HashMap<String, Script>>,
    calls: Mutex<Vec<(String, Units)>>,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, city: &str, reply: Reply) {
        self.scripts.lock().insert(city.to_string(), Script { reply, gate: None });
    }

    /// Like [`reply`](Self::reply), but the answer is held back until the
    /// returned gate is notified.
    pub fn reply_gated(&self, city: &str, reply: Reply) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.scripts
            .lock()
            .insert(city.to_string(), Script { reply, gate: Some(Arc::clone(&gate)) });
        gate
    }

    pub fn calls(&self) -> Vec<(String, Units)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl WeatherClient for ScriptedClient {
    async fn fetch_by_city(
        &self,
        query: &WeatherQuery,
        units: Units,
    ) -> Result<RawWeatherPayload, FetchError> {
        self.calls.lock().push((query.as_str().to_string(), units));

        let script = self.scripts.lock().get(query.as_str()).cloned();
        let Some(script) = script else {
            return Err(FetchError::Status {
                status: StatusCode::NOT_FOUND,
                message: "city not found".to_string(),
            });
        };

        if let Some(gate) = script.gate {
            gate.notified().await;
        }

        match script.reply {
            Reply::Payload(payload) => Ok(payload),
            Reply::Fail(message) => {
                Err(FetchError::Status { status: StatusCode::SERVICE_UNAVAILABLE, message })
            }
        }
    }
}

pub fn payload(name: &str, temp: f64, feels_like: f64, min: f64, max: f64) -> RawWeatherPayload {
    RawWeatherPayload {
        name: Some(name.to_string()),
        dt: Some(1_700_000_000),
        main: Some(RawMain { temp, feels_like, temp_min: min, temp_max: max }),
        weather: vec![RawCondition {
            main: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
            icon: "03d".to_string(),
        }],
    }
}

pub fn payload_without_main(name: &str) -> RawWeatherPayload {
    RawWeatherPayload { name: Some(name.to_string()), ..RawWeatherPayload::default() }
}
