//! Core library for the `citycast` weather search.
//!
//! This crate defines:
//! - Configuration & API key handling
//! - The OpenWeather client behind the [`WeatherClient`] trait
//! - Display mapping from the raw payload
//! - [`WeatherQueryModel`], the observable search state machine
//!
//! It is used by `citycast-cli`, but any front end can drive the model and
//! render the [`QueryState`] it publishes.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod payload;
pub mod query_model;
pub mod state;

pub use client::{WeatherClient, client_from_config, openweather::OpenWeatherClient};
pub use config::Config;
pub use error::FetchError;
pub use model::{Units, WeatherDisplay, WeatherQuery};
pub use payload::{RawCondition, RawMain, RawWeatherPayload};
pub use query_model::WeatherQueryModel;
pub use state::QueryState;
