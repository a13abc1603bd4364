//! The observable weather search model.
//!
//! [`WeatherQueryModel`] is the only writer of a [`QueryState`]. Searches run
//! on the Tokio runtime; every outcome is published through a
//! [`tokio::sync::watch`] channel that any number of observers can follow.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{
    client::{WeatherClient, client_from_config},
    config::Config,
    error::FetchError,
    model::{Units, WeatherDisplay, WeatherQuery},
    state::QueryState,
};

#[derive(Debug, Clone)]
pub struct WeatherQueryModel {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    client: Arc<dyn WeatherClient>,
    units: Units,
    state: watch::Sender<QueryState>,
    session: Mutex<Session>,
}

/// Bookkeeping that outlives individual states.
#[derive(Debug, Default)]
struct Session {
    recent_searches: Vec<String>,
    last_display: Option<WeatherDisplay>,
    /// Bumped by every search; only the newest one may publish.
    generation: u64,
}

impl WeatherQueryModel {
    pub fn new(client: Arc<dyn WeatherClient>, units: Units) -> Self {
        let (state, _) = watch::channel(QueryState::Init);

        Self {
            inner: Arc::new(Inner { client, units, state, session: Mutex::new(Session::default()) }),
        }
    }

    /// Build a model backed by the OpenWeather client described in `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = client_from_config(config)?;
        Ok(Self::new(client, config.units))
    }

    pub fn units(&self) -> Units {
        self.inner.units
    }

    /// Receiver that sees the current state and every later change.
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.inner.state.subscribe()
    }

    pub fn state(&self) -> QueryState {
        self.inner.state.borrow().clone()
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.inner.session.lock().recent_searches.clone()
    }

    /// Start a search for `city_name`.
    ///
    /// The state is `Loading` by the time this returns. The fetch runs on a
    /// spawned task whose handle is returned; awaiting it is optional, the
    /// outcome always arrives through [`subscribe`](Self::subscribe). A newer
    /// call supersedes this one: its result is then dropped unpublished.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn search_weather(&self, city_name: impl Into<String>) -> JoinHandle<()> {
        let city_name = city_name.into();

        let generation = {
            let mut session = self.inner.session.lock();
            session.generation += 1;
            self.inner.state.send_replace(QueryState::Loading);
            session.generation
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.run_search(generation, city_name).await })
    }

    /// Forget the recent searches, keeping whatever result is on screen.
    pub fn clear_recent_searches(&self) {
        let mut session = self.inner.session.lock();
        session.recent_searches.clear();

        if self.inner.state.send_if_modified(QueryState::clear_recent_searches) {
            debug!("cleared recent searches");
        }
    }
}

impl Inner {
    async fn run_search(&self, generation: u64, city_name: String) {
        let outcome = self.fetch_display(&city_name).await;

        let mut session = self.session.lock();
        if session.generation != generation {
            debug!(city = %city_name, "dropping result of superseded search");
            return;
        }

        let next = match outcome {
            Ok((query, fresh)) => {
                let temperature = fresh.temperature;
                info!(city = %query, temperature, "weather updated");

                session.recent_searches.push(query.into_inner());
                session.last_display = Some(fresh.clone());

                QueryState::Success {
                    display: fresh,
                    recent_searches: session.recent_searches.clone(),
                }
            }
            Err(err) => {
                warn!(city = %city_name, error = %err, "weather search failed");

                QueryState::Error {
                    message: err.to_string(),
                    last_known: session.last_display.clone(),
                    recent_searches: session.recent_searches.clone(),
                }
            }
        };

        self.state.send_replace(next);
    }

    async fn fetch_display(
        &self,
        city_name: &str,
    ) -> Result<(WeatherQuery, WeatherDisplay), FetchError> {
        let query = WeatherQuery::new(city_name)?;
        let payload = self.client.fetch_by_city(&query, self.units).await?;
        let display = WeatherDisplay::try_from(&payload)?;

        Ok((query, display))
    }
}
