use anyhow::{Context, Result};
use citycast_core::WeatherQueryModel;
use inquire::{InquireError, Select, Text};

use crate::render;

const HELP: &str = "Type a city name. Commands: :recent (pick a previous search), \
                    :clear (forget recent searches), :quit";

/// Interactive session: one model, many searches, until the user quits.
pub async fn run(model: WeatherQueryModel, initial_city: Option<String>) -> Result<()> {
    println!("{HELP}");

    if let Some(city) = initial_city {
        search(&model, city).await?;
    }

    while let Some(input) = prompt(|| Text::new("City:").prompt()).await? {
        match input.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":help" => println!("{HELP}"),
            ":clear" => {
                model.clear_recent_searches();
                println!("Recent searches cleared.");
            }
            ":recent" => {
                let recent = model.recent_searches();
                if recent.is_empty() {
                    println!("No recent searches.");
                    continue;
                }

                let picked = prompt(move || Select::new("Recent searches:", recent).prompt()).await?;
                if let Some(city) = picked {
                    search(&model, city).await?;
                }
            }
            city => search(&model, city.to_string()).await?,
        }
    }

    Ok(())
}

async fn search(model: &WeatherQueryModel, city: String) -> Result<()> {
    let handle = model.search_weather(city);
    print!("{}", render::state(&model.state(), model.units()));

    handle.await.context("Weather search task failed")?;
    print!("{}", render::state(&model.state(), model.units()));

    Ok(())
}

/// Run a blocking prompt off the runtime; `None` when the user cancels it.
async fn prompt<T, F>(ask: F) -> Result<Option<T>>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, InquireError> + Send + 'static,
{
    let answer = tokio::task::spawn_blocking(ask).await.context("Prompt task failed")?;

    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
