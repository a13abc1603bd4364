use anyhow::{Context, bail};
use citycast_core::{Config, QueryState, Units, WeatherQueryModel};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select, Text};

use crate::{render, repl};

/// City searched when nothing else is configured.
const DEFAULT_CITY: &str = "Dhaka";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citycast", version, about = "Current weather by city name")]
pub struct Cli {
    /// Log requests and state changes to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and display preferences.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City name, e.g. "London".
        city: String,

        /// Unit system: metric, imperial or standard. Defaults to the configured one.
        #[arg(long)]
        units: Option<String>,
    },

    /// Search repeatedly, keeping a list of recent searches.
    Interactive {
        /// Unit system: metric, imperial or standard. Defaults to the configured one.
        #[arg(long)]
        units: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure().await,
            Command::Show { city, units } => {
                let config = load_config(units.as_deref())?;
                show(&config, city).await
            }
            Command::Interactive { units } => {
                let config = load_config(units.as_deref())?;
                let model = WeatherQueryModel::from_config(&config)?;
                repl::run(model, config.initial_city).await
            }
        }
    }
}

fn load_config(units: Option<&str>) -> anyhow::Result<Config> {
    let mut config = Config::load()?;
    if let Some(units) = units {
        config.units = Units::try_from(units)?;
    }
    Ok(config)
}

async fn show(config: &Config, city: String) -> anyhow::Result<()> {
    let model = WeatherQueryModel::from_config(config)?;
    model.search_weather(city).await.context("Weather search task failed")?;

    match model.state() {
        QueryState::Success { display, .. } => {
            print!("{}", render::display(&display, model.units()));
            Ok(())
        }
        QueryState::Error { message, .. } => bail!(message),
        other => bail!("Search finished without a result: {other:?}"),
    }
}

async fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    let path = Config::config_file_path()?;

    let answers = tokio::task::spawn_blocking(move || -> anyhow::Result<Config> {
        let api_key = Password::new("OpenWeather API key:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .with_help_message("Leave empty to keep the current key")
            .prompt()?;
        if !api_key.trim().is_empty() {
            config.set_api_key(api_key.trim().to_string());
        }

        let choices = Units::all().to_vec();
        let cursor = choices.iter().position(|u| *u == config.units).unwrap_or(0);
        config.units = Select::new("Units:", choices).with_starting_cursor(cursor).prompt()?;

        let current_city = config.initial_city.clone().unwrap_or_else(|| DEFAULT_CITY.to_string());
        let city = Text::new("City to show on start (empty for none):")
            .with_default(&current_city)
            .prompt()?;
        config.initial_city = Some(city.trim().to_string()).filter(|c| !c.is_empty());

        Ok(config)
    })
    .await
    .context("Configuration prompt task failed")??;

    answers.save()?;
    println!("Saved configuration to {}", path.display());

    if !answers.is_configured() {
        println!("No API key stored yet; searches will fail until one is set.");
    }

    Ok(())
}
