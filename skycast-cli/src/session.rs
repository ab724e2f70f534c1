//! The CLI's three entry points: one-shot show, the interactive session, and
//! configuration.

use anyhow::{Context, Result};
use inquire::{InquireError, Select, Text};
use skycast_core::{ApiEnvironment, Config, HttpWeatherClient, UnitPreference, WeatherView};

use crate::render;

fn build_view(config: &Config) -> Result<WeatherView<HttpWeatherClient>> {
    let client =
        HttpWeatherClient::new(config).context("Failed to initialize the weather client")?;

    Ok(WeatherView::new(client, config.default_location.clone()))
}

/// One-shot fetch and render.
pub async fn show(location: Option<String>, fahrenheit: bool) -> Result<()> {
    let config = Config::load()?;
    let mut view = build_view(&config)?;

    if fahrenheit {
        view.set_unit(UnitPreference::Fahrenheit);
    }

    match location {
        Some(query) => {
            view.set_search_text(query);
            view.submit_search().await;
        }
        None => view.load_default().await,
    }

    println!("{}", render::render(&view.state));
    Ok(())
}

/// The live view: initial default-location load, then a prompt loop mirroring
/// the page's controls.
pub async fn interactive() -> Result<()> {
    let config = Config::load()?;
    let mut view = build_view(&config)?;

    println!("{}", render::loading_notice());
    view.load_default().await;
    println!("{}", render::render(&view.state));

    loop {
        let input = match Text::new("Search city (u: toggle °C/°F, q: quit):").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        match input.trim() {
            "q" => break,
            "u" => {
                view.toggle_unit();
                println!("{}", render::render(&view.state));
            }
            // Empty submissions change nothing and send nothing.
            "" => {}
            _ => {
                view.set_search_text(input);
                println!("{}", render::loading_notice());
                view.submit_search().await;
                println!("{}", render::render(&view.state));
            }
        }
    }

    Ok(())
}

/// Interactive configuration: pick the API environment and default location,
/// then persist to the TOML config file.
pub fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let environment = Select::new("API environment:", ApiEnvironment::all().to_vec())
        .prompt()
        .context("Failed to read environment choice")?;

    let default_location = Text::new("Default location:")
        .with_initial_value(&config.default_location)
        .prompt()
        .context("Failed to read default location")?;

    config.environment = environment;
    if !default_location.trim().is_empty() {
        config.default_location = default_location.trim().to_string();
    }

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}
