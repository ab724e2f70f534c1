//! Core library for the `skycast` weather display.
//!
//! This crate defines:
//! - Configuration (API environment, default location)
//! - The HTTP client for the weather API and its envelope models
//! - The view state machine and the presentation transforms
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod display;
pub mod model;
pub mod view;

pub use client::{FetchError, HttpWeatherClient, LocationQuery, WeatherSource};
pub use config::{ApiEnvironment, Config};
pub use display::{Icon, UnitPreference};
pub use model::{Envelope, WeatherSnapshot};
pub use view::{ViewState, WeatherView};
