use serde::{Deserialize, Serialize};

/// Coordinates of the observed location.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

/// One point-in-time weather observation for one location.
///
/// Constructed fresh from each API response, never mutated in place, and
/// replaced wholesale by the next successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in Celsius.
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Relative humidity percentage (0-100).
    pub humidity: u8,
    /// Surface pressure in hPa.
    pub pressure: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360).
    pub wind_deg: u16,
    /// Cloud cover percentage (0-100).
    pub clouds: u8,
    /// Visibility in meters.
    pub visibility: u32,
    /// Short condition name, e.g. "Clear".
    pub conditions: String,
    /// Longer condition description, e.g. "clear sky".
    pub description: String,
    /// API icon code, e.g. "01d". Mapped to a glyph by the presentation layer.
    pub icon: String,
    pub location: String,
    pub country: String,
    /// Unix seconds.
    pub sunrise: i64,
    /// Unix seconds.
    pub sunset: i64,
    /// UTC offset of the location, in seconds.
    pub timezone: i64,
    /// Observation time, unix seconds.
    pub dt: i64,
    pub coord: Coord,
}

/// The success/message/data wrapper returned by the weather API.
///
/// Decoded as-is; `success: false` is an application-level failure carrying a
/// human-readable message, not a transport error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<WeatherSnapshot>,
}
