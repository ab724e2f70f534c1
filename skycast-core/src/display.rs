//! Presentation transforms for the weather card: unit conversion, date
//! formatting, the synthetic forecast, and icon mapping.

use chrono::TimeZone;

/// Binary choice between Celsius and Fahrenheit display. Purely
/// presentational; the API always reports Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitPreference {
    #[default]
    Celsius,
    Fahrenheit,
}

impl UnitPreference {
    pub const fn glyph(&self) -> &'static str {
        match self {
            UnitPreference::Celsius => "°C",
            UnitPreference::Fahrenheit => "°F",
        }
    }

    pub const fn toggled(&self) -> Self {
        match self {
            UnitPreference::Celsius => UnitPreference::Fahrenheit,
            UnitPreference::Fahrenheit => UnitPreference::Celsius,
        }
    }
}

/// Convert a Celsius reading for display. Celsius is the identity.
pub fn convert_temp(celsius: f64, unit: UnitPreference) -> f64 {
    match unit {
        UnitPreference::Celsius => celsius,
        UnitPreference::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    }
}

/// Rounded temperature with the unit glyph appended, e.g. "25°C".
pub fn display_temp(celsius: f64, unit: UnitPreference) -> String {
    format!("{}{}", round_half_up(convert_temp(celsius, unit)), unit.glyph())
}

// Halves round toward positive infinity (-24.5 displays as -24, not -25),
// matching the page's display rounding.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// One entry of the synthetic forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastDay {
    pub day: u8,
    /// Converted and rounded display temperature.
    pub temp: i64,
}

/// The "3-day forecast": a fixed linear decay of the single current
/// observation, two display degrees per day. Nothing here is fetched; the
/// remote forecast endpoint is deliberately not involved.
pub fn forecast_days(celsius: f64, unit: UnitPreference) -> [ForecastDay; 3] {
    let base = convert_temp(celsius, unit);

    [1u8, 2, 3].map(|day| ForecastDay {
        day,
        temp: round_half_up(base - f64::from(day) * 2.0),
    })
}

/// Format the observation date as long weekday + abbreviated month + day,
/// e.g. "Tuesday, Jun 3".
///
/// The location's UTC offset is added to the already-absolute timestamp and
/// the shifted instant is then formatted in `zone` (the viewer's local zone
/// in the app). Relative to true UTC this applies the offset twice under
/// non-UTC viewer zones; kept as-is for parity with the existing display.
pub fn format_observation_date<Tz>(dt: i64, utc_offset: i64, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    zone.timestamp_opt(dt + utc_offset, 0)
        .earliest()
        .map(|t| t.format("%A, %b %-d").to_string())
        .unwrap_or_default()
}

/// Glyph vocabulary the API icon codes map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    Clear,
    Cloud,
    CloudHeavy,
    Rain,
    Storm,
    Snow,
    Fog,
}

/// Day/night tint variant of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Day,
    Night,
}

/// A mapped weather icon: glyph category plus day/night tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub kind: GlyphKind,
    /// `None` only for the fallback, which has no day/night variant.
    pub tint: Option<Tint>,
}

impl Icon {
    /// Map an API icon code to its glyph. Unrecognized codes fall back to the
    /// generic untinted cloud.
    pub fn from_code(code: &str) -> Self {
        use GlyphKind::*;

        let (kind, tint) = match code {
            "01d" => (Clear, Tint::Day),
            "01n" => (Clear, Tint::Night),
            "02d" | "03d" => (Cloud, Tint::Day),
            "02n" | "03n" => (Cloud, Tint::Night),
            "04d" => (CloudHeavy, Tint::Day),
            "04n" => (CloudHeavy, Tint::Night),
            "09d" | "10d" => (Rain, Tint::Day),
            "09n" | "10n" => (Rain, Tint::Night),
            "11d" => (Storm, Tint::Day),
            "11n" => (Storm, Tint::Night),
            "13d" => (Snow, Tint::Day),
            "13n" => (Snow, Tint::Night),
            "50d" => (Fog, Tint::Day),
            "50n" => (Fog, Tint::Night),
            _ => {
                return Self {
                    kind: Cloud,
                    tint: None,
                };
            }
        };

        Self {
            kind,
            tint: Some(tint),
        }
    }

    /// Terminal glyph for the icon.
    pub const fn symbol(&self) -> &'static str {
        match self.kind {
            GlyphKind::Clear => "☀️",
            GlyphKind::Cloud => "⛅",
            GlyphKind::CloudHeavy => "☁️",
            GlyphKind::Rain => "🌧️",
            GlyphKind::Storm => "⛈️",
            GlyphKind::Snow => "❄️",
            GlyphKind::Fog => "🌫️",
        }
    }
}
