//! Terminal rendering of the weather card.
//!
//! The layout mirrors the page: while an error is present the whole card is
//! replaced by the error notice, while loading a placeholder is shown, and
//! otherwise the card renders the snapshot through the presentation
//! transforms (rounded converted temperature, formatted date, icon glyph,
//! synthetic 3-day forecast, wind and humidity details).

use skycast_core::{
    ViewState, WeatherSnapshot,
    display::{self, Icon, UnitPreference},
};

pub fn render(state: &ViewState) -> String {
    if let Some(message) = &state.error {
        return error_notice(message);
    }
    if state.loading {
        return loading_notice();
    }
    match &state.snapshot {
        Some(snapshot) => card(snapshot, state.unit),
        None => loading_notice(),
    }
}

pub fn loading_notice() -> String {
    "  Fetching weather...".to_string()
}

fn error_notice(message: &str) -> String {
    format!(
        "\n  !  Weather Data Unavailable\n\n  {message}\n\n  (submit a new search to retry)\n"
    )
}

fn card(snapshot: &WeatherSnapshot, unit: UnitPreference) -> String {
    let icon = Icon::from_code(&snapshot.icon);
    let date = display::format_observation_date(snapshot.dt, snapshot.timezone, &chrono::Local);

    let mut out = String::new();

    out.push_str(&format!(
        "\n  {}  {}\n  {}\n",
        icon.symbol(),
        display::display_temp(snapshot.temp, unit),
        capitalize(&snapshot.description),
    ));
    out.push_str(&format!("\n  {date}\n  {}, {}\n", snapshot.location, snapshot.country));

    out.push_str("\n  3-Day Forecast\n  ");
    for entry in display::forecast_days(snapshot.temp, unit) {
        out.push_str(&format!("Day {}: {} {}°   ", entry.day, icon.symbol(), entry.temp));
    }
    out.push('\n');

    out.push_str(&format!(
        "\n  Wind      speed {} m/s, direction {}°\n",
        snapshot.wind_speed, snapshot.wind_deg
    ));
    out.push_str(&format!("  Humidity  {}\n", humidity_bar(snapshot.humidity)));

    out
}

/// Ten-slot text progress bar, e.g. "[██████░░░░] 60%".
fn humidity_bar(pct: u8) -> String {
    let filled = ((usize::from(pct) * 10 + 50) / 100).min(10);
    format!("[{}{}] {}%", "█".repeat(filled), "░".repeat(10 - filled), pct)
}

/// Uppercase the first letter of each word, like the page's capitalized
/// description ("clear sky" -> "Clear Sky").
fn capitalize(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
