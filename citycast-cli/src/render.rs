use chrono::Local;
use citycast_core::{QueryState, Units, WeatherDisplay};
use std::fmt::Write;

/// Multi-line card for one weather reading.
pub fn display(display: &WeatherDisplay, units: Units) -> String {
    let symbol = units.symbol();
    let mut out = String::new();

    let title = display.location.as_deref().unwrap_or("Current weather");
    if let Some(condition) = display.condition.as_deref() {
        writeln!(out, "{title}: {condition}").ok();
    } else {
        writeln!(out, "{title}").ok();
    }

    writeln!(out, "  {}{symbol}  feels like {}{symbol}", display.temperature, display.feels_like)
        .ok();
    writeln!(out, "  min {}{symbol}  max {}{symbol}", display.min_temp, display.max_temp).ok();

    if !display.icon_url.is_empty() {
        writeln!(out, "  icon: {}", display.icon_url).ok();
    }
    if let Some(observed_at) = display.observed_at {
        writeln!(out, "  observed at {}", observed_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"))
            .ok();
    }

    out
}

/// Everything the interactive session shows for a published state.
pub fn state(state: &QueryState, units: Units) -> String {
    let mut out = String::new();

    match state {
        QueryState::Init => out.push_str("No search yet.\n"),
        QueryState::Loading => out.push_str("Loading...\n"),
        QueryState::Success { display: current, .. } => out.push_str(&display(current, units)),
        QueryState::Error { message, last_known, .. } => {
            writeln!(out, "! {message}").ok();
            if let Some(last) = last_known {
                out.push_str(&display(last, units));
            }
        }
    }

    let recent = state.recent_searches();
    if !recent.is_empty() {
        writeln!(out, "Recent searches: {}", recent.join(", ")).ok();
    }

    out
}
