//! `times` command: sunrise, sunset, solar noon and day length.

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::{ResolvedQuery, time_or};
use crate::logger::write_output;
use crate::solar::{
    PolarEvent, SunEventResult, SunTimesPayload, TimeWindow, format_date, format_duration,
    get_photo_windows, get_sun_times, get_twilight_times,
};

/// Report rows for one day, as `(label, value)` pairs.
pub fn times_rows(query: &ResolvedQuery, times: &SunEventResult) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();

    match times.polar_event() {
        PolarEvent::None => {
            rows.push(("Sunrise", time_or(times.sunrise(), query, "-")));
            rows.push(("Sunset", time_or(times.sunset(), query, "-")));
        }
        PolarEvent::PolarDay => rows.push(("Sun", "up all day (polar day)".to_string())),
        PolarEvent::PolarNight => rows.push(("Sun", "below horizon (polar night)".to_string())),
    }

    rows.push(("Solar noon", time_or(Some(times.solar_noon), query, "-")));
    rows.push(("Daylight", format_duration(times.daylight_hours)));
    rows
}

fn window_text(window: Option<TimeWindow>, query: &ResolvedQuery) -> String {
    match window {
        Some(w) => format!(
            "{} to {}",
            time_or(Some(w.start), query, "-"),
            time_or(Some(w.end), query, "-")
        ),
        None => "not today".to_string(),
    }
}

/// Print the day's sun times, or the JSON payload with `--json`.
pub fn run_times_command(query: &ResolvedQuery, now: DateTime<Utc>) -> Result<()> {
    if query.json {
        let bundle = get_twilight_times(
            &query.anchor,
            query.coordinate.latitude,
            query.coordinate.longitude,
        );
        let payload = SunTimesPayload::new(
            query.name.clone(),
            query.coordinate,
            &query.timezone,
            query.anchor,
            &bundle,
            now,
        );
        write_output(&format!("{}\n", payload.to_json_pretty()?));
        return Ok(());
    }

    let times = get_sun_times(
        &query.anchor,
        query.coordinate.latitude,
        query.coordinate.longitude,
    );

    log_block_start!("Sun times for {}", query.location_label());
    log_indented!(
        "{} ({})",
        format_date(query.anchor, &query.timezone),
        query.timezone
    );

    log_pipe!();
    for (label, value) in times_rows(query, &times) {
        log_decorated!("{:<11} {}", format!("{label}:"), value);
    }

    if !times.is_polar() {
        let windows = get_photo_windows(
            &query.anchor,
            query.coordinate.latitude,
            query.coordinate.longitude,
        );
        log_block_start!("Golden hour:");
        log_indented!("Morning: {}", window_text(windows.morning_golden_hour, query));
        log_indented!("Evening: {}", window_text(windows.evening_golden_hour, query));
        log_block_start!("Blue hour:");
        log_indented!("Morning: {}", window_text(windows.morning_blue_hour, query));
        log_indented!("Evening: {}", window_text(windows.evening_blue_hour, query));
    }

    log_end!();
    Ok(())
}
