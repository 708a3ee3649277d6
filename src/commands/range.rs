//! `range` command: sunrise and sunset for consecutive days.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::{ResolvedQuery, time_or};
use crate::constants::{MAXIMUM_RANGE_DAYS, MINIMUM_RANGE_DAYS};
use crate::logger::write_output;
use crate::solar::{
    DatedSunTimes, PolarEvent, SunTimesPayload, format_duration, get_sun_times_range,
    get_twilight_times,
};

/// One table row: `[date, sunrise, sunset, daylight]`.
pub fn range_row(query: &ResolvedQuery, entry: &DatedSunTimes<Tz>) -> [String; 4] {
    let (sunrise, sunset) = match entry.times.polar_event() {
        PolarEvent::None => (
            time_or(entry.times.sunrise(), query, "-"),
            time_or(entry.times.sunset(), query, "-"),
        ),
        PolarEvent::PolarDay => ("polar day".to_string(), String::new()),
        PolarEvent::PolarNight => ("polar night".to_string(), String::new()),
    };

    [
        entry.date.format("%a %b %d").to_string(),
        sunrise,
        sunset,
        format_duration(entry.times.daylight_hours),
    ]
}

fn validate_days(days: u32) -> Result<()> {
    if !(MINIMUM_RANGE_DAYS..=MAXIMUM_RANGE_DAYS).contains(&days) {
        anyhow::bail!(
            "Day count ({}) must be between {} and {}",
            days,
            MINIMUM_RANGE_DAYS,
            MAXIMUM_RANGE_DAYS
        );
    }
    Ok(())
}

/// Print `days` days starting at the query date, or a JSON array of payloads.
pub fn run_range_command(query: &ResolvedQuery, days: u32, now: DateTime<Utc>) -> Result<()> {
    validate_days(days)?;

    let latitude = query.coordinate.latitude;
    let longitude = query.coordinate.longitude;
    let range = get_sun_times_range(&query.local_anchor(), days, latitude, longitude);

    if query.json {
        let payloads: Vec<SunTimesPayload> = range
            .map(|entry| {
                let bundle = get_twilight_times(&entry.date, latitude, longitude);
                SunTimesPayload::new(
                    query.name.clone(),
                    query.coordinate,
                    &query.timezone,
                    entry.date.with_timezone(&Utc),
                    &bundle,
                    now,
                )
            })
            .collect();
        let json = serde_json::to_string_pretty(&payloads)
            .context("Failed to serialize sun times range")?;
        write_output(&format!("{json}\n"));
        return Ok(());
    }

    log_block_start!("Sun times for {}", query.location_label());
    log_indented!("{} days from {} ({})", days, query.date, query.timezone);

    log_block_start!(
        "{:<11} {:<12} {:<12} {}",
        "Date",
        "Sunrise",
        "Sunset",
        "Daylight"
    );
    for entry in range {
        let [date, sunrise, sunset, daylight] = range_row(query, &entry);
        log_indented!("{:<11} {:<12} {:<12} {}", date, sunrise, sunset, daylight);
    }

    log_end!();
    Ok(())
}
