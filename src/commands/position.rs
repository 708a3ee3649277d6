//! `position` command: where the sun is in the sky.
//!
//! Uses the current time, or local noon when `--date` is given.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::{ResolvedQuery, time_or};
use crate::logger::write_output;
use crate::solar::{GeoCoordinate, SunPosition, get_sun_position};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionPayload {
    pub coordinates: GeoCoordinate,
    pub timezone: String,
    pub instant: String,
    pub azimuth: f64,
    pub altitude: f64,
    pub above_horizon: bool,
}

/// The instant the report describes.
pub fn position_instant(query: &ResolvedQuery, now: DateTime<Utc>) -> DateTime<Utc> {
    if query.explicit_date {
        query.anchor
    } else {
        now
    }
}

/// Eight-point compass name for an azimuth in degrees.
pub fn compass_point(azimuth: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let index = ((azimuth.rem_euclid(360.0) + 22.5) / 45.0) as usize % POINTS.len();
    POINTS[index]
}

pub fn run_position_command(query: &ResolvedQuery, now: DateTime<Utc>) -> Result<()> {
    let instant = position_instant(query, now);
    let position: SunPosition = get_sun_position(
        &instant,
        query.coordinate.latitude,
        query.coordinate.longitude,
    );

    if query.json {
        let payload = PositionPayload {
            coordinates: query.coordinate,
            timezone: query.timezone.to_string(),
            instant: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            azimuth: position.azimuth,
            altitude: position.altitude,
            above_horizon: position.is_above_horizon(),
        };
        let json = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize sun position")?;
        write_output(&format!("{json}\n"));
        return Ok(());
    }

    log_block_start!("Sun position for {}", query.location_label());
    log_indented!(
        "{} {}",
        instant
            .with_timezone(&query.timezone)
            .format("%Y-%m-%d"),
        time_or(Some(instant), query, "-")
    );
    log_pipe!();
    log_decorated!(
        "Azimuth:  {:.1}° ({})",
        position.azimuth,
        compass_point(position.azimuth)
    );
    log_decorated!("Altitude: {:.1}°", position.altitude);
    if !position.is_above_horizon() {
        log_indented!("The sun is below the horizon");
    }
    log_end!();
    Ok(())
}
