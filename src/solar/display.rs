//! Display and formatting utilities for sun times.
//!
//! Formatting is where absent events meet presentation: every helper here takes
//! `Option` instants and hands `None` straight back, so a polar day or night never
//! turns into a placeholder time by accident.

use anyhow::{Context, Result};
use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use super::coordinate::GeoCoordinate;
use super::ephemeris::*;
use super::times::Horizon;
use crate::constants::*;

/// Options for rendering a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFormatOptions {
    /// 12-hour clock with AM/PM (`05:25 AM`) instead of 24-hour (`05:25`).
    pub hour12: bool,
    pub show_seconds: bool,
}

impl Default for TimeFormatOptions {
    fn default() -> Self {
        Self {
            hour12: DEFAULT_HOUR12,
            show_seconds: DEFAULT_SHOW_SECONDS,
        }
    }
}

impl TimeFormatOptions {
    fn pattern(&self) -> &'static str {
        match (self.hour12, self.show_seconds) {
            (true, false) => "%I:%M %p",
            (true, true) => "%I:%M:%S %p",
            (false, false) => "%H:%M",
            (false, true) => "%H:%M:%S",
        }
    }
}

/// Parse an IANA timezone name such as `America/New_York`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Unknown timezone '{name}'"))
}

/// Render an instant as a time of day in `timezone`.
///
/// Returns `None` when there is no instant (no event on that day).
pub fn format_time(
    instant: Option<DateTime<Utc>>,
    timezone: &Tz,
    options: &TimeFormatOptions,
) -> Option<String> {
    instant.map(|t| {
        t.with_timezone(timezone)
            .format(options.pattern())
            .to_string()
    })
}

/// Render a number of hours as `"{H}h {M}m"`.
///
/// Minutes are rounded on the total so the output never shows `60m`; negative
/// input renders as zero.
pub fn format_duration(hours: f64) -> String {
    let total_minutes = (hours.max(0.0) * 60.0).round() as i64;
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

/// Render the calendar date of an instant in `timezone`, e.g. `Friday, June 21, 2024`.
pub fn format_date(instant: DateTime<Utc>, timezone: &Tz) -> String {
    instant
        .with_timezone(timezone)
        .format("%A, %B %-d, %Y")
        .to_string()
}

/// Render the UTC offset of `timezone` at `instant` as `+HH:MM`.
pub fn format_utc_offset(instant: DateTime<Utc>, timezone: &Tz) -> String {
    let offset_secs = timezone
        .offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc();
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let abs = offset_secs.abs();
    format!("{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}

/// Log the intermediate values of the ephemeris for `instant` at `coordinate`.
///
/// Shows each stage of the pipeline in degrees plus the hour angle of every
/// standard threshold, which makes it easy to see why a day came out polar.
pub fn log_solar_debug_info(instant: DateTime<Utc>, coordinate: GeoCoordinate, timezone: &Tz) {
    let d = days_since_j2000(&instant);
    let m = solar_mean_anomaly(d);
    let c = equation_of_center(m);
    let l = ecliptic_longitude(m);
    let dec = solar_declination(l);
    let ra = right_ascension(l);
    let lst = sidereal_time(d, coordinate.longitude_west_radians());

    log_pipe!();
    log_debug!("Solar calculation details:");
    log_indented!("          Coordinates: {coordinate}");
    log_indented!(
        "             Timezone: {timezone} ({})",
        format_utc_offset(instant, timezone)
    );
    log_indented!("    Anchor instant UTC: {}", instant.format("%Y-%m-%d %H:%M:%S"));
    log_indented!("           Julian Day: {:.5}", julian_day(&instant));
    log_indented!("   Days since J2000.0: {d:.5}");
    log_indented!(
        "         Mean anomaly: {:.4}°",
        (m * RAD_TO_DEG).rem_euclid(360.0)
    );
    log_indented!("  Equation of center: {:.4}°", c * RAD_TO_DEG);
    log_indented!(
        "   Ecliptic longitude: {:.4}°",
        (l * RAD_TO_DEG).rem_euclid(360.0)
    );
    log_indented!("          Declination: {:.4}°", dec * RAD_TO_DEG);
    log_indented!(
        "      Right ascension: {:.4}°",
        (ra * RAD_TO_DEG).rem_euclid(360.0)
    );
    log_indented!(
        "  Local sidereal time: {:.4}°",
        (lst * RAD_TO_DEG).rem_euclid(360.0)
    );

    log_indented!("--- Hour angles ---");
    for (label, horizon) in [
        ("       Sunrise (-0.833°)", Horizon::Sunrise),
        ("           Civil (-6°)", Horizon::Civil),
        ("       Nautical (-12°)", Horizon::Nautical),
        ("   Astronomical (-18°)", Horizon::Astronomical),
    ] {
        match hour_angle(horizon.altitude_degrees(), coordinate.latitude_radians(), dec) {
            Some(h) => log_indented!("{label}: {:.4}°", h * RAD_TO_DEG),
            None => log_indented!("{label}: no crossing"),
        }
    }
}
