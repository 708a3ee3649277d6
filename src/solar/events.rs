//! Event resolution: turning ephemeris values into sunrise, sunset and transit instants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::coordinate::GeoCoordinate;
use super::ephemeris::*;
use crate::constants::*;

/// Polar classification of a day at a given altitude threshold.
///
/// Serializes as `none`, `polar_day` or `polar_night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolarEvent {
    None,
    PolarDay,
    PolarNight,
}

impl PolarEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolarEvent::None => "none",
            PolarEvent::PolarDay => "polar_day",
            PolarEvent::PolarNight => "polar_night",
        }
    }
}

impl fmt::Display for PolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether and when the sun crosses the altitude threshold.
///
/// Sunrise and sunset exist together or not at all, so they live in one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunEvent {
    /// The sun crosses the threshold twice.
    Regular {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// The sun stays above the threshold all day.
    PolarDay,
    /// The sun stays below the threshold all day.
    PolarNight,
}

/// Sun event times for one day and one altitude threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEventResult {
    pub event: SunEvent,
    pub solar_noon: DateTime<Utc>,
    pub nadir: DateTime<Utc>,
    /// Hours between sunrise and sunset; exactly 24 or 0 for polar days.
    pub daylight_hours: f64,
}

impl SunEventResult {
    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        match self.event {
            SunEvent::Regular { sunrise, .. } => Some(sunrise),
            _ => None,
        }
    }

    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        match self.event {
            SunEvent::Regular { sunset, .. } => Some(sunset),
            _ => None,
        }
    }

    pub fn polar_event(&self) -> PolarEvent {
        match self.event {
            SunEvent::Regular { .. } => PolarEvent::None,
            SunEvent::PolarDay => PolarEvent::PolarDay,
            SunEvent::PolarNight => PolarEvent::PolarNight,
        }
    }

    pub fn is_polar(&self) -> bool {
        !matches!(self.event, SunEvent::Regular { .. })
    }
}

/// Compute the sunrise and sunset at `altitude_degrees` nearest to `instant`.
///
/// When the sun does not cross the threshold, the day is classified as polar day
/// if latitude and declination share a sign and their sum exceeds 90 degrees in
/// magnitude, and as polar night otherwise. Near the dates where the polar circle
/// transitions happen this can be off by a day.
pub fn solve_sun_event(
    instant: DateTime<Utc>,
    coordinate: GeoCoordinate,
    altitude_degrees: f64,
) -> SunEventResult {
    let lw = coordinate.longitude_west_radians();
    let phi = coordinate.latitude_radians();
    let d = days_since_j2000(&instant);

    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);
    let dec = solar_declination(l);
    let (solar_noon, nadir) = solve_noon_and_nadir(instant, coordinate);

    let Some(h) = hour_angle(altitude_degrees, phi, dec) else {
        let lat = coordinate.latitude;
        let dec_degrees = dec * RAD_TO_DEG;
        let sun_never_sets = (lat > 0.0 && dec > 0.0 && lat + dec_degrees > POLAR_DAY_THRESHOLD)
            || (lat < 0.0 && dec < 0.0 && lat + dec_degrees < -POLAR_DAY_THRESHOLD);

        let (event, daylight_hours) = if sun_never_sets {
            (SunEvent::PolarDay, 24.0)
        } else {
            (SunEvent::PolarNight, 0.0)
        };
        return SunEventResult {
            event,
            solar_noon,
            nadir,
            daylight_hours,
        };
    };

    let n = julian_cycle(d, lw);
    let j_set = transit_julian_day(n, lw, h, m, l);
    let j_rise = j_set - 2.0 * h / std::f64::consts::TAU;

    let sunrise = from_julian_day(j_rise);
    let sunset = from_julian_day(j_set);
    let daylight_ms = (sunset - sunrise).num_milliseconds() as f64;

    SunEventResult {
        event: SunEvent::Regular { sunrise, sunset },
        solar_noon,
        nadir,
        daylight_hours: (daylight_ms / MILLIS_PER_HOUR).max(0.0),
    }
}

/// Solar noon (transit) nearest to `instant` and the nadir twelve hours before it.
pub fn solve_noon_and_nadir(
    instant: DateTime<Utc>,
    coordinate: GeoCoordinate,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let lw = coordinate.longitude_west_radians();
    let d = days_since_j2000(&instant);
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);

    let j_noon = transit_julian_day(julian_cycle(d, lw), lw, 0.0, m, l);
    (from_julian_day(j_noon), from_julian_day(j_noon - 0.5))
}
